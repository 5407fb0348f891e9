use serde::{Deserialize, Serialize};

/// Axis titles and display options for one composite render.
///
/// These travel with the artifact but are display-only; they are never
/// persisted with histogram data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisOptions {
    /// X-axis title.
    pub x_label: String,
    /// Y-axis title.
    pub y_label: String,
    /// Multiplier on the gap between the y-axis and its title.
    pub label_offset: f64,
    /// Forced lower edge of the y axis.
    pub y_min: f64,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self { x_label: String::new(), y_label: String::new(), label_offset: 1.0, y_min: 0.0 }
    }
}

impl AxisOptions {
    /// Axis options with both titles set.
    pub fn labels(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self { x_label: x_label.into(), y_label: y_label.into(), ..Default::default() }
    }

    /// Set the y-title offset multiplier.
    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }

    /// Force the y-axis lower edge.
    pub fn with_y_min(mut self, y_min: f64) -> Self {
        self.y_min = y_min;
        self
    }
}
