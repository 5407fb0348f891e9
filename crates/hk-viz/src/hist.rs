//! Single-histogram artifact.

use serde::{Deserialize, Serialize};

use hk_hist::Hist1D;

use crate::axis::AxisOptions;

/// One distribution drawn alone as an outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Bin edges (length = n_bins + 1).
    pub bin_edges: Vec<f64>,
    /// Bin contents.
    pub y: Vec<f64>,
    /// Y-axis maximum (peak plus a fixed 20% margin).
    pub y_max: f64,
    /// Axis display options.
    pub axes: AxisOptions,
}

/// Build a single-histogram artifact. Never fails; an empty histogram gets a
/// unit y-axis.
pub fn hist_artifact(h: &Hist1D, axes: AxisOptions) -> HistArtifact {
    let peak = h.max_value();
    HistArtifact {
        schema_version: "histkit_hist_v0".to_string(),
        name: h.name.clone(),
        title: h.title.clone(),
        bin_edges: h.bin_edges.clone(),
        y: h.bin_content.clone(),
        y_max: if peak > 0.0 { peak * 1.2 } else { 1.0 },
        axes,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn peak_with_margin() {
        let mut h = Hist1D::with_bins("h", "", 0.0, 2.0, 2);
        h.fill_weighted(0.5, 10.0);
        let art = hist_artifact(&h, AxisOptions::labels("value [units]", "Events"));
        assert_relative_eq!(art.y_max, 12.0, epsilon = 1e-12);
        assert_eq!(art.axes.x_label, "value [units]");
    }

    #[test]
    fn empty_histogram_gets_unit_axis() {
        let h = Hist1D::with_bins("h", "", 0.0, 2.0, 2);
        let art = hist_artifact(&h, AxisOptions::default());
        assert_eq!(art.y_max, 1.0);
    }
}
