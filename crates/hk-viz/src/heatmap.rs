//! Heatmap artifact — a 2D histogram as colormapped cells.

use serde::{Deserialize, Serialize};

use hk_hist::Hist2D;

use crate::axis::AxisOptions;

/// A 2D histogram prepared for colormapped rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// X bin edges (length = n_bins_x + 1).
    pub x_edges: Vec<f64>,
    /// Y bin edges (length = n_bins_y + 1).
    pub y_edges: Vec<f64>,
    /// Cell contents, row-major over y.
    pub z: Vec<f64>,
    /// Largest cell content (colormap upper bound).
    pub z_max: f64,
    /// Axis display options.
    pub axes: AxisOptions,
}

/// Build a heatmap artifact from a 2D histogram.
pub fn heatmap_artifact(h: &Hist2D, axes: AxisOptions) -> HeatmapArtifact {
    HeatmapArtifact {
        schema_version: "histkit_heatmap_v0".to_string(),
        name: h.name.clone(),
        title: h.title.clone(),
        x_edges: h.x_edges.clone(),
        y_edges: h.y_edges.clone(),
        z: h.bin_content.clone(),
        z_max: h.max_value(),
        axes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_edges_and_peak() {
        let mut h = Hist2D::with_bins("m", "", 0.0, 2.0, 2, 0.0, 2.0, 2);
        h.fill(0.5, 0.5);
        h.fill(0.5, 0.5);
        h.fill(1.5, 1.5);
        let art = heatmap_artifact(&h, AxisOptions::default());
        assert_eq!(art.x_edges.len(), 3);
        assert_eq!(art.z.len(), 4);
        assert_eq!(art.z_max, 2.0);
    }
}
