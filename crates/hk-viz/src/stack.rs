//! Stack artifact — distributions rendered as cumulative additive bands.

use serde::{Deserialize, Serialize};

use hk_core::{Error, Result};
use hk_hist::Hist1D;

use crate::axis::AxisOptions;

/// Additive stack of distributions sharing one bin layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Shared bin edges (length = n_bins + 1).
    pub bin_edges: Vec<f64>,
    /// Samples in draw order (largest total area first).
    pub samples: Vec<StackSample>,
    /// Sample names in draw order.
    pub stack_order: Vec<String>,
    /// Cumulative sum over all samples per bin.
    pub total_y: Vec<f64>,
    /// Y-axis maximum with margin above the summed peak.
    pub y_max: f64,
    /// Axis display options.
    pub axes: AxisOptions,
}

/// One band of a stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackSample {
    /// Sample name (legend label).
    pub name: String,
    /// Bin contents of this band alone.
    pub y: Vec<f64>,
}

/// Build a stack artifact, ordering samples by descending total area.
///
/// The sort is stable: samples with equal areas keep their relative input
/// order. The input slice itself is reordered (caller-visible); bin values
/// are not modified. Fill colors are assigned downstream from the palette in
/// this order. All inputs must share the same bin layout;
/// [`Error::BinMismatch`] otherwise.
pub fn stack_artifact(hists: &mut [Hist1D], axes: AxisOptions) -> Result<StackArtifact> {
    let Some(first) = hists.first() else {
        return Err(Error::TooFewSeries(0));
    };
    for h in &hists[1..] {
        if !hists[0].same_binning(h) {
            return Err(Error::BinMismatch(hists[0].name.clone(), h.name.clone()));
        }
    }
    let bin_edges = first.bin_edges.clone();
    let n_bins = first.n_bins;

    hists.sort_by(|a, b| b.integral().total_cmp(&a.integral()));

    let mut total_y = vec![0.0; n_bins];
    for h in hists.iter() {
        for (t, v) in total_y.iter_mut().zip(h.bin_content.iter()) {
            *t += v;
        }
    }
    let peak = total_y.iter().copied().fold(0.0_f64, f64::max);
    let y_max = if peak > 0.0 { peak * 1.2 } else { 1.0 };

    Ok(StackArtifact {
        schema_version: "histkit_stack_v0".to_string(),
        bin_edges,
        samples: hists
            .iter()
            .map(|h| StackSample { name: h.name.clone(), y: h.bin_content.clone() })
            .collect(),
        stack_order: hists.iter().map(|h| h.name.clone()).collect(),
        total_y,
        y_max,
        axes,
    })
}
