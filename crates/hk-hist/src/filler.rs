//! Single-pass histogram filling from named table columns.

use hk_core::Result;

use crate::histogram::Hist1D;
use crate::table::ColumnTable;

/// Under/overflow handling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPolicy {
    /// Drop entries outside the histogram range (tallied in `underflow`/`overflow`).
    Drop,
    /// Fold underflow into the first bin and overflow into the last bin.
    Fold,
}

/// Specification for filling one histogram from a column table.
#[derive(Debug, Clone)]
pub struct FillSpec {
    /// Empty target histogram (name, range, and binning already set).
    pub hist: Hist1D,
    /// Column holding the variable to histogram.
    pub value: String,
    /// Optional column holding per-entry weights.
    pub weight: Option<String>,
    /// Under/overflow policy.
    pub flow: FlowPolicy,
}

impl FillSpec {
    /// Unweighted spec with the default `Drop` flow policy.
    pub fn new(hist: Hist1D, value: impl Into<String>) -> Self {
        Self { hist, value: value.into(), weight: None, flow: FlowPolicy::Drop }
    }
}

/// Fill several histograms in a single pass over the table rows.
///
/// Every referenced column must exist; [`hk_core::Error::MissingColumn`]
/// otherwise.
pub fn fill_from_columns(specs: Vec<FillSpec>, table: &ColumnTable) -> Result<Vec<Hist1D>> {
    // Resolve columns up front so a bad spec fails before any filling.
    let mut resolved: Vec<(&[f64], Option<&[f64]>)> = Vec::with_capacity(specs.len());
    for spec in &specs {
        let values = table.column(&spec.value)?;
        let weights = match &spec.weight {
            Some(w) => Some(table.column(w)?),
            None => None,
        };
        resolved.push((values, weights));
    }

    let n_rows = table.n_rows();
    let mut hists: Vec<Hist1D> = Vec::with_capacity(specs.len());
    for (spec, (values, weights)) in specs.into_iter().zip(resolved) {
        let mut h = spec.hist;
        for row in 0..n_rows {
            let v = values[row];
            let w = weights.map_or(1.0, |ws| ws[row]);
            match spec.flow {
                FlowPolicy::Drop => h.fill_weighted(v, w),
                FlowPolicy::Fold => fill_folded(&mut h, v, w),
            }
        }
        hists.push(h);
    }
    Ok(hists)
}

/// Fill with out-of-range entries folded into the nearest edge bin.
///
/// Flows are still tallied in `underflow`/`overflow` before folding.
fn fill_folded(h: &mut Hist1D, value: f64, weight: f64) {
    let folded = if value < h.x_min {
        h.underflow += weight;
        h.bin_center(0)
    } else if value >= h.x_max {
        h.overflow += weight;
        h.bin_center(h.n_bins - 1)
    } else {
        value
    };
    if let Some(b) = h.find_bin(folded) {
        h.bin_content[b] += weight;
        h.sumw2[b] += weight * weight;
        h.entries += 1.0;
    }
}
