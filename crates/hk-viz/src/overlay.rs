//! Overlay artifact — several distributions drawn as outlines on shared axes.
//!
//! The builder computes a single y-axis maximum from the two tallest peaks so
//! no curve is clipped, with headroom that shrinks as the runner-up approaches
//! the leader.

use serde::{Deserialize, Serialize};

use hk_core::{Error, Result};
use hk_hist::Hist1D;

use crate::axis::AxisOptions;

/// Overlay of two or more distributions sharing one bin layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Shared bin edges (length = n_bins + 1).
    pub bin_edges: Vec<f64>,
    /// One series per input histogram, in input order.
    pub series: Vec<OverlaySeries>,
    /// Shared y-axis maximum from the headroom rule.
    pub y_max: f64,
    /// Axis display options.
    pub axes: AxisOptions,
}

/// One named curve of an overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlaySeries {
    /// Series name (legend label).
    pub name: String,
    /// Bin contents.
    pub y: Vec<f64>,
}

/// Y-axis maximum that keeps every peak visible.
///
/// Let `M` be the largest peak and `N` the second largest (ties keep input
/// order; any further peaks are ignored). A small runner-up gets a modest
/// fixed-fraction margin; a close runner-up shrinks the margin toward zero:
///
/// - `N < M/2` → `M + N/3`
/// - otherwise → `(3M − N)/2`
///
/// Equal peaks therefore yield exactly `M`, with no margin above them.
/// Fewer than two peaks is [`Error::TooFewSeries`].
pub fn headroom(peaks: &[f64]) -> Result<f64> {
    if peaks.len() < 2 {
        return Err(Error::TooFewSeries(peaks.len()));
    }
    let mut sorted = peaks.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));
    let m = sorted[0];
    let n = sorted[1];
    if n < m / 2.0 {
        Ok(m + n / 3.0)
    } else {
        Ok((3.0 * m - n) / 2.0)
    }
}

/// Build an overlay artifact from two or more histograms.
///
/// All inputs must share the same bin layout; [`Error::BinMismatch`]
/// otherwise. Inputs are copied into the artifact, never mutated.
pub fn overlay_artifact(hists: &[&Hist1D], axes: AxisOptions) -> Result<OverlayArtifact> {
    if hists.len() < 2 {
        return Err(Error::TooFewSeries(hists.len()));
    }
    let first = hists[0];
    for h in &hists[1..] {
        if !first.same_binning(h) {
            return Err(Error::BinMismatch(first.name.clone(), h.name.clone()));
        }
    }

    let peaks: Vec<f64> = hists.iter().map(|h| h.max_value()).collect();
    let y_max = headroom(&peaks)?;

    Ok(OverlayArtifact {
        schema_version: "histkit_overlay_v0".to_string(),
        bin_edges: first.bin_edges.clone(),
        series: hists
            .iter()
            .map(|h| OverlaySeries { name: h.name.clone(), y: h.bin_content.clone() })
            .collect(),
        y_max,
        axes,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn small_runner_up_gets_fixed_margin() {
        let h = headroom(&[100.0, 40.0]).unwrap();
        assert_relative_eq!(h, 100.0 + 40.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn close_runner_up_shrinks_margin() {
        let h = headroom(&[100.0, 80.0]).unwrap();
        assert_relative_eq!(h, 110.0, epsilon = 1e-12);
    }

    #[test]
    fn equal_peaks_leave_no_margin() {
        let h = headroom(&[50.0, 50.0]).unwrap();
        assert_relative_eq!(h, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn order_does_not_matter() {
        assert_relative_eq!(
            headroom(&[40.0, 100.0]).unwrap(),
            headroom(&[100.0, 40.0]).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn extra_smaller_peaks_are_ignored() {
        let two = headroom(&[100.0, 80.0]).unwrap();
        let many = headroom(&[100.0, 80.0, 10.0, 5.0, 1.0]).unwrap();
        assert_relative_eq!(two, many, epsilon = 1e-12);
    }

    #[test]
    fn boundary_exactly_half() {
        // N == M/2 takes the proportional branch: (3*100 - 50)/2.
        let h = headroom(&[100.0, 50.0]).unwrap();
        assert_relative_eq!(h, 125.0, epsilon = 1e-12);
    }

    #[test]
    fn one_peak_is_an_error() {
        assert!(headroom(&[100.0]).is_err());
        assert!(headroom(&[]).is_err());
    }

    #[test]
    fn artifact_from_hists() {
        let mut a = Hist1D::with_bins("a", "", 0.0, 2.0, 2);
        let mut b = Hist1D::with_bins("b", "", 0.0, 2.0, 2);
        a.fill_weighted(0.5, 100.0);
        b.fill_weighted(1.5, 40.0);
        let art = overlay_artifact(&[&a, &b], AxisOptions::default()).unwrap();
        assert_eq!(art.series.len(), 2);
        assert_eq!(art.series[0].name, "a");
        assert_relative_eq!(art.y_max, 100.0 + 40.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn artifact_rejects_mismatched_binning() {
        let a = Hist1D::with_bins("a", "", 0.0, 2.0, 2);
        let b = Hist1D::with_bins("b", "", 0.0, 2.0, 4);
        let err = overlay_artifact(&[&a, &b], AxisOptions::default()).unwrap_err();
        assert!(err.to_string().contains("mismatch"));
    }

    #[test]
    fn artifact_rejects_single_input() {
        let a = Hist1D::with_bins("a", "", 0.0, 2.0, 2);
        assert!(overlay_artifact(&[&a], AxisOptions::default()).is_err());
    }
}
