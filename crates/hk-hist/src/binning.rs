//! Bin-count and bin-edge calculations for uniform-width histograms.

use hk_core::{Error, Result};

/// Smallest number of equal-width bins covering `[min, max]` without
/// truncation loss: `ceil((max - min) / width)`.
///
/// Returns [`Error::InvalidBinning`] when `width <= 0`, `max <= min`, or any
/// argument is non-finite. On success the result is always >= 1.
pub fn bin_count(min: f64, max: f64, width: f64) -> Result<usize> {
    if !(min.is_finite() && max.is_finite() && width.is_finite()) || width <= 0.0 || max <= min {
        return Err(Error::InvalidBinning { min, max, width });
    }
    Ok(((max - min) / width).ceil() as usize)
}

/// Uniform bin edges over `[min, max]` (length `n_bins + 1`).
///
/// The last edge is exactly `max`, not an accumulated sum of steps.
pub fn bin_edges(min: f64, max: f64, n_bins: usize) -> Vec<f64> {
    let step = (max - min) / n_bins as f64;
    let mut edges: Vec<f64> = (0..n_bins).map(|i| min + i as f64 * step).collect();
    edges.push(max);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division() {
        assert_eq!(bin_count(-4.0, 4.0, 1.0).unwrap(), 8);
        assert_eq!(bin_count(0.0, 4.0, 0.5).unwrap(), 8);
        assert_eq!(bin_count(0.0, 100.0, 10.0).unwrap(), 10);
    }

    #[test]
    fn rounds_up() {
        assert_eq!(bin_count(0.0, 10.0, 3.0).unwrap(), 4);
        assert_eq!(bin_count(0.0, 1.0, 0.3).unwrap(), 4);
        assert_eq!(bin_count(-1.0, 1.0, 0.7).unwrap(), 3);
    }

    #[test]
    fn integer_valued_arguments_agree() {
        // Callers convert integers explicitly; equal numeric values must agree.
        let a = bin_count(-5.0, 5.0, 2.0).unwrap();
        let b = bin_count(f64::from(-5i32), f64::from(5i32), f64::from(2i32)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 5);
    }

    #[test]
    fn invalid_width() {
        assert!(bin_count(0.0, 1.0, 0.0).is_err());
        assert!(bin_count(0.0, 1.0, -0.5).is_err());
        assert!(bin_count(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn inverted_range() {
        assert!(bin_count(1.0, 1.0, 0.5).is_err());
        assert!(bin_count(2.0, 1.0, 0.5).is_err());
    }

    #[test]
    fn edges_cover_range() {
        let edges = bin_edges(-4.0, 4.0, 8);
        assert_eq!(edges.len(), 9);
        assert_eq!(edges[0], -4.0);
        assert_eq!(edges[8], 4.0);
        assert!((edges[1] - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn last_edge_exact() {
        let edges = bin_edges(0.0, 0.9, 3);
        assert_eq!(*edges.last().unwrap(), 0.9);
    }
}
