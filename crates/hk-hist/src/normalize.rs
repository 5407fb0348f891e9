//! Area normalization for histograms.

use hk_core::{Error, Result};

use crate::histogram::{Hist1D, Hist2D};

/// Rescale `h` so its integral equals `area`.
///
/// The pre-scale integral must be positive and finite; otherwise
/// [`Error::ZeroIntegral`] is returned and `h` is left untouched.
pub fn normalize(h: &mut Hist1D, area: f64) -> Result<()> {
    let integral = h.integral();
    if !(integral.is_finite() && integral > 0.0) {
        return Err(Error::ZeroIntegral(h.name.clone()));
    }
    h.scale(area / integral);
    Ok(())
}

/// Rescale `h` so its integral equals 1.
pub fn normalize_to_unity(h: &mut Hist1D) -> Result<()> {
    normalize(h, 1.0)
}

/// Rescale every member of `hs` by the same factor so the *summed* integral
/// equals `area`. Relative proportions between members are preserved.
pub fn normalize_set(hs: &mut [Hist1D], area: f64) -> Result<()> {
    let total: f64 = hs.iter().map(Hist1D::integral).sum();
    if !(total.is_finite() && total > 0.0) {
        let names = hs.iter().map(|h| h.name.as_str()).collect::<Vec<_>>().join(",");
        return Err(Error::ZeroIntegral(names));
    }
    for h in hs.iter_mut() {
        h.scale(area / total);
    }
    Ok(())
}

/// Rescale a 2D histogram so its integral (volume) equals `volume`.
pub fn normalize_2d(h: &mut Hist2D, volume: f64) -> Result<()> {
    let integral = h.integral();
    if !(integral.is_finite() && integral > 0.0) {
        return Err(Error::ZeroIntegral(h.name.clone()));
    }
    h.scale(volume / integral);
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn hist(name: &str, contents: &[f64]) -> Hist1D {
        let mut h = Hist1D::with_bins(name, "", 0.0, contents.len() as f64, contents.len());
        for (i, &v) in contents.iter().enumerate() {
            h.fill_weighted(i as f64 + 0.5, v);
        }
        h
    }

    #[test]
    fn integral_hits_target() {
        let mut h = hist("h", &[2.0, 3.0, 5.0]);
        normalize(&mut h, 1.0).unwrap();
        assert_relative_eq!(h.integral(), 1.0, epsilon = 1e-12);
        normalize(&mut h, 7.5).unwrap();
        assert_relative_eq!(h.integral(), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn idempotent_for_same_target() {
        let mut h = hist("h", &[1.0, 4.0]);
        normalize(&mut h, 2.0).unwrap();
        let snapshot = h.bin_content.clone();
        normalize(&mut h, 2.0).unwrap();
        for (a, b) in snapshot.iter().zip(h.bin_content.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_integral_is_an_error() {
        let mut h = Hist1D::with_bins("empty", "", 0.0, 1.0, 4);
        let err = normalize_to_unity(&mut h).unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert_eq!(h.integral(), 0.0);
    }

    #[test]
    fn set_sums_to_target() {
        let mut hs = vec![hist("a", &[3.0]), hist("b", &[1.0])];
        normalize_set(&mut hs, 1.0).unwrap();
        let total: f64 = hs.iter().map(Hist1D::integral).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        // Proportions preserved: a carries 3/4 of the total.
        assert_relative_eq!(hs[0].integral(), 0.75, epsilon = 1e-12);
    }

    #[test]
    fn set_of_empties_is_an_error() {
        let mut hs = vec![Hist1D::with_bins("a", "", 0.0, 1.0, 1)];
        assert!(normalize_set(&mut hs, 1.0).is_err());
    }

    #[test]
    fn volume_normalization_2d() {
        let mut h = Hist2D::with_bins("m", "", 0.0, 2.0, 2, 0.0, 2.0, 2);
        h.fill(0.5, 0.5);
        h.fill(1.5, 1.5);
        normalize_2d(&mut h, 1.0).unwrap();
        assert_relative_eq!(h.integral(), 1.0, epsilon = 1e-12);
    }
}
