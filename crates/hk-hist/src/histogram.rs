//! One- and two-dimensional histograms with uniform binning.

use serde::{Deserialize, Serialize};

use hk_core::Result;

use crate::binning::{bin_count, bin_edges};

/// A 1D histogram over a fixed numeric range.
///
/// Bin contents are sums of fill weights; `sumw2` tracks the sum of squared
/// weights per bin for statistical errors. Entries falling outside
/// `[x_min, x_max)` are dropped and tallied in `underflow`/`overflow`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hist1D {
    /// Histogram name (identifies it in stores and legends).
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Number of bins (excluding under/overflow).
    pub n_bins: usize,
    /// Lower edge of first bin.
    pub x_min: f64,
    /// Upper edge of last bin.
    pub x_max: f64,
    /// Bin edges (length = n_bins + 1).
    pub bin_edges: Vec<f64>,
    /// Bin contents (length = n_bins).
    pub bin_content: Vec<f64>,
    /// Sum of weights squared per bin.
    pub sumw2: Vec<f64>,
    /// Sum of weights that fell below `x_min`.
    pub underflow: f64,
    /// Sum of weights that fell at or above `x_max`.
    pub overflow: f64,
    /// Number of in-range fill calls.
    pub entries: f64,
}

impl Hist1D {
    /// Empty histogram with `n_bins` uniform bins over `[x_min, x_max]`.
    pub fn with_bins(
        name: impl Into<String>,
        title: impl Into<String>,
        x_min: f64,
        x_max: f64,
        n_bins: usize,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            n_bins,
            x_min,
            x_max,
            bin_edges: bin_edges(x_min, x_max, n_bins),
            bin_content: vec![0.0; n_bins],
            sumw2: vec![0.0; n_bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0.0,
        }
    }

    /// Empty histogram whose bin count is derived from a desired bin width,
    /// rounding up so the range is covered without truncation loss.
    pub fn with_bin_width(
        name: impl Into<String>,
        title: impl Into<String>,
        x_min: f64,
        x_max: f64,
        width: f64,
    ) -> Result<Self> {
        let n = bin_count(x_min, x_max, width)?;
        Ok(Self::with_bins(name, title, x_min, x_max, n))
    }

    /// Fill one entry with unit weight.
    pub fn fill(&mut self, value: f64) {
        self.fill_weighted(value, 1.0);
    }

    /// Fill one entry with the given weight.
    pub fn fill_weighted(&mut self, value: f64, weight: f64) {
        if value < self.x_min {
            self.underflow += weight;
            return;
        }
        if value >= self.x_max {
            self.overflow += weight;
            return;
        }
        if let Some(b) = find_bin(&self.bin_edges, value) {
            self.bin_content[b] += weight;
            self.sumw2[b] += weight * weight;
            self.entries += 1.0;
        }
    }

    /// Sum of in-range bin contents.
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }

    /// Largest bin content (the peak). 0 for a zero-bin histogram.
    pub fn max_value(&self) -> f64 {
        if self.bin_content.is_empty() {
            return 0.0;
        }
        self.bin_content.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest bin content. 0 for a zero-bin histogram.
    pub fn min_value(&self) -> f64 {
        if self.bin_content.is_empty() {
            return 0.0;
        }
        self.bin_content.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Multiply every bin content by `factor` (and `sumw2` by `factor²`).
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.bin_content {
            *v *= factor;
        }
        for v in &mut self.sumw2 {
            *v *= factor * factor;
        }
        self.underflow *= factor;
        self.overflow *= factor;
    }

    /// Center of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        (self.bin_edges[i] + self.bin_edges[i + 1]) / 2.0
    }

    /// Bin index containing `value`, or `None` for under/overflow.
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        find_bin(&self.bin_edges, value)
    }

    /// True when `other` has the same bin count and (to rounding) the same edges.
    pub fn same_binning(&self, other: &Hist1D) -> bool {
        self.n_bins == other.n_bins
            && self
                .bin_edges
                .iter()
                .zip(other.bin_edges.iter())
                .all(|(a, b)| (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs())))
    }
}

/// A 2D histogram over a fixed rectangular range.
///
/// `bin_content` is row-major over y: index `iy * n_bins_x + ix`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hist2D {
    /// Histogram name.
    pub name: String,
    /// Histogram title.
    pub title: String,
    /// Number of bins along x.
    pub n_bins_x: usize,
    /// Lower x edge.
    pub x_min: f64,
    /// Upper x edge.
    pub x_max: f64,
    /// X bin edges (length = n_bins_x + 1).
    pub x_edges: Vec<f64>,
    /// Number of bins along y.
    pub n_bins_y: usize,
    /// Lower y edge.
    pub y_min: f64,
    /// Upper y edge.
    pub y_max: f64,
    /// Y bin edges (length = n_bins_y + 1).
    pub y_edges: Vec<f64>,
    /// Cell contents, row-major over y (length = n_bins_x * n_bins_y).
    pub bin_content: Vec<f64>,
    /// Number of in-range fill calls.
    pub entries: f64,
}

impl Hist2D {
    /// Empty 2D histogram with explicit bin counts per axis.
    #[allow(clippy::too_many_arguments)]
    pub fn with_bins(
        name: impl Into<String>,
        title: impl Into<String>,
        x_min: f64,
        x_max: f64,
        n_bins_x: usize,
        y_min: f64,
        y_max: f64,
        n_bins_y: usize,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            n_bins_x,
            x_min,
            x_max,
            x_edges: bin_edges(x_min, x_max, n_bins_x),
            n_bins_y,
            y_min,
            y_max,
            y_edges: bin_edges(y_min, y_max, n_bins_y),
            bin_content: vec![0.0; n_bins_x * n_bins_y],
            entries: 0.0,
        }
    }

    /// Empty 2D histogram with bin counts derived from per-axis bin widths.
    #[allow(clippy::too_many_arguments)]
    pub fn with_bin_width(
        name: impl Into<String>,
        title: impl Into<String>,
        x_min: f64,
        x_max: f64,
        x_width: f64,
        y_min: f64,
        y_max: f64,
        y_width: f64,
    ) -> Result<Self> {
        let nx = bin_count(x_min, x_max, x_width)?;
        let ny = bin_count(y_min, y_max, y_width)?;
        Ok(Self::with_bins(name, title, x_min, x_max, nx, y_min, y_max, ny))
    }

    /// Fill one (x, y) entry with unit weight.
    pub fn fill(&mut self, x: f64, y: f64) {
        self.fill_weighted(x, y, 1.0);
    }

    /// Fill one (x, y) entry with the given weight. Out-of-range entries are dropped.
    pub fn fill_weighted(&mut self, x: f64, y: f64, weight: f64) {
        let (Some(ix), Some(iy)) = (find_bin(&self.x_edges, x), find_bin(&self.y_edges, y)) else {
            return;
        };
        self.bin_content[iy * self.n_bins_x + ix] += weight;
        self.entries += 1.0;
    }

    /// Sum of in-range cell contents.
    pub fn integral(&self) -> f64 {
        self.bin_content.iter().sum()
    }

    /// Largest cell content. 0 for a zero-bin histogram.
    pub fn max_value(&self) -> f64 {
        if self.bin_content.is_empty() {
            return 0.0;
        }
        self.bin_content.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Multiply every cell content by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.bin_content {
            *v *= factor;
        }
    }

    /// Cell content at (ix, iy).
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.bin_content[iy * self.n_bins_x + ix]
    }
}

/// Find the bin index for a value given sorted bin edges.
///
/// Returns `None` for underflow/overflow.
fn find_bin(edges: &[f64], val: f64) -> Option<usize> {
    if val < edges[0] || val >= edges[edges.len() - 1] {
        return None;
    }
    match edges.binary_search_by(|e| e.partial_cmp(&val).unwrap()) {
        Ok(i) => {
            if i >= edges.len() - 1 {
                None
            } else {
                Some(i)
            }
        }
        Err(i) => {
            if i == 0 || i >= edges.len() {
                None
            } else {
                Some(i - 1)
            }
        }
    }
}
