pub mod axes_draw;
pub mod heatmap;
pub mod hist;
pub mod overlay;
pub mod stack;

use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;

/// Pixel points of a histogram step outline: up the left edge of the first
/// bin, across each bin top, down the right edge of the last bin.
pub(crate) fn step_outline(
    edges: &[f64],
    y: &[f64],
    baseline: f64,
    x_axis: &Axis,
    y_axis: &Axis,
    area: &PlotArea,
) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(2 * y.len() + 2);
    let py_base = y_axis.data_to_pixel(baseline, area.bottom(), area.top);
    points.push((x_axis.data_to_pixel(edges[0], area.left, area.right()), py_base));
    for (i, &v) in y.iter().enumerate() {
        let px_lo = x_axis.data_to_pixel(edges[i], area.left, area.right());
        let px_hi = x_axis.data_to_pixel(edges[i + 1], area.left, area.right());
        let py = y_axis.data_to_pixel(v, area.bottom(), area.top);
        points.push((px_lo, py));
        points.push((px_hi, py));
    }
    points.push((x_axis.data_to_pixel(edges[edges.len() - 1], area.left, area.right()), py_base));
    points
}
