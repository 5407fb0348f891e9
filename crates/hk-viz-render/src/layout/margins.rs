use crate::canvas::Canvas;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Compute auto-margins from axis labels and config.
    ///
    /// `label_offset` scales the gap reserved for the y-axis title;
    /// `extra_right` reserves room at the right edge (color bars).
    pub fn auto(
        canvas: &Canvas,
        y_axis: &Axis,
        x_axis: &Axis,
        label_offset: f64,
        extra_right: f64,
        config: &PlotConfig,
    ) -> Self {
        let tick_style = TextStyle { size: config.font.tick_size, ..Default::default() };
        let label_style = TextStyle { size: config.font.label_size, ..Default::default() };

        // Left margin: y-axis tick labels + axis title + padding
        let max_tick_w = y_axis
            .tick_labels
            .iter()
            .map(|l| canvas.measure_text(l, &tick_style).width)
            .fold(0.0_f64, f64::max);
        let mut left = 15.0 + max_tick_w + 8.0;
        if !y_axis.label.is_empty() {
            left += (label_style.size + 6.0) * label_offset.max(0.0);
        }

        // Bottom margin: x-axis tick labels + axis title + padding
        let mut bottom = 15.0 + tick_style.size + 6.0;
        if !x_axis.label.is_empty() {
            bottom += label_style.size + 6.0;
        }

        let top = 14.0;
        let right = 15.0 + extra_right;

        let width = canvas.width - left - right;
        let height = canvas.height - top - bottom;

        Self { left, top, width: width.max(50.0), height: height.max(50.0) }
    }

    /// Manual margins (color bars, fixed layouts).
    pub fn manual(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_widens_left_margin() {
        let canvas = Canvas::new(500.0, 300.0).unwrap();
        let config = PlotConfig::default();
        let x = Axis::linear(0.0, 1.0, 5);
        let bare = Axis::linear(0.0, 1.0, 5);
        let labeled = Axis::linear(0.0, 1.0, 5).with_label("Events");
        let a = PlotArea::auto(&canvas, &bare, &x, 1.0, 0.0, &config);
        let b = PlotArea::auto(&canvas, &labeled, &x, 1.0, 0.0, &config);
        assert!(b.left > a.left);
    }

    #[test]
    fn label_offset_scales_margin() {
        let canvas = Canvas::new(500.0, 300.0).unwrap();
        let config = PlotConfig::default();
        let x = Axis::linear(0.0, 1.0, 5);
        let y = Axis::linear(0.0, 1.0, 5).with_label("Events");
        let near = PlotArea::auto(&canvas, &y, &x, 1.0, 0.0, &config);
        let far = PlotArea::auto(&canvas, &y, &x, 2.0, 0.0, &config);
        assert!(far.left > near.left);
    }

    #[test]
    fn extra_right_shrinks_width() {
        let canvas = Canvas::new(500.0, 300.0).unwrap();
        let config = PlotConfig::default();
        let x = Axis::linear(0.0, 1.0, 5);
        let y = Axis::linear(0.0, 1.0, 5);
        let plain = PlotArea::auto(&canvas, &y, &x, 1.0, 0.0, &config);
        let with_bar = PlotArea::auto(&canvas, &y, &x, 1.0, 40.0, &config);
        assert!(with_bar.width < plain.width);
        assert_eq!(with_bar.left, plain.left);
    }
}
