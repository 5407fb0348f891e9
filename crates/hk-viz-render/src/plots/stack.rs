use hk_viz::stack::StackArtifact;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::legend::{self, LegendEntry, LegendKind};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

pub fn render(artifact: &StackArtifact, config: &PlotConfig) -> crate::Result<String> {
    let Some(first) = artifact.samples.first() else {
        return Ok(empty_svg());
    };
    let n_bins = first.y.len();
    if n_bins == 0 {
        return Ok(empty_svg());
    }
    if artifact.bin_edges.len() != n_bins + 1 {
        return Err(crate::RenderError::Layout(format!(
            "{} edges for {} bins",
            artifact.bin_edges.len(),
            n_bins
        )));
    }
    for s in &artifact.samples {
        if s.y.len() != n_bins {
            return Err(crate::RenderError::Layout(format!(
                "sample '{}' has {} bins, expected {}",
                s.name,
                s.y.len(),
                n_bins
            )));
        }
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?;
    let palette = config.palette_colors();

    let bin_edges = &artifact.bin_edges;
    let x_min = bin_edges[0];
    let x_max = bin_edges[n_bins];
    let x_axis = Axis::linear(x_min, x_max, 6).with_label(&artifact.axes.x_label);
    let y_axis =
        Axis::linear(artifact.axes.y_min, artifact.y_max, 5).with_label(&artifact.axes.y_label);

    let area =
        PlotArea::auto(&canvas, &y_axis, &x_axis, artifact.axes.label_offset, 0.0, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, artifact.axes.label_offset, config);

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);

    // Additive bands, bottom-up in draw order (largest area at the bottom).
    let mut cumulative = vec![0.0_f64; n_bins];
    for (si, sample) in artifact.samples.iter().enumerate() {
        let color = if si < palette.len() { palette[si] } else { Color::hex("#888888") };

        for bi in 0..n_bins {
            if sample.y[bi] == 0.0 {
                continue;
            }
            let y_base = cumulative[bi];
            let y_top = y_base + sample.y[bi];

            let px_lo = x_axis.data_to_pixel(bin_edges[bi], area.left, area.right());
            let px_hi = x_axis.data_to_pixel(bin_edges[bi + 1], area.left, area.right());
            let py_base = y_axis.data_to_pixel(y_base, area.bottom(), area.top);
            let py_top = y_axis.data_to_pixel(y_top, area.bottom(), area.top);

            canvas.rect(
                px_lo,
                py_top,
                px_hi - px_lo,
                py_base - py_top,
                &Style::filled_outlined(color, config.colors.outline, 0.5),
            );
        }

        for (cum, v) in cumulative.iter_mut().zip(sample.y.iter()) {
            *cum += v;
        }
    }

    canvas.pop_clip();

    let entries: Vec<LegendEntry> = artifact
        .samples
        .iter()
        .enumerate()
        .map(|(i, s)| LegendEntry {
            label: s.name.clone(),
            color: if i < palette.len() { palette[i] } else { Color::hex("#888888") },
            kind: LegendKind::FilledRect,
        })
        .collect();
    legend::draw_legend(&mut canvas, &area, &entries, config.font.size, false);

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No stack data</text></svg>"#.into()
}
