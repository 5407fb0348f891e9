use hk_viz::heatmap::HeatmapArtifact;

use crate::canvas::Canvas;
use crate::color::heat;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

pub fn render(artifact: &HeatmapArtifact, config: &PlotConfig) -> crate::Result<String> {
    let nx = artifact.x_edges.len().saturating_sub(1);
    let ny = artifact.y_edges.len().saturating_sub(1);
    if nx == 0 || ny == 0 {
        return Ok(empty_svg());
    }
    if artifact.z.len() != nx * ny {
        return Err(crate::RenderError::Layout(format!(
            "'{}': {} cells for {}x{} bins",
            artifact.name,
            artifact.z.len(),
            nx,
            ny
        )));
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?;

    let x_axis = Axis::linear(artifact.x_edges[0], artifact.x_edges[nx], 6)
        .with_label(&artifact.axes.x_label);
    let y_axis = Axis::linear(artifact.y_edges[0], artifact.y_edges[ny], 6)
        .with_label(&artifact.axes.y_label);

    let colorbar_room = if config.heatmap.colorbar {
        config.heatmap.colorbar_width + 36.0
    } else {
        0.0
    };
    let area = PlotArea::auto(
        &canvas,
        &y_axis,
        &x_axis,
        artifact.axes.label_offset,
        colorbar_room,
        config,
    );

    // Cells first, frame and ticks on top.
    let z_max = artifact.z_max;
    if z_max > 0.0 {
        for iy in 0..ny {
            for ix in 0..nx {
                let z = artifact.z[iy * nx + ix];
                if z <= 0.0 {
                    continue;
                }
                let px_lo = x_axis.data_to_pixel(artifact.x_edges[ix], area.left, area.right());
                let px_hi = x_axis.data_to_pixel(artifact.x_edges[ix + 1], area.left, area.right());
                let py_lo = y_axis.data_to_pixel(artifact.y_edges[iy], area.bottom(), area.top);
                let py_hi = y_axis.data_to_pixel(artifact.y_edges[iy + 1], area.bottom(), area.top);
                canvas.rect(
                    px_lo,
                    py_hi,
                    px_hi - px_lo,
                    py_lo - py_hi,
                    &Style::filled(heat(z / z_max)),
                );
            }
        }
    }

    draw_axes(&mut canvas, &area, &x_axis, &y_axis, artifact.axes.label_offset, config);

    if config.heatmap.colorbar && z_max > 0.0 {
        draw_colorbar(&mut canvas, &area, z_max, config);
    }

    if !artifact.title.is_empty() {
        let title_style = TextStyle {
            size: config.font.size,
            anchor: TextAnchor::Start,
            weight: FontWeight::Bold,
            ..Default::default()
        };
        canvas.text(area.left + 5.0, area.top - 4.0, &artifact.title, &title_style);
    }

    Ok(canvas.finish_svg())
}

/// Vertical color scale to the right of the plot area.
fn draw_colorbar(canvas: &mut Canvas, area: &PlotArea, z_max: f64, config: &PlotConfig) {
    let bar_x = area.right() + 8.0;
    let bar_w = config.heatmap.colorbar_width;
    let segments = 64;
    let seg_h = area.height / segments as f64;

    for i in 0..segments {
        let t = (i as f64 + 0.5) / segments as f64;
        // t = 0 at the bottom of the bar.
        let y = area.bottom() - (i + 1) as f64 * seg_h;
        canvas.rect(bar_x, y, bar_w, seg_h + 0.5, &Style::filled(heat(t)));
    }

    let scale = Axis::linear(0.0, z_max, 5);
    let tick_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    for (i, &val) in scale.tick_positions.iter().enumerate() {
        let py = area.bottom() - (val / z_max) * area.height;
        canvas.line(
            bar_x + bar_w,
            py,
            bar_x + bar_w + 3.0,
            py,
            &LineStyle::solid(crate::color::Color::rgb(0, 0, 0), 0.6),
        );
        if let Some(label) = scale.tick_labels.get(i) {
            canvas.text(bar_x + bar_w + 5.0, py, label, &tick_style);
        }
    }
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No heatmap data</text></svg>"#.into()
}

#[cfg(test)]
mod tests {
    use hk_viz::axis::AxisOptions;
    use hk_viz::heatmap::HeatmapArtifact;

    use super::*;

    fn artifact() -> HeatmapArtifact {
        HeatmapArtifact {
            schema_version: "histkit_heatmap_v0".into(),
            name: "matrix".into(),
            title: "Matrix".into(),
            x_edges: vec![0.0, 1.0, 2.0],
            y_edges: vec![0.0, 1.0],
            z: vec![1.0, 4.0],
            z_max: 4.0,
            axes: AxisOptions::labels("x", "y"),
        }
    }

    #[test]
    fn colormapped_cells_and_bar() {
        let svg = render(&artifact(), &PlotConfig::default()).unwrap();
        // 2 cells + 64 colorbar segments.
        assert!(svg.matches("<rect").count() >= 66);
        assert!(svg.contains("Matrix"));
    }

    #[test]
    fn empty_cells_left_unpainted() {
        let mut art = artifact();
        art.z = vec![0.0, 4.0];
        let svg = render(&art, &PlotConfig::default()).unwrap();
        let full = render(&artifact(), &PlotConfig::default()).unwrap();
        assert!(svg.matches("<rect").count() < full.matches("<rect").count());
    }

    #[test]
    fn cell_count_mismatch_error() {
        let mut art = artifact();
        art.z.push(1.0);
        assert!(render(&art, &PlotConfig::default()).is_err());
    }
}
