use hk_viz::hist::HistArtifact;

use crate::canvas::Canvas;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::plots::step_outline;
use crate::primitives::*;

pub fn render(artifact: &HistArtifact, config: &PlotConfig) -> crate::Result<String> {
    let n = artifact.y.len();
    if n == 0 {
        return Ok(empty_svg());
    }
    if artifact.bin_edges.len() != n + 1 {
        return Err(crate::RenderError::Layout(format!(
            "'{}': {} edges for {} bins",
            artifact.name,
            artifact.bin_edges.len(),
            n
        )));
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?;

    let x_min = artifact.bin_edges[0];
    let x_max = artifact.bin_edges[n];
    let x_axis = Axis::linear(x_min, x_max, 6).with_label(&artifact.axes.x_label);
    let y_axis =
        Axis::linear(artifact.axes.y_min, artifact.y_max, 5).with_label(&artifact.axes.y_label);

    let area =
        PlotArea::auto(&canvas, &y_axis, &x_axis, artifact.axes.label_offset, 0.0, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, artifact.axes.label_offset, config);

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);
    let points = step_outline(
        &artifact.bin_edges,
        &artifact.y,
        artifact.axes.y_min,
        &x_axis,
        &y_axis,
        &area,
    );
    canvas.polyline(&points, &LineStyle::solid(config.colors.outline, 1.2));
    canvas.pop_clip();

    if !artifact.title.is_empty() {
        let title_style = TextStyle {
            size: config.font.size,
            anchor: TextAnchor::Start,
            weight: FontWeight::Bold,
            ..Default::default()
        };
        canvas.text(area.left + 5.0, area.top + 14.0, &artifact.title, &title_style);
    }

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No histogram data</text></svg>"#.into()
}
