use hk_viz::overlay::OverlayArtifact;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::PlotConfig;
use crate::layout::axes::Axis;
use crate::layout::legend::{self, LegendEntry, LegendKind};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_axes;
use crate::plots::step_outline;
use crate::primitives::*;

pub fn render(artifact: &OverlayArtifact, config: &PlotConfig) -> crate::Result<String> {
    let Some(first) = artifact.series.first() else {
        return Ok(empty_svg());
    };
    let n = first.y.len();
    if n == 0 {
        return Ok(empty_svg());
    }
    if artifact.bin_edges.len() != n + 1 {
        return Err(crate::RenderError::Layout(format!(
            "{} edges for {} bins",
            artifact.bin_edges.len(),
            n
        )));
    }
    for s in &artifact.series {
        if s.y.len() != n {
            return Err(crate::RenderError::Layout(format!(
                "series '{}' has {} bins, expected {}",
                s.name,
                s.y.len(),
                n
            )));
        }
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height)?;
    let palette = config.palette_colors();

    let x_min = artifact.bin_edges[0];
    let x_max = artifact.bin_edges[n];
    let x_axis = Axis::linear(x_min, x_max, 6).with_label(&artifact.axes.x_label);
    // The shared maximum already carries the headroom; use it verbatim.
    let y_axis =
        Axis::linear(artifact.axes.y_min, artifact.y_max, 5).with_label(&artifact.axes.y_label);

    let area =
        PlotArea::auto(&canvas, &y_axis, &x_axis, artifact.axes.label_offset, 0.0, config);
    draw_axes(&mut canvas, &area, &x_axis, &y_axis, artifact.axes.label_offset, config);

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);
    for (si, series) in artifact.series.iter().enumerate() {
        let color = if si < palette.len() { palette[si] } else { Color::hex("#888888") };
        let points =
            step_outline(&artifact.bin_edges, &series.y, artifact.axes.y_min, &x_axis, &y_axis, &area);
        canvas.polyline(&points, &LineStyle::solid(color, 1.2));
    }
    canvas.pop_clip();

    let entries: Vec<LegendEntry> = artifact
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| LegendEntry {
            label: s.name.clone(),
            color: if i < palette.len() { palette[i] } else { Color::hex("#888888") },
            kind: LegendKind::Line(None),
        })
        .collect();
    legend::draw_legend(&mut canvas, &area, &entries, config.font.size, false);

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No overlay data</text></svg>"#.into()
}

#[cfg(test)]
mod tests {
    use hk_viz::axis::AxisOptions;
    use hk_viz::overlay::{OverlayArtifact, OverlaySeries};

    use super::*;

    fn artifact() -> OverlayArtifact {
        OverlayArtifact {
            schema_version: "histkit_overlay_v0".into(),
            bin_edges: vec![0.0, 1.0, 2.0],
            series: vec![
                OverlaySeries { name: "data16".into(), y: vec![100.0, 20.0] },
                OverlaySeries { name: "data17".into(), y: vec![40.0, 30.0] },
            ],
            y_max: 100.0 + 40.0 / 3.0,
            axes: AxisOptions::labels("value [units]", "Entries"),
        }
    }

    #[test]
    fn one_polyline_per_series_plus_legend() {
        let svg = render(&artifact(), &PlotConfig::default()).unwrap();
        assert!(svg.contains("data16"));
        assert!(svg.contains("data17"));
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn series_length_mismatch_error() {
        let mut art = artifact();
        art.series[1].y.pop();
        assert!(render(&art, &PlotConfig::default()).is_err());
    }
}
