pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use config::PlotConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render an artifact JSON to SVG string.
pub fn render_svg(artifact_json: &str, kind: &str, config: &PlotConfig) -> Result<String> {
    let svg = match kind {
        "hist" => {
            let art: hk_viz::hist::HistArtifact = serde_json::from_str(artifact_json)?;
            plots::hist::render(&art, config)?
        }
        "overlay" => {
            let art: hk_viz::overlay::OverlayArtifact = serde_json::from_str(artifact_json)?;
            plots::overlay::render(&art, config)?
        }
        "stack" => {
            let art: hk_viz::stack::StackArtifact = serde_json::from_str(artifact_json)?;
            plots::stack::render(&art, config)?
        }
        "heatmap" => {
            let art: hk_viz::heatmap::HeatmapArtifact = serde_json::from_str(artifact_json)?;
            plots::heatmap::render(&art, config)?
        }
        other => return Err(RenderError::UnknownKind(other.to_string())),
    };
    Ok(svg)
}

/// Render an artifact JSON to bytes in the specified format.
pub fn render_to_bytes(
    artifact_json: &str,
    kind: &str,
    format: &str,
    config: &PlotConfig,
) -> Result<Vec<u8>> {
    let svg = render_svg(artifact_json, kind, config)?;
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        other => Err(RenderError::UnknownKind(format!("format: {other}"))),
    }
}

/// Render an artifact JSON to a file (format inferred from extension).
pub fn render_to_file(
    artifact_json: &str,
    kind: &str,
    path: &std::path::Path,
    config: &PlotConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let bytes = render_to_bytes(artifact_json, kind, ext, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
