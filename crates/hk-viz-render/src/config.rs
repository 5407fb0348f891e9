use serde::Deserialize;

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level plot configuration (YAML or programmatic).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub palette: String,
    pub colors: ColorsConfig,
    pub heatmap: HeatmapConfig,
    pub output: OutputConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        BuiltinTheme::Histkit.base_config()
    }
}

impl PlotConfig {
    pub fn palette_colors(&self) -> Vec<Color> {
        crate::color::palette_colors(&self.palette)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 576.0,  // 8" * 72
            height: 432.0, // 6" * 72
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 10.0, label_size: 11.0, tick_size: 8.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "in".into(),
            show_top_ticks: true,
            show_right_ticks: true,
            tick_length: 5.0,
            minor_tick_length: 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: false, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Stroke color for band outlines and single-histogram steps.
    pub outline: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { outline: Color::rgb(0, 0, 0) }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub colorbar: bool,
    pub colorbar_width: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self { colorbar: true, colorbar_width: 14.0 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: "svg".into(), dpi: 220 }
    }
}

/// Resolve a PlotConfig from optional YAML string.
/// Priority: user YAML overrides → theme base config.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<PlotConfig> {
    match user_yaml {
        None => Ok(PlotConfig::default()),
        Some(yaml) => {
            let config: PlotConfig = serde_yaml_ng::from_str(yaml)
                .map_err(|e| crate::RenderError::Config(e.to_string()))?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves() {
        let c = resolve_config(None).unwrap();
        assert_eq!(c.theme, "histkit");
        assert!(!c.palette_colors().is_empty());
    }

    #[test]
    fn yaml_overrides_figure() {
        let c = resolve_config(Some("figure:\n  width: 300\n  height: 200\n")).unwrap();
        assert_eq!(c.figure.width, 300.0);
        assert_eq!(c.figure.height, 200.0);
        // Untouched sections keep their defaults.
        assert_eq!(c.font.size, 10.0);
    }

    #[test]
    fn bad_yaml_is_a_config_error() {
        let err = resolve_config(Some("figure: [")).unwrap_err();
        assert!(matches!(err, crate::RenderError::Config(_)));
    }
}
