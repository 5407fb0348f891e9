use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    Histkit,
    Minimal,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Histkit,
        }
    }

    pub fn base_config(self) -> PlotConfig {
        match self {
            Self::Histkit => histkit(),
            Self::Minimal => minimal(),
        }
    }
}

fn histkit() -> PlotConfig {
    PlotConfig {
        theme: "histkit".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        palette: "wong".into(),
        colors: ColorsConfig::default(),
        heatmap: HeatmapConfig::default(),
        output: OutputConfig::default(),
    }
}

fn minimal() -> PlotConfig {
    PlotConfig {
        theme: "minimal".into(),
        axes: AxesConfig { show_top_ticks: false, show_right_ticks: false, ..Default::default() },
        grid: GridConfig { show: false, ..Default::default() },
        ..histkit()
    }
}
