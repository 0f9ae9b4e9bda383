use super::error::AppError;
use serde::Deserialize;

/// Series type drawn by the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Scatter,
}

impl ChartKind {
    /// Returns the lowercase name used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "scatter" => Ok(ChartKind::Scatter),
            _ => Err(AppError::ConfigError(format!("Unsupported chart type: {s}"))),
        }
    }
}

/// Axis, tooltip and tick settings forwarded to the chart surface untouched.
///
/// Formatter fields are ECharts templates, e.g. `"{value} ms"` for ticks or
/// `"{a}: {c}"` for tooltips.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    /// Draw the value axis upside down
    pub reverse: bool,

    /// Value axis name
    pub scale_label: Option<String>,

    /// Title drawn inside the chart area
    pub title: Option<String>,

    pub tooltip_formatter: Option<String>,

    /// Value axis tick label template
    pub tick_formatter: Option<String>,
}
