use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line, Scatter},
};

use crate::config::Config;
use crate::models::{
    chart_data::{ChartData, Dataset},
    options::{ChartKind, DisplayOptions},
};

const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

/// Builds the chart definition handed to the renderer.
///
/// The x axis is a time axis; each dataset becomes one series of
/// `[epoch_ms, value]` pairs named after the dataset label.
pub fn build_chart(data: &ChartData, kind: ChartKind, options: &DisplayOptions) -> Chart {
    let mut chart = Chart::new()
        .tooltip(build_tooltip(kind, options))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Time)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(build_value_axis(options));

    if let Some(title) = &options.title {
        chart = chart.title(
            Title::new()
                .text(title.as_str())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
        );
    }

    if data.datasets.len() > 1 {
        chart = chart.legend(Legend::new());
    }

    data.datasets.iter().fold(chart, |chart, dataset| {
        let points = series_points(dataset);
        let label = dataset.label.as_str();
        match kind {
            ChartKind::Line => chart.series(Line::new().name(label).data(points)),
            ChartKind::Bar => chart.series(Bar::new().name(label).data(points)),
            ChartKind::Scatter => chart.series(Scatter::new().name(label).data(points)),
        }
    })
}

/// Rendered pixel height for a container of `width` pixels.
///
/// `chart_height` is relative to a `Config::CANVAS_BASE_WIDTH` wide canvas,
/// so the chart keeps its aspect ratio as the container grows.
pub fn pixel_height(width: u32, chart_height: u32) -> u32 {
    let scaled = u64::from(width) * u64::from(chart_height) / u64::from(Config::CANVAS_BASE_WIDTH);
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

fn series_points(dataset: &Dataset) -> Vec<Vec<f64>> {
    dataset
        .data
        .iter()
        .map(|point| vec![point.x.timestamp_millis() as f64, point.y])
        .collect()
}

fn build_tooltip(kind: ChartKind, options: &DisplayOptions) -> Tooltip {
    let tooltip = match kind {
        ChartKind::Scatter => Tooltip::new().trigger(Trigger::Item),
        ChartKind::Line | ChartKind::Bar => Tooltip::new()
            .trigger(Trigger::Axis)
            .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line)),
    };

    match &options.tooltip_formatter {
        Some(formatter) => tooltip.formatter(formatter.as_str()),
        None => tooltip,
    }
}

fn build_value_axis(options: &DisplayOptions) -> Axis {
    let mut label = AxisLabel::new().color(AXIS_COLOR);
    if let Some(formatter) = &options.tick_formatter {
        label = label.formatter(formatter.as_str());
    }

    let mut axis = Axis::new()
        .type_(AxisType::Value)
        .axis_label(label)
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(GRID_COLOR)
                    .type_(LineStyleType::Dashed),
            ),
        );

    if let Some(name) = &options.scale_label {
        axis = axis.name(name.as_str());
    }
    if options.reverse {
        axis = axis.inverse(true);
    }

    axis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_height_keeps_aspect() {
        assert_eq!(pixel_height(600, 80), 160);
        assert_eq!(pixel_height(300, 80), 80);
    }

    #[test]
    fn test_pixel_height_never_zero() {
        assert_eq!(pixel_height(1, 80), 1);
        assert_eq!(pixel_height(600, 0), 1);
    }
}
