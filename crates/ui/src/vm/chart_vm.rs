//! Line chart for an analysis result, drawn with `plotters` into an SVG string.

use std::error::Error;

use analyzer_core::model::AnalysisResult;
use plotters::prelude::*;

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 320;

const SERIES_COLOR: RGBColor = RGBColor(0x88, 0x84, 0xd8);

#[derive(Clone, Debug, PartialEq)]
pub struct ChartVm {
    pub series_label: String,
    /// `(category, value)` in backend order.
    pub points: Vec<(String, f64)>,
}

/// Category on the x-axis, value on the y-axis. `None` without points.
#[must_use]
pub fn build_chart(result: &AnalysisResult) -> Option<ChartVm> {
    if !result.has_chart() {
        return None;
    }
    Some(ChartVm {
        series_label: result.series_label().to_string(),
        points: result
            .chart_points()
            .iter()
            .map(|point| (point.category.clone(), point.value))
            .collect(),
    })
}

/// Render the series as a standalone `<svg>` document.
///
/// Categories sit at integer x positions with one slot of padding on each
/// side; the y-axis always includes zero.
///
/// # Errors
///
/// Returns the drawing backend's error when plotting fails.
pub fn render_line_chart(chart: &ChartVm) -> Result<String, Box<dyn Error>> {
    let slots = i32::try_from(chart.points.len()).unwrap_or(i32::MAX);
    let low = chart.points.iter().map(|(_, value)| *value).fold(0.0_f64, f64::min);
    let high = chart.points.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);
    let span = if high - low < f64::EPSILON { 1.0 } else { high - low };
    let y_range = low..high + span * 0.1;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut plot = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(30)
            .y_label_area_size(56)
            .build_cartesian_2d(-1..slots, y_range)?;

        let category = |x: &i32| {
            usize::try_from(*x)
                .ok()
                .and_then(|idx| chart.points.get(idx))
                .map(|(category, _)| category.clone())
                .unwrap_or_default()
        };
        plot.configure_mesh()
            .x_labels(chart.points.len() + 2)
            .x_label_formatter(&category)
            .y_desc(chart.series_label.as_str())
            .draw()?;

        let series = (0..slots).zip(chart.points.iter().map(|(_, value)| *value));
        plot.draw_series(LineSeries::new(series.clone(), SERIES_COLOR.stroke_width(2)))?
            .label(chart.series_label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], SERIES_COLOR.stroke_width(2)));
        plot.draw_series(series.map(|point| Circle::new(point, 4, SERIES_COLOR.filled())))?;

        plot.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
    }
    Ok(svg)
}
