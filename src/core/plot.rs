use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::core::ballistics::TrajectorySeries;
use crate::core::error::ThrowError;
use crate::core::report::REPORT_TITLE;
use crate::core::window::{AxisWindow, ground_axis_window, velocity_axis_window};

pub const PLOT_SIZE: (u32, u32) = (1300, 700);

const FONT: &str = "sans-serif";
const ROYAL_BLUE: RGBColor = RGBColor(65, 105, 225);
const STEM_GREY: RGBColor = RGBColor(128, 128, 128);

type PanelChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

// Hidden skips every piece of text, so no font lookup happens.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Labels {
    Shown,
    Hidden,
}

fn plot_error<E: std::fmt::Display>(err: E) -> ThrowError {
    ThrowError::Plot(err.to_string())
}

/// Draws the four trajectory panels into a 2x2 grid and saves it as a PNG.
pub fn render_png(path: &Path, series: &TrajectorySeries) -> Result<(), ThrowError> {
    render_grid(path, series, Labels::Shown)
}

fn render_grid(path: &Path, series: &TrajectorySeries, labels: Labels) -> Result<(), ThrowError> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;
    let root = match labels {
        Labels::Shown => root.titled(REPORT_TITLE, (FONT, 26)).map_err(plot_error)?,
        Labels::Hidden => root,
    };
    let panels = root.split_evenly((2, 2));

    draw_height_over_distance(&panels[0], &series.height_over_distance, labels)?;
    draw_height_over_time(&panels[1], &series.height_over_time, labels)?;
    draw_distance_over_time(&panels[2], &series.distance_over_time, labels)?;
    draw_vertical_velocity(&panels[3], &series.vertical_velocity, labels)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn panel_chart<'a, 'b: 'a>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    caption: &str,
    window: &AxisWindow,
    (x_desc, y_desc): (&str, &str),
    labels: Labels,
) -> Result<PanelChart<'a, 'b>, ThrowError> {
    let mut builder = ChartBuilder::on(area);
    builder.margin(12);
    if labels == Labels::Shown {
        builder
            .caption(caption, (FONT, 20))
            .x_label_area_size(40)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(window.x.clone(), window.y.clone())
        .map_err(plot_error)?;

    {
        let mut mesh = chart.configure_mesh();
        if labels == Labels::Shown {
            mesh.x_desc(x_desc).y_desc(y_desc);
        }
        mesh.draw().map_err(plot_error)?;
    }

    Ok(chart)
}

fn draw_legend<'a, 'b: 'a>(
    chart: &mut PanelChart<'a, 'b>,
    labels: Labels,
) -> Result<(), ThrowError> {
    if labels == Labels::Hidden {
        return Ok(());
    }
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)
}

fn draw_height_over_distance<'a, 'b: 'a>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    points: &[(f64, f64)],
    labels: Labels,
) -> Result<(), ThrowError> {
    let window = ground_axis_window(points);
    let mut chart = panel_chart(
        area,
        "y(x)",
        &window,
        ("Distance x (meters)", "Height y (meters)"),
        labels,
    )?;

    // A launch below ground leaves nothing to fill.
    if !points.is_empty() {
        chart
            .draw_series(points.iter().map(|&(x, y)| {
                PathElement::new(vec![(x, 0.0), (x, y)], STEM_GREY.stroke_width(1))
            }))
            .map_err(plot_error)?;
        chart
            .draw_series(
                AreaSeries::new(points.iter().copied(), 0.0, BLACK.mix(0.1))
                    .border_style(BLACK.stroke_width(2)),
            )
            .map_err(plot_error)?
            .label("trajectory y(x)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 3, STEM_GREY.filled())),
            )
            .map_err(plot_error)?;
    }

    draw_legend(&mut chart, labels)
}

fn draw_height_over_time<'a, 'b: 'a>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    points: &[(f64, f64)],
    labels: Labels,
) -> Result<(), ThrowError> {
    let window = ground_axis_window(points);
    let mut chart = panel_chart(
        area,
        "y(t)",
        &window,
        ("Time t (seconds)", "Height y (meters)"),
        labels,
    )?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            ROYAL_BLUE.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("trajectory y(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ROYAL_BLUE.stroke_width(2)));
    chart
        .draw_series(
            points
                .iter()
                .map(|&point| Cross::new(point, 4, ROYAL_BLUE.stroke_width(1))),
        )
        .map_err(plot_error)?;

    draw_legend(&mut chart, labels)
}

fn draw_distance_over_time<'a, 'b: 'a>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    points: &[(f64, f64)],
    labels: Labels,
) -> Result<(), ThrowError> {
    let window = ground_axis_window(points);
    let mut chart = panel_chart(
        area,
        "x(t)",
        &window,
        ("Time t (seconds)", "Distance x (meters)"),
        labels,
    )?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            ROYAL_BLUE.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("steady motion x(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ROYAL_BLUE.stroke_width(2)));

    draw_legend(&mut chart, labels)
}

fn draw_vertical_velocity<'a, 'b: 'a>(
    area: &'a DrawingArea<BitMapBackend<'b>, Shift>,
    points: &[(f64, f64)],
    labels: Labels,
) -> Result<(), ThrowError> {
    let window = velocity_axis_window(points);
    let mut chart = panel_chart(
        area,
        "v_y(t)",
        &window,
        ("Time t (seconds)", "Velocity v_y (m/s)"),
        labels,
    )?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            ROYAL_BLUE.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("uniformly accelerated v_y(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ROYAL_BLUE.stroke_width(2)));
    chart
        .draw_series(LineSeries::new(
            points.iter().map(|&(t, _)| (t, 0.0)),
            RED.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("v_y(t) = 0")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    draw_legend(&mut chart, labels)
}
