use std::io;

use log::info;
use macroquad::prelude::*;
use oblique_throw::cli::ThrowArgs;
use oblique_throw::core::ballistics::{
    DISTANCE_DOMAIN, TIME_DOMAIN, TrajectorySeries, TrajectorySolver,
};
use oblique_throw::core::error::ThrowError;
use oblique_throw::core::report::{REPORT_TITLE, ThrowSummary};
use oblique_throw::core::window::{ground_axis_window, velocity_axis_window};

use crate::constants::{
    BACKGROUND, GRID_TOP, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES,
    PANEL_BOTTOM_MARGIN, PANEL_LEFT_MARGIN, PANEL_RIGHT_MARGIN, PANEL_TOP_MARGIN, ROYAL_BLUE,
    TITLE_FONT_SIZE, TITLE_Y,
};
use crate::render::{Curve, Marker, Panel, draw_panel, draw_ui_text};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: REPORT_TITLE.to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

/// Solves the throw, prints the summary table and lays out the four panels.
/// Nothing is printed if the inputs are rejected.
pub(crate) fn prepare(args: &ThrowArgs) -> Result<Vec<Panel>, ThrowError> {
    let angle_deg = args.angle_deg()?;
    let parameters = args.parameters()?;

    let solver = TrajectorySolver::new(parameters);
    let roots = solver.solve_roots()?;
    let series = solver.sample_series(DISTANCE_DOMAIN, TIME_DOMAIN)?;

    let summary = ThrowSummary {
        parameters,
        angle_deg,
        roots,
    };
    summary.write_table(&mut io::stdout().lock())?;

    Ok(build_panels(&series))
}

fn to_world(points: &[(f64, f64)]) -> Vec<Vec2> {
    points
        .iter()
        .map(|&(x, y)| vec2(x as f32, y as f32))
        .collect()
}

pub(crate) fn build_panels(series: &TrajectorySeries) -> Vec<Panel> {
    let zero_line: Vec<(f64, f64)> = series.time.iter().map(|&t| (t, 0.0)).collect();

    vec![
        Panel {
            title: "y(x)",
            x_label: "Distance x (meters)",
            y_label: "Height y (meters)",
            window: ground_axis_window(&series.height_over_distance),
            curves: vec![Curve {
                label: "trajectory y(x)",
                points: to_world(&series.height_over_distance),
                color: BLACK,
                marker: Marker::Diamond,
            }],
            stems: true,
        },
        Panel {
            title: "y(t)",
            x_label: "Time t (seconds)",
            y_label: "Height y (meters)",
            window: ground_axis_window(&series.height_over_time),
            curves: vec![Curve {
                label: "trajectory y(t)",
                points: to_world(&series.height_over_time),
                color: ROYAL_BLUE,
                marker: Marker::Cross,
            }],
            stems: false,
        },
        Panel {
            title: "x(t)",
            x_label: "Time t (seconds)",
            y_label: "Distance x (meters)",
            window: ground_axis_window(&series.distance_over_time),
            curves: vec![Curve {
                label: "steady motion x(t)",
                points: to_world(&series.distance_over_time),
                color: ROYAL_BLUE,
                marker: Marker::None,
            }],
            stems: false,
        },
        Panel {
            title: "v_y(t)",
            x_label: "Time t (seconds)",
            y_label: "Velocity v_y (m/s)",
            window: velocity_axis_window(&series.vertical_velocity),
            curves: vec![
                Curve {
                    label: "uniformly accelerated v_y(t)",
                    points: to_world(&series.vertical_velocity),
                    color: ROYAL_BLUE,
                    marker: Marker::None,
                },
                Curve {
                    label: "v_y(t) = 0",
                    points: to_world(&zero_line),
                    color: RED,
                    marker: Marker::None,
                },
            ],
            stems: false,
        },
    ]
}

/// Plot bounds `(left, right, top, bottom)` of the 2x2 grid, row by row.
pub(crate) fn panel_bounds(screen_w: f32, screen_h: f32) -> [(f32, f32, f32, f32); 4] {
    let cell_w = screen_w * 0.5;
    let cell_h = ((screen_h - GRID_TOP) * 0.5).max(1.0);

    let mut bounds = [(0.0, 0.0, 0.0, 0.0); 4];
    for (idx, slot) in bounds.iter_mut().enumerate() {
        let col = (idx % 2) as f32;
        let row = (idx / 2) as f32;
        let cell_left = col * cell_w;
        let cell_top = GRID_TOP + row * cell_h;
        *slot = (
            cell_left + PANEL_LEFT_MARGIN,
            (cell_left + cell_w - PANEL_RIGHT_MARGIN).max(cell_left + PANEL_LEFT_MARGIN + 1.0),
            cell_top + PANEL_TOP_MARGIN,
            (cell_top + cell_h - PANEL_BOTTOM_MARGIN).max(cell_top + PANEL_TOP_MARGIN + 1.0),
        );
    }
    bounds
}

pub(crate) async fn run(panels: Vec<Panel>) {
    info!("Showing {} panels, press Escape to close", panels.len());

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let screen_w = screen_width();
        let screen_h = screen_height();
        clear_background(BACKGROUND);

        let title_w = measure_text(REPORT_TITLE, None, TITLE_FONT_SIZE, 1.0).width;
        draw_ui_text(
            REPORT_TITLE,
            (screen_w - title_w) * 0.5,
            TITLE_Y,
            TITLE_FONT_SIZE,
            BLACK,
        );

        for (panel, (left, right, top, bottom)) in
            panels.iter().zip(panel_bounds(screen_w, screen_h))
        {
            draw_panel(panel, left, right, top, bottom);
        }

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use oblique_throw::core::ballistics::{
        DISTANCE_DOMAIN, TIME_DOMAIN, ThrowParameters, TrajectorySolver,
    };

    use super::{build_panels, panel_bounds};
    use crate::render::Marker;

    #[test]
    fn panels_follow_grid_order() {
        let params = ThrowParameters::new(10.0, 9.81, 20.0, 30.0_f64.to_radians())
            .expect("valid parameters");
        let series = TrajectorySolver::new(params)
            .sample_series(DISTANCE_DOMAIN, TIME_DOMAIN)
            .expect("series should sample");

        let panels = build_panels(&series);
        let titles: Vec<&str> = panels.iter().map(|p| p.title).collect();

        assert_eq!(titles, ["y(x)", "y(t)", "x(t)", "v_y(t)"]);
        assert!(panels[0].stems);
        assert_eq!(panels[1].curves[0].marker, Marker::Cross);
        assert_eq!(panels[3].curves.len(), 2);
        assert_eq!(panels[3].curves[1].points.len(), series.time.len());
        assert!(panels[3].curves[1].points.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn grid_cells_do_not_overlap() {
        let [top_left, top_right, bottom_left, bottom_right] = panel_bounds(1300.0, 760.0);

        assert!(top_left.1 < top_right.0);
        assert!(top_left.3 < bottom_left.2);
        assert_eq!(top_left.0, bottom_left.0);
        assert_eq!(top_right.2, top_left.2);
        assert!(bottom_right.1 <= 1300.0);
        assert!(bottom_right.3 <= 760.0);
    }
}
