use macroquad::prelude::*;
use oblique_throw::core::window::AxisWindow;

use crate::constants::{
    AREA_FILL, GRID_COLOR, LABEL_COLOR, MARKER_SIZE, STEM_GREY, X_GRID_LINES, Y_GRID_LINES,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Marker {
    None,
    Diamond,
    Cross,
}

#[derive(Clone, Debug)]
pub(crate) struct Curve {
    pub label: &'static str,
    pub points: Vec<Vec2>,
    pub color: Color,
    pub marker: Marker,
}

#[derive(Clone, Debug)]
pub(crate) struct Panel {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub window: AxisWindow,
    pub curves: Vec<Curve>,
    /// Draw stems and a shaded area under the first curve.
    pub stems: bool,
}

fn format_axis_value(value: f32, axis_span: f32) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn world_to_screen(
    world: Vec2,
    window: &AxisWindow,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) -> Vec2 {
    let plot_w = (right - left).max(1.0);
    let plot_h = (bottom - top).max(1.0);
    let x_span = (window.x_span() as f32).max(f32::EPSILON);
    let y_span = (window.y_span() as f32).max(f32::EPSILON);
    let x = left + ((world.x - window.x.start as f32) / x_span) * plot_w;
    let y = bottom - ((world.y - window.y.start as f32) / y_span) * plot_h;
    vec2(x, y)
}

// Points outside the window are pinned to its border.
fn clamp_to_window(world: Vec2, window: &AxisWindow) -> Vec2 {
    vec2(
        world.x.clamp(window.x.start as f32, window.x.end as f32),
        world.y.clamp(window.y.start as f32, window.y.end as f32),
    )
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(left: f32, right: f32, top: f32, bottom: f32, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        draw_line(x, top, x, bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        draw_line(left, y, right, y, 1.0, color);
    }
}

fn draw_axis_tick_labels(panel: &Panel, left: f32, right: f32, top: f32, bottom: f32) {
    let tick_font_size: u16 = 14;
    let x_span = panel.window.x_span() as f32;
    let y_span = panel.window.y_span() as f32;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = left + t * (right - left);
        let value = panel.window.x.start as f32 + t * x_span;
        let label = format_axis_value(value, x_span);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            bottom + 18.0,
            tick_font_size,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = bottom - t * (bottom - top);
        let value = panel.window.y.start as f32 + t * y_span;
        let label = format_axis_value(value, y_span);
        let size = measure_text(&label, None, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (left - 6.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            LABEL_COLOR,
        );
    }

    let x_label_size = measure_text(panel.x_label, None, 16, 1.0);
    draw_ui_text(
        panel.x_label,
        right - x_label_size.width,
        bottom + 40.0,
        16,
        LABEL_COLOR,
    );
    draw_ui_text(panel.y_label, left + 6.0, top - 6.0, 16, LABEL_COLOR);
}

pub(crate) fn draw_path(
    points: &[Vec2],
    window: &AxisWindow,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let to_screen =
        |p: Vec2| world_to_screen(clamp_to_window(p, window), window, left, right, top, bottom);
    let mut prev = to_screen(points[0]);
    for point in points.iter().skip(1).copied() {
        let cur = to_screen(point);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

fn draw_stems_and_fill(
    points: &[Vec2],
    window: &AxisWindow,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
) {
    let to_screen =
        |p: Vec2| world_to_screen(clamp_to_window(p, window), window, left, right, top, bottom);

    for pair in points.windows(2) {
        let a = to_screen(pair[0]);
        let b = to_screen(pair[1]);
        let a_base = to_screen(vec2(pair[0].x, 0.0));
        let b_base = to_screen(vec2(pair[1].x, 0.0));
        draw_triangle(a, b, b_base, AREA_FILL);
        draw_triangle(a, b_base, a_base, AREA_FILL);
    }

    for point in points.iter().copied() {
        let tip = to_screen(point);
        let base = to_screen(vec2(point.x, 0.0));
        draw_line(base.x, base.y, tip.x, tip.y, 1.0, STEM_GREY);
    }
}

fn draw_markers(curve: &Curve, window: &AxisWindow, left: f32, right: f32, top: f32, bottom: f32) {
    for point in curve.points.iter().copied() {
        let p = world_to_screen(clamp_to_window(point, window), window, left, right, top, bottom);
        match curve.marker {
            Marker::None => {}
            Marker::Diamond => draw_poly(p.x, p.y, 4, MARKER_SIZE, 0.0, curve.color),
            Marker::Cross => {
                let r = MARKER_SIZE;
                draw_line(p.x - r, p.y - r, p.x + r, p.y + r, 1.0, curve.color);
                draw_line(p.x - r, p.y + r, p.x + r, p.y - r, 1.0, curve.color);
            }
        }
    }
}

fn draw_legend(curves: &[Curve], right: f32, top: f32) {
    let font_size: u16 = 14;
    let row_h = 18.0;
    let text_w = curves
        .iter()
        .map(|c| measure_text(c.label, None, font_size, 1.0).width)
        .fold(0.0f32, f32::max);
    let box_w = text_w + 44.0;
    let box_h = row_h * curves.len() as f32 + 8.0;
    let box_x = right - box_w - 8.0;
    let box_y = top + 8.0;

    draw_rectangle(box_x, box_y, box_w, box_h, Color::new(1.0, 1.0, 1.0, 0.85));
    draw_rectangle_lines(box_x, box_y, box_w, box_h, 1.0, BLACK);
    for (i, curve) in curves.iter().enumerate() {
        let y = box_y + 4.0 + row_h * (i as f32 + 0.5);
        draw_line(box_x + 6.0, y, box_x + 30.0, y, 2.0, curve.color);
        draw_ui_text(curve.label, box_x + 36.0, y + 5.0, font_size, BLACK);
    }
}

pub(crate) fn draw_panel(panel: &Panel, left: f32, right: f32, top: f32, bottom: f32) {
    draw_grid(left, right, top, bottom, GRID_COLOR);
    draw_line(left, bottom, right, bottom, 2.0, DARKGRAY);
    draw_line(left, top, left, bottom, 2.0, DARKGRAY);

    let title_size = measure_text(panel.title, None, 20, 1.0);
    draw_ui_text(
        panel.title,
        left + ((right - left) - title_size.width) * 0.5,
        top - 10.0,
        20,
        BLACK,
    );
    draw_axis_tick_labels(panel, left, right, top, bottom);

    if panel.stems {
        if let Some(first) = panel.curves.first() {
            draw_stems_and_fill(&first.points, &panel.window, left, right, top, bottom);
        }
    }
    for curve in &panel.curves {
        draw_path(&curve.points, &panel.window, left, right, top, bottom, 2.0, curve.color);
        draw_markers(curve, &panel.window, left, right, top, bottom);
    }
    draw_legend(&panel.curves, right, top);
}

#[cfg(test)]
mod tests {
    use macroquad::prelude::vec2;
    use oblique_throw::core::window::AxisWindow;

    use super::{clamp_to_window, world_to_screen};

    fn window() -> AxisWindow {
        AxisWindow {
            x: 0.0..10.0,
            y: -5.0..15.0,
        }
    }

    #[test]
    fn window_corners_map_to_plot_corners() {
        let w = window();

        let origin = world_to_screen(vec2(0.0, -5.0), &w, 100.0, 300.0, 50.0, 250.0);
        let far = world_to_screen(vec2(10.0, 15.0), &w, 100.0, 300.0, 50.0, 250.0);

        assert_eq!(origin, vec2(100.0, 250.0));
        assert_eq!(far, vec2(300.0, 50.0));
    }

    #[test]
    fn zero_height_sits_a_quarter_up_the_plot() {
        let p = world_to_screen(vec2(5.0, 0.0), &window(), 0.0, 200.0, 0.0, 200.0);

        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 150.0).abs() < 1e-4);
    }

    #[test]
    fn points_below_ground_are_pinned_to_the_border() {
        assert_eq!(clamp_to_window(vec2(4.0, -9.0), &window()), vec2(4.0, -5.0));
        assert_eq!(clamp_to_window(vec2(12.0, 3.0), &window()), vec2(10.0, 3.0));
    }
}
