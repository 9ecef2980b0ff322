use std::ops::Range;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// The velocity panel starts this far below the smallest sampled velocity.
pub const VELOCITY_FLOOR_OFFSET: f64 = 2.0;

/// Data ranges a panel is drawn over.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisWindow {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl AxisWindow {
    pub fn x_span(&self) -> f64 {
        self.x.end - self.x.start
    }

    pub fn y_span(&self) -> f64 {
        self.y.end - self.y.start
    }
}

fn padded_max(raw_max: f64, floor: f64, ratio: f64) -> f64 {
    let raw_span = (raw_max - floor).max(MIN_SPAN);
    (floor + raw_span + raw_span * ratio).max(floor + MIN_SPAN)
}

fn max_x(points: &[(f64, f64)]) -> f64 {
    points.iter().fold(0.0f64, |acc, &(x, _)| acc.max(x))
}

/// Window for a curve whose y-axis starts at ground level.
pub fn ground_axis_window(points: &[(f64, f64)]) -> AxisWindow {
    let raw_max_y = points.iter().fold(0.0f64, |acc, &(_, y)| acc.max(y));

    AxisWindow {
        x: 0.0..padded_max(max_x(points), 0.0, X_PADDING_RATIO),
        y: 0.0..padded_max(raw_max_y, 0.0, Y_PADDING_RATIO),
    }
}

/// Window for the vertical velocity curve, whose y-axis starts at `min(v) - 2`.
pub fn velocity_axis_window(points: &[(f64, f64)]) -> AxisWindow {
    let raw_min_y = points
        .iter()
        .map(|&(_, v)| v)
        .reduce(f64::min)
        .unwrap_or(0.0);
    let raw_max_y = points
        .iter()
        .map(|&(_, v)| v)
        .reduce(f64::max)
        .unwrap_or(0.0)
        .max(0.0);
    let floor = raw_min_y - VELOCITY_FLOOR_OFFSET;

    AxisWindow {
        x: 0.0..padded_max(max_x(points), 0.0, X_PADDING_RATIO),
        y: floor..padded_max(raw_max_y, floor, Y_PADDING_RATIO),
    }
}

#[cfg(test)]
mod tests {
    use super::{VELOCITY_FLOOR_OFFSET, ground_axis_window, velocity_axis_window};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn ground_window_starts_at_zero_and_pads_maximum() {
        let window = ground_axis_window(&[(0.0, 20.0), (10.0, 12.0), (20.0, 0.5)]);

        assert_eq!(window.x.start, 0.0);
        assert_eq!(window.y.start, 0.0);
        assert_close(window.x.end, 21.2, 1e-9);
        assert_close(window.y.end, 22.0, 1e-9);
    }

    #[test]
    fn empty_curve_gets_unit_window() {
        let window = ground_axis_window(&[]);

        assert!(window.x_span() >= 1.0);
        assert!(window.y_span() >= 1.0);
    }

    #[test]
    fn velocity_window_sits_below_minimum() {
        let window = velocity_axis_window(&[(0.0, 5.0), (1.0, -4.81), (2.0, -14.62)]);

        assert_close(window.y.start, -14.62 - VELOCITY_FLOOR_OFFSET, 1e-9);
        assert!(window.y.end > 5.0);
        assert_close(window.x.end, 2.12, 1e-9);
    }

    #[test]
    fn falling_velocity_window_still_reaches_zero() {
        let window = velocity_axis_window(&[(0.0, -1.0), (0.5, -6.0)]);

        assert_close(window.y.start, -8.0, 1e-9);
        assert!(window.y.contains(&0.0));
    }
}
