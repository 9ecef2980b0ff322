use log::{debug, warn};

use crate::core::error::ThrowError;

pub const DEFAULT_INITIAL_VELOCITY_MPS: f64 = 10.0;
pub const DEFAULT_GRAVITY_MPS2: f64 = 9.81;
pub const DEFAULT_INITIAL_HEIGHT_M: f64 = 20.0;

pub const DISTANCE_DOMAIN: SampleDomain = SampleDomain::new(0.0, 100.0, 100);
pub const TIME_DOMAIN: SampleDomain = SampleDomain::new(0.0, 100.0, 500);

// |cos(alpha)| below this is treated as a vertical launch.
const VERTICAL_LAUNCH_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThrowParameters {
    pub initial_velocity: f64,
    pub gravity: f64,
    pub initial_height: f64,
    /// Launch angle in radians.
    pub angle: f64,
}

impl ThrowParameters {
    pub fn new(
        initial_velocity: f64,
        gravity: f64,
        initial_height: f64,
        angle: f64,
    ) -> Result<Self, ThrowError> {
        if ![initial_velocity, gravity, initial_height, angle]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ThrowError::InvalidConfiguration(
                "Inputs must be finite numbers.".to_string(),
            ));
        }
        if gravity <= 0.0 {
            return Err(ThrowError::InvalidConfiguration(format!(
                "Gravitational acceleration must be positive (got {gravity})."
            )));
        }
        if initial_velocity <= 0.0 {
            return Err(ThrowError::InvalidConfiguration(format!(
                "Initial velocity must be positive (got {initial_velocity})."
            )));
        }

        Ok(Self {
            initial_velocity,
            gravity,
            initial_height,
            angle,
        })
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let vx = self.initial_velocity * self.angle.cos();
        let vy = self.initial_velocity * self.angle.sin();
        (vx, vy)
    }

    pub fn is_vertical(&self) -> bool {
        self.angle.cos().abs() < VERTICAL_LAUNCH_EPSILON
    }
}

/// Evenly spaced samples over `[start, end]`, both ends included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleDomain {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl SampleDomain {
    pub const fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    pub fn points(self) -> impl Iterator<Item = f64> {
        let SampleDomain { start, end, count } = self;
        let step = if count > 1 {
            (end - start) / (count - 1) as f64
        } else {
            0.0
        };
        (0..count).map(move |i| {
            if count > 1 && i == count - 1 {
                end
            } else {
                start + step * i as f64
            }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootSet {
    /// Horizontal distance where the height returns to zero, in meters.
    pub x_root: f64,
    /// Time at which the height returns to zero, in seconds.
    pub t_root: f64,
}

/// Sampled curves of one throw. The three time-based curves share `time`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySeries {
    pub height_over_distance: Vec<(f64, f64)>,
    pub time: Vec<f64>,
    pub height_over_time: Vec<(f64, f64)>,
    pub distance_over_time: Vec<(f64, f64)>,
    pub vertical_velocity: Vec<(f64, f64)>,
}

// a*s^2 + b*s + c
#[derive(Clone, Copy, Debug)]
struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    fn eval(&self, s: f64) -> f64 {
        (self.a * s * s) + (self.b * s) + self.c
    }

    fn larger_root(&self) -> Result<f64, ThrowError> {
        let disc = (self.b * self.b) - (4.0 * self.a * self.c);
        if disc < 0.0 {
            return Err(ThrowError::NoSolution { discriminant: disc });
        }

        let sqrt_disc = disc.sqrt();
        let first = (-self.b + sqrt_disc) / (2.0 * self.a);
        let second = (-self.b - sqrt_disc) / (2.0 * self.a);
        // `+ 0.0` folds a trivial `-0.0` root into `0.0`.
        Ok(first.max(second) + 0.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TrajectorySolver {
    params: ThrowParameters,
}

impl TrajectorySolver {
    pub fn new(params: ThrowParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> ThrowParameters {
        self.params
    }

    fn distance_equation(&self) -> Result<Quadratic, ThrowError> {
        if self.params.is_vertical() {
            return Err(ThrowError::InvalidConfiguration(format!(
                "y(x) is undefined for a vertical launch (cos(alpha) = {}).",
                self.params.angle.cos()
            )));
        }

        let (vx, _) = self.params.velocity_components();
        Ok(Quadratic {
            a: -self.params.gravity / (2.0 * vx * vx),
            b: self.params.angle.tan(),
            c: self.params.initial_height,
        })
    }

    fn time_equation(&self) -> Quadratic {
        let (_, vy) = self.params.velocity_components();
        Quadratic {
            a: -0.5 * self.params.gravity,
            b: vy,
            c: self.params.initial_height,
        }
    }

    pub fn height_at_distance(&self, x: f64) -> Result<f64, ThrowError> {
        Ok(self.distance_equation()?.eval(x))
    }

    pub fn height_at_time(&self, t: f64) -> f64 {
        self.time_equation().eval(t)
    }

    pub fn distance_at_time(&self, t: f64) -> f64 {
        let (vx, _) = self.params.velocity_components();
        vx * t
    }

    pub fn vertical_velocity_at_time(&self, t: f64) -> f64 {
        let (_, vy) = self.params.velocity_components();
        (-self.params.gravity * t) + vy
    }

    pub fn solve_distance_root(&self) -> Result<f64, ThrowError> {
        self.distance_equation()?.larger_root()
    }

    pub fn solve_time_root(&self) -> Result<f64, ThrowError> {
        self.time_equation().larger_root()
    }

    pub fn solve_roots(&self) -> Result<RootSet, ThrowError> {
        let roots = RootSet {
            x_root: self.solve_distance_root()?,
            t_root: self.solve_time_root()?,
        };
        debug!(
            "Solved zero crossings: x = {} m, t = {} s",
            roots.x_root, roots.t_root
        );
        Ok(roots)
    }

    /// `y(x)` stops before the first negative height, `y(t)` keeps it.
    pub fn sample_series(
        &self,
        x_domain: SampleDomain,
        t_domain: SampleDomain,
    ) -> Result<TrajectorySeries, ThrowError> {
        let distance_equation = self.distance_equation()?;
        let height_over_distance: Vec<(f64, f64)> = x_domain
            .points()
            .map(|x| (x, distance_equation.eval(x)))
            .take_while(|&(_, y)| y >= 0.0)
            .collect();

        let time_equation = self.time_equation();
        let mut height_over_time = Vec::with_capacity(t_domain.count);
        for t in t_domain.points() {
            let y = time_equation.eval(t);
            height_over_time.push((t, y));
            if y < 0.0 {
                break;
            }
        }
        if height_over_time.last().is_some_and(|&(_, y)| y >= 0.0) {
            warn!(
                "Height stays above ground for the whole time domain [{}, {}] s",
                t_domain.start, t_domain.end
            );
        }

        let time: Vec<f64> = height_over_time.iter().map(|&(t, _)| t).collect();
        let distance_over_time = time
            .iter()
            .map(|&t| (t, self.distance_at_time(t)))
            .collect();
        let vertical_velocity = time
            .iter()
            .map(|&t| (t, self.vertical_velocity_at_time(t)))
            .collect();

        debug!(
            "Sampled {} of {} distance points and {} of {} time points",
            height_over_distance.len(),
            x_domain.count,
            time.len(),
            t_domain.count
        );

        Ok(TrajectorySeries {
            height_over_distance,
            time,
            height_over_time,
            distance_over_time,
            vertical_velocity,
        })
    }
}
