use clap::Args;

use crate::core::ballistics::{
    DEFAULT_GRAVITY_MPS2, DEFAULT_INITIAL_HEIGHT_M, DEFAULT_INITIAL_VELOCITY_MPS,
    ThrowParameters,
};
use crate::core::error::ThrowError;

// Launch parameters as typed on the command line. The angle stays in degrees here and
// is converted to radians on the way into `ThrowParameters`.
#[derive(Args, Debug, Clone, Copy)]
pub struct ThrowArgs {
    /// The initial velocity in m/s
    #[arg(
        short = 'i',
        long = "initial_velocity",
        default_value_t = DEFAULT_INITIAL_VELOCITY_MPS
    )]
    pub initial_velocity: f64,

    /// Dropping angle alpha in deg (required)
    #[arg(short = 'a', long = "alpha", allow_negative_numbers = true)]
    pub alpha: Option<f64>,

    /// Gravitational acceleration in m/s²
    #[arg(
        short = 'g',
        long = "g_acceleration",
        default_value_t = DEFAULT_GRAVITY_MPS2
    )]
    pub g_acceleration: f64,

    /// Initial height in m
    #[arg(
        short = 'y',
        long = "initial_height",
        default_value_t = DEFAULT_INITIAL_HEIGHT_M,
        allow_negative_numbers = true
    )]
    pub initial_height: f64,
}

impl ThrowArgs {
    pub fn angle_deg(&self) -> Result<f64, ThrowError> {
        self.alpha.ok_or(ThrowError::MissingRequiredInput("alpha"))
    }

    pub fn parameters(&self) -> Result<ThrowParameters, ThrowError> {
        ThrowParameters::new(
            self.initial_velocity,
            self.g_acceleration,
            self.initial_height,
            self.angle_deg()?.to_radians(),
        )
    }
}
