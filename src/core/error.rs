use thiserror::Error;

/// Everything that can stop a throw from being solved, reported or drawn.
#[derive(Error, Debug)]
pub enum ThrowError {
    #[error("Missing required input: {0}")]
    MissingRequiredInput(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("No real solution: discriminant is negative ({discriminant})")]
    NoSolution { discriminant: f64 },

    #[error("Could not render plot: {0}")]
    Plot(String),

    #[error("Could not write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ThrowError {
    /// Missing input is not a failure of the run, the caller shows usage instead.
    pub fn is_usage(&self) -> bool {
        matches!(self, ThrowError::MissingRequiredInput(_))
    }
}
