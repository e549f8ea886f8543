use thiserror::Error;

/// Errors from the configuration, analysis and export layers.
///
/// The integrators themselves never produce this type: a failing derivative
/// callable's own error is returned unchanged by the `try_*` functions.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("State width changed at row {row}: expected {expected} components, found {found}")]
    RaggedState {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Step count must be positive to cover a time span")]
    ZeroSteps,

    #[error("Convergence study needs at least two refinement levels, got {0}")]
    TooFewLevels(usize),

    #[error("Unknown integration method: {0}")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, Error>;
