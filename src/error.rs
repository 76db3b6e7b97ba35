// src/error.rs

use std::error::Error;
use std::fmt;

/// Everything that can stop a simulation run. None of these are recoverable:
/// the run is a batch job and the caller gets the first failure.
#[derive(Debug)]
pub enum SimError {
    /// A zero-length vector was normalized. Only happens when two bodies
    /// occupy the exact same position.
    DivisionByZero,

    /// The reference body named for re-centering is not in the system.
    InvalidBody { name: String },

    /// A body was inserted under a name that is already taken.
    DuplicateBody { name: String },

    /// Configuration rejected before the run started.
    InvalidConfig(String),

    /// The renderer failed to emit a frame.
    RenderFailure {
        frame: usize,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl SimError {
    pub fn render<E>(frame: usize, source: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        SimError::RenderFailure {
            frame,
            source: source.into(),
        }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::DivisionByZero => {
                write!(f, "division by zero while normalizing a zero-length vector")
            }
            SimError::InvalidBody { name } => {
                write!(f, "reference body '{}' is not part of the system", name)
            }
            SimError::DuplicateBody { name } => {
                write!(f, "a body named '{}' already exists", name)
            }
            SimError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            SimError::RenderFailure { frame, source } => {
                write!(f, "failed to render frame {}: {}", frame, source)
            }
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::RenderFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
