//! Error types for component operations.

use lq_core::error::LqError;
use thiserror::Error;

/// Errors that can occur during component construction and geometry checks.
#[derive(Error, Debug, Clone)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for LqError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => LqError::InvalidArg { what },
            ComponentError::InvalidArg { what } => LqError::InvalidArg { what },
        }
    }
}
