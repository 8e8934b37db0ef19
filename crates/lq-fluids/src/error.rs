//! Property-resolution errors.

use crate::table::PropertyKind;
use thiserror::Error;

/// Result type for property operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while resolving liquid properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Invalid argument (construction-time violation of a physical invariant).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A resolved value failed its sanity check.
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// No reference table for the requested substance.
    #[error("No {kind} table for substance id {id}")]
    UnknownSubstance { id: u32, kind: PropertyKind },

    /// Query outside the tabulated span. Interpolation is refused rather than
    /// extrapolated.
    #[error(
        "{kind} query at {value} is outside the tabulated span [{min}, {max}] for substance id {id}"
    )]
    OutOfRange {
        id: u32,
        kind: PropertyKind,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Malformed reference data.
    #[error("Malformed property table: {message}")]
    BadTable { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnknownSubstance {
            id: 7,
            kind: PropertyKind::Density,
        };
        assert!(err.to_string().contains("density"));
        assert!(err.to_string().contains('7'));

        let err = FluidError::OutOfRange {
            id: 1,
            kind: PropertyKind::DynamicViscosity,
            value: 150.0,
            min: 0.0,
            max: 100.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("150"));
        assert!(msg.contains("100"));
    }
}
