//! Common utilities for component calculations.

use crate::error::{ComponentError, ComponentResult};
use lq_core::numeric::ensure_finite;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Ensure a geometric dimension is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<()> {
    check_finite(value, what)?;
    if value <= 0.0 {
        return Err(ComponentError::InvalidArg { what });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_check_positive() {
        assert!(check_positive(0.5, "test").is_ok());
        assert!(check_positive(0.0, "test").is_err());
        assert!(check_positive(-0.5, "test").is_err());
        assert!(check_positive(f64::NAN, "test").is_err());
    }
}
