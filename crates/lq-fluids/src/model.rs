//! Property-source trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::table::{Lookup, PropertyKind, PropertyTableStore, TempSpan};
use lq_core::SubstanceId;

/// Trait for tabulated property backends.
///
/// This is the seam between the liquid state resolver and storage: the
/// resolver only ever sees spans and lookups, so purpose-built tables can be
/// injected in tests and alternative data sources can be added without
/// touching the resolution logic. Implementations must be thread-safe
/// (Send + Sync); the data is read-only after load.
pub trait PropertySource: Send + Sync {
    /// Backend name (for debugging/logging).
    fn name(&self) -> &str;

    /// Min/max tabulated temperature for one substance's property table.
    fn span(&self, id: SubstanceId, kind: PropertyKind) -> FluidResult<TempSpan>;

    /// Exact match or bracketing neighbors at a target temperature.
    ///
    /// The span check happens before exact-match/bracket resolution; a target
    /// outside the span fails with [`FluidError::OutOfRange`], and a substance
    /// without a table fails with [`FluidError::UnknownSubstance`].
    fn lookup(&self, id: SubstanceId, kind: PropertyKind, temp_c: f64) -> FluidResult<Lookup>;
}

impl PropertySource for PropertyTableStore {
    fn name(&self) -> &str {
        "tables"
    }

    fn span(&self, id: SubstanceId, kind: PropertyKind) -> FluidResult<TempSpan> {
        Ok(self.table(id, kind)?.span())
    }

    fn lookup(&self, id: SubstanceId, kind: PropertyKind, temp_c: f64) -> FluidResult<Lookup> {
        let table = self.table(id, kind)?;
        let span = table.span();
        if !span.contains(temp_c) {
            return Err(FluidError::OutOfRange {
                id: id.get(),
                kind,
                value: temp_c,
                min: span.min_c,
                max: span.max_c,
            });
        }
        Ok(table.resolve(temp_c))
    }
}

/// Validation helpers for externally supplied state.
pub(crate) mod validation {
    use super::*;
    use lq_core::units::{Pressure, Temperature};

    /// Pressure must be positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Temperature must be above absolute zero and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "temperature must be above absolute zero",
            });
        }
        Ok(())
    }
}
