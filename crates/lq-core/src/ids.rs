use crate::error::{LqError, LqResult};
use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used as a reference-table key.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized and turns the
///   "keys are positive integers" rule into a type-level invariant
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from an externally supplied integer key.
    ///
    /// Keys arrive from user input and reference data, so this is fallible:
    /// zero and negative values are rejected, as are values beyond `u32::MAX`.
    pub fn from_raw(raw: i64) -> LqResult<Self> {
        if raw <= 0 {
            return Err(LqError::InvalidArg {
                what: "id must be a positive integer",
            });
        }
        let raw = u32::try_from(raw).map_err(|_| LqError::InvalidArg {
            what: "id exceeds u32 range",
        })?;
        // raw > 0 was checked above
        Ok(Self(NonZeroU32::new(raw).expect("raw is positive")))
    }

    /// The raw integer key.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.get())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type SubstanceId = Id;
pub type MaterialId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_raw() {
        for raw in [1_i64, 2, 42, 10_000, u32::MAX as i64] {
            let id = Id::from_raw(raw).unwrap();
            assert_eq!(id.get() as i64, raw);
        }
    }

    #[test]
    fn id_rejects_non_positive() {
        assert!(Id::from_raw(0).is_err());
        assert!(Id::from_raw(-1).is_err());
        assert!(Id::from_raw(i64::MIN).is_err());
    }

    #[test]
    fn id_rejects_overflow() {
        assert!(Id::from_raw(u32::MAX as i64 + 1).is_err());
    }

    #[test]
    fn option_id_is_small() {
        // This is a classic reason for NonZero: Option<Id> can be same size as Id.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}
