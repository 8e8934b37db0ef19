//! lq-core: stable foundation for liquiflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact positive-integer keys for reference data)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LqError, LqResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
