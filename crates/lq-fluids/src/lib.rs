//! lq-fluids: liquid property resolution for liquiflow.
//!
//! Provides:
//! - Tabulated property tables (density and dynamic viscosity over temperature)
//! - Straight-line interpolation between tabulated points
//! - The `PropertySource` trait decoupling resolution from storage
//! - The `Liquid` state resolver: every temperature change re-derives density
//!   and viscosity
//! - A builtin substance catalog from an embedded record document
//!
//! # Architecture
//!
//! The resolver only talks to the [`PropertySource`] trait, so the concrete
//! [`PropertyTableStore`] can be swapped for purpose-built tables in tests or
//! for alternative data sources later. Queries outside a table's tabulated
//! span are refused with an error — values are never extrapolated.
//!
//! # Example
//!
//! ```
//! use lq_core::SubstanceId;
//! use lq_core::units::{degc, pa};
//! use lq_fluids::{Liquid, catalog};
//!
//! let tables = catalog::builtin();
//! let water = SubstanceId::from_raw(1).unwrap();
//! let liq = Liquid::new(tables, water, degc(20.0), pa(101_325.0)).unwrap();
//! assert!(liq.density().value > 990.0);
//! ```

pub mod catalog;
pub mod error;
pub mod interpolate;
pub mod liquid;
pub mod model;
pub mod table;

// Re-exports for ergonomics
pub use error::{FluidError, FluidResult};
pub use liquid::{KinVisc, Liquid, ViscosityRangeCheck};
pub use model::PropertySource;
pub use table::{Lookup, PropertyKind, PropertyPoint, PropertyTable, PropertyTableStore, TempSpan};
