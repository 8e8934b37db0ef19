//! Tabulated property data: per-substance temperature→value tables.
//!
//! Tables are read-only reference data. They are validated once at load
//! (non-empty, finite, strictly ascending temperatures) and every query
//! afterwards assumes those invariants.

use crate::error::{FluidError, FluidResult};
use lq_core::SubstanceId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Property families carried by the reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Density over temperature [kg/m³ over °C]
    Density,
    /// Dynamic viscosity over temperature [mPa·s over °C]
    DynamicViscosity,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Density => write!(f, "density"),
            Self::DynamicViscosity => write!(f, "dynamic viscosity"),
        }
    }
}

/// One tabulated reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyPoint {
    /// Temperature [°C]
    pub temp_c: f64,
    /// Property value in the kind's native unit
    pub value: f64,
}

impl PropertyPoint {
    pub const fn new(temp_c: f64, value: f64) -> Self {
        Self { temp_c, value }
    }
}

/// Inclusive tabulated temperature span [°C], taken from the first and last
/// points of the sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempSpan {
    pub min_c: f64,
    pub max_c: f64,
}

impl TempSpan {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min_c && v <= self.max_c
    }
}

/// Result of a table lookup at a target temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// A tabulated temperature equals the target exactly (f64 equality, not a
    /// tolerance match).
    Exact(f64),
    /// The last point at or below the target and the first point at or above
    /// it; distinct whenever there is no exact match.
    Bracket(PropertyPoint, PropertyPoint),
}

/// Ordered temperature→value points for one property of one substance.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    points: Vec<PropertyPoint>,
}

impl PropertyTable {
    /// Validate and wrap a point sequence.
    ///
    /// Rejects empty sequences, non-finite coordinates, and temperatures that
    /// are not strictly ascending (duplicates included).
    pub fn new(points: Vec<PropertyPoint>) -> FluidResult<Self> {
        if points.is_empty() {
            return Err(FluidError::BadTable {
                message: "table has no points".into(),
            });
        }
        for p in &points {
            if !p.temp_c.is_finite() || !p.value.is_finite() {
                return Err(FluidError::BadTable {
                    message: format!("non-finite point ({}, {})", p.temp_c, p.value),
                });
            }
        }
        for w in points.windows(2) {
            if w[1].temp_c <= w[0].temp_c {
                return Err(FluidError::BadTable {
                    message: format!("temperatures not strictly ascending near {}", w[1].temp_c),
                });
            }
        }
        Ok(Self { points })
    }

    /// Tabulated temperature span.
    pub fn span(&self) -> TempSpan {
        TempSpan {
            min_c: self.points[0].temp_c,
            max_c: self.points[self.points.len() - 1].temp_c,
        }
    }

    pub fn points(&self) -> &[PropertyPoint] {
        &self.points
    }

    /// Exact match or bracketing neighbors for an in-span target.
    ///
    /// Callers verify the span first; an in-span target always has a last
    /// point with `t <= target` and a first point with `t >= target`.
    pub(crate) fn resolve(&self, temp_c: f64) -> Lookup {
        let below = self
            .points
            .iter()
            .rev()
            .find(|p| p.temp_c <= temp_c)
            .expect("in-span target has a lower neighbor");
        let above = self
            .points
            .iter()
            .find(|p| p.temp_c >= temp_c)
            .expect("in-span target has an upper neighbor");
        if below.temp_c == above.temp_c {
            Lookup::Exact(below.value)
        } else {
            Lookup::Bracket(*below, *above)
        }
    }
}

#[derive(Debug, Clone)]
struct SubstanceRecord {
    name: String,
    density: PropertyTable,
    viscosity: PropertyTable,
}

/// Read-only store of property tables keyed by substance id.
///
/// Loaded once and never mutated afterwards; freely shareable. Property
/// queries go through the [`PropertySource`](crate::model::PropertySource)
/// trait so the resolver stays decoupled from this concrete storage.
#[derive(Debug, Clone, Default)]
pub struct PropertyTableStore {
    records: BTreeMap<u32, SubstanceRecord>,
}

impl PropertyTableStore {
    /// An empty store, for assembling custom data (tests, alternative loaders).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert a substance record, replacing any existing one with the same id.
    pub fn insert(
        &mut self,
        id: SubstanceId,
        name: impl Into<String>,
        density: PropertyTable,
        viscosity: PropertyTable,
    ) {
        self.records.insert(
            id.get(),
            SubstanceRecord {
                name: name.into(),
                density,
                viscosity,
            },
        );
    }

    /// Parse a YAML record document.
    ///
    /// One record per substance: id, display name, and the density and
    /// viscosity point lists, each strictly ascending by temperature.
    pub fn from_yaml(doc: &str) -> FluidResult<Self> {
        let raw: RawDocument = serde_yaml::from_str(doc).map_err(|e| FluidError::BadTable {
            message: e.to_string(),
        })?;
        let mut store = Self::empty();
        for sub in raw.substances {
            let id = SubstanceId::from_raw(sub.id).map_err(|_| FluidError::BadTable {
                message: format!("substance id {} is not a positive integer", sub.id),
            })?;
            if store.records.contains_key(&id.get()) {
                return Err(FluidError::BadTable {
                    message: format!("duplicate substance id {id}"),
                });
            }
            let density = PropertyTable::new(raw_points(sub.density))?;
            let viscosity = PropertyTable::new(raw_points(sub.viscosity))?;
            store.insert(id, sub.name, density, viscosity);
        }
        Ok(store)
    }

    pub(crate) fn table(&self, id: SubstanceId, kind: PropertyKind) -> FluidResult<&PropertyTable> {
        let rec = self
            .records
            .get(&id.get())
            .ok_or(FluidError::UnknownSubstance { id: id.get(), kind })?;
        Ok(match kind {
            PropertyKind::Density => &rec.density,
            PropertyKind::DynamicViscosity => &rec.viscosity,
        })
    }

    /// Substance ids and display names in ascending id order.
    pub fn substances(&self) -> impl Iterator<Item = (u32, &str)> {
        self.records.iter().map(|(id, rec)| (*id, rec.name.as_str()))
    }

    pub fn name_of(&self, id: SubstanceId) -> Option<&str> {
        self.records.get(&id.get()).map(|rec| rec.name.as_str())
    }

    /// Resolve a query string — a numeric id or a case-insensitive display
    /// name — to a known substance id.
    pub fn find(&self, query: &str) -> Option<SubstanceId> {
        let query = query.trim();
        if let Ok(raw) = query.parse::<i64>() {
            let id = SubstanceId::from_raw(raw).ok()?;
            return self.records.contains_key(&id.get()).then_some(id);
        }
        self.records
            .iter()
            .find(|(_, rec)| rec.name.eq_ignore_ascii_case(query))
            .map(|(id, _)| SubstanceId::from_raw(i64::from(*id)).expect("stored ids are positive"))
    }
}

// --- serde schema for the record document ---

#[derive(Debug, Deserialize)]
struct RawDocument {
    substances: Vec<RawSubstance>,
}

#[derive(Debug, Deserialize)]
struct RawSubstance {
    id: i64,
    name: String,
    density: Vec<RawPoint>,
    viscosity: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    t: f64,
    value: f64,
}

fn raw_points(raw: Vec<RawPoint>) -> Vec<PropertyPoint> {
    raw.into_iter()
        .map(|p| PropertyPoint::new(p.t, p.value))
        .collect()
}
