//! Builtin substance catalog backed by the embedded reference tables.

use crate::table::PropertyTableStore;
use std::sync::OnceLock;

/// Record document compiled into the binary.
const PROPERTIES_YAML: &str = include_str!("../data/properties.yaml");

static BUILTIN: OnceLock<PropertyTableStore> = OnceLock::new();

/// The builtin property tables (water, ethanol, glycerol).
///
/// Parsed once on first use and shared for the process lifetime. The embedded
/// document ships with the crate, so a parse failure is a programmer error.
pub fn builtin() -> &'static PropertyTableStore {
    BUILTIN.get_or_init(|| {
        PropertyTableStore::from_yaml(PROPERTIES_YAML)
            .expect("embedded property tables are valid")
    })
}
