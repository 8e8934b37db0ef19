//! Liquid state resolver.
//!
//! Owns one liquid's thermodynamic state and keeps the derived properties
//! (density, dynamic and kinematic viscosity) consistent with the current
//! temperature by querying an injected [`PropertySource`].

use crate::error::{FluidError, FluidResult};
use crate::interpolate;
use crate::model::{PropertySource, validation};
use crate::table::{Lookup, PropertyKind, TempSpan};
use lq_core::SubstanceId;
use lq_core::units::{Density, DynVisc, Pressure, Temperature, celsius_of, kgm3, mpas};

/// Kinematic viscosity [m²/s].
///
/// Not part of uom's standard quantity set, so we use f64 with clear
/// documentation.
pub type KinVisc = f64;

/// Which value is checked against the dynamic-viscosity table span before the
/// viscosity lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViscosityRangeCheck {
    /// Check the requested temperature against the span.
    #[default]
    Temperature,
    /// Compatibility mode: check the previously resolved dynamic viscosity
    /// (mPa·s, 0.0 before the first resolution) against the span instead of
    /// the temperature. Only for reproducing results computed before this
    /// check was corrected.
    PriorViscosity,
}

/// Derived values from one resolution pass; committed to the state only when
/// the whole recompute succeeds.
#[derive(Debug, Clone, Copy)]
struct Derived {
    rho_kg_m3: f64,
    mu_mpas: f64,
    nu_m2_s: f64,
}

/// One liquid's thermodynamic state.
///
/// The substance id is fixed at construction, and so is the pressure — there
/// is no public pressure mutator. Every temperature change re-derives density
/// first and the viscosities second (kinematic viscosity divides by density),
/// refusing to extrapolate outside the tabulated spans. A failed recompute
/// leaves the previous state untouched.
#[derive(Debug, Clone)]
pub struct Liquid {
    id: SubstanceId,
    temperature: Temperature,
    pressure: Pressure,
    rho_kg_m3: f64,
    mu_mpas: f64,
    nu_m2_s: f64,
    range_check: ViscosityRangeCheck,
}

impl Liquid {
    /// Create a liquid and resolve its derived properties immediately.
    ///
    /// Fails with [`FluidError::InvalidArg`] if the temperature is at or
    /// below absolute zero or the pressure is not positive (both must be
    /// finite), and propagates any lookup error from the initial resolution.
    pub fn new(
        tables: &dyn PropertySource,
        id: SubstanceId,
        temperature: Temperature,
        pressure: Pressure,
    ) -> FluidResult<Self> {
        Self::with_range_check(tables, id, temperature, pressure, ViscosityRangeCheck::default())
    }

    /// Like [`Liquid::new`], selecting the viscosity range-check mode.
    pub fn with_range_check(
        tables: &dyn PropertySource,
        id: SubstanceId,
        temperature: Temperature,
        pressure: Pressure,
        range_check: ViscosityRangeCheck,
    ) -> FluidResult<Self> {
        validation::validate_temperature(temperature)?;
        validation::validate_pressure(pressure)?;
        // Nothing resolved yet, so the compatibility check sees 0.0.
        let derived = resolve_properties(tables, id, celsius_of(temperature), 0.0, range_check)?;
        Ok(Self {
            id,
            temperature,
            pressure,
            rho_kg_m3: derived.rho_kg_m3,
            mu_mpas: derived.mu_mpas,
            nu_m2_s: derived.nu_m2_s,
            range_check,
        })
    }

    /// Set a new temperature and re-derive density, then dynamic and
    /// kinematic viscosity.
    ///
    /// This is a full, fallible recompute. The value itself is not range
    /// checked here — the tabulated spans decide what is resolvable — and on
    /// any failure the previous state is left untouched.
    pub fn set_temperature(
        &mut self,
        tables: &dyn PropertySource,
        temperature: Temperature,
    ) -> FluidResult<()> {
        if !temperature.value.is_finite() {
            return Err(FluidError::InvalidArg {
                what: "temperature must be finite",
            });
        }
        let derived = resolve_properties(
            tables,
            self.id,
            celsius_of(temperature),
            self.mu_mpas,
            self.range_check,
        )?;
        self.temperature = temperature;
        self.rho_kg_m3 = derived.rho_kg_m3;
        self.mu_mpas = derived.mu_mpas;
        self.nu_m2_s = derived.nu_m2_s;
        Ok(())
    }

    pub fn substance(&self) -> SubstanceId {
        self.id
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Density at the current temperature.
    pub fn density(&self) -> Density {
        kgm3(self.rho_kg_m3)
    }

    /// Dynamic viscosity at the current temperature.
    pub fn viscosity_dynamic(&self) -> DynVisc {
        mpas(self.mu_mpas)
    }

    /// Kinematic viscosity [m²/s] at the current temperature.
    pub fn viscosity_kinematic(&self) -> KinVisc {
        self.nu_m2_s
    }
}

/// Density first, viscosity second: kinematic viscosity divides by density.
fn resolve_properties(
    tables: &dyn PropertySource,
    id: SubstanceId,
    temp_c: f64,
    prior_mu_mpas: f64,
    range_check: ViscosityRangeCheck,
) -> FluidResult<Derived> {
    let span = tables.span(id, PropertyKind::Density)?;
    if !span.contains(temp_c) {
        return Err(out_of_range(id, PropertyKind::Density, temp_c, span));
    }
    let rho_kg_m3 = evaluate(tables, id, PropertyKind::Density, temp_c)?;
    if !rho_kg_m3.is_finite() || rho_kg_m3 <= 0.0 {
        return Err(FluidError::NonPhysical {
            what: "density must be positive and finite",
        });
    }

    let span = tables.span(id, PropertyKind::DynamicViscosity)?;
    let checked = match range_check {
        ViscosityRangeCheck::Temperature => temp_c,
        ViscosityRangeCheck::PriorViscosity => prior_mu_mpas,
    };
    if !span.contains(checked) {
        return Err(out_of_range(id, PropertyKind::DynamicViscosity, checked, span));
    }
    let mu_mpas = evaluate(tables, id, PropertyKind::DynamicViscosity, temp_c)?;
    if !mu_mpas.is_finite() || mu_mpas < 0.0 {
        return Err(FluidError::NonPhysical {
            what: "dynamic viscosity must be non-negative and finite",
        });
    }

    // mPa·s → Pa·s, then divide by density
    let nu_m2_s = mu_mpas / 1000.0 / rho_kg_m3;
    if !nu_m2_s.is_finite() {
        return Err(FluidError::NonPhysical {
            what: "kinematic viscosity must be finite",
        });
    }

    Ok(Derived {
        rho_kg_m3,
        mu_mpas,
        nu_m2_s,
    })
}

fn evaluate(
    tables: &dyn PropertySource,
    id: SubstanceId,
    kind: PropertyKind,
    temp_c: f64,
) -> FluidResult<f64> {
    Ok(match tables.lookup(id, kind, temp_c)? {
        Lookup::Exact(value) => value,
        Lookup::Bracket(below, above) => interpolate::linear(below, above, temp_c),
    })
}

fn out_of_range(id: SubstanceId, kind: PropertyKind, value: f64, span: TempSpan) -> FluidError {
    FluidError::OutOfRange {
        id: id.get(),
        kind,
        value,
        min: span.min_c,
        max: span.max_c,
    }
}
