//! Builtin-table integration tests.
//!
//! These exercise the resolver against the embedded reference data with
//! realistic scenarios. Interpolated values are checked against physical
//! plausibility; tabulated values are checked exactly.

use lq_core::SubstanceId;
use lq_core::units::{celsius_of, degc, pa};
use lq_fluids::{FluidError, Liquid, PropertyKind, PropertySource, catalog};

fn water() -> SubstanceId {
    SubstanceId::from_raw(1).unwrap()
}

#[test]
fn water_at_0c_and_1atm() {
    let tables = catalog::builtin();
    let liq = Liquid::new(tables, water(), degc(0.0), pa(101_325.0)).unwrap();

    // Tabulated points resolve exactly
    assert_eq!(liq.density().value, 999.8);

    // Dynamic viscosity ~1.792 mPa·s, kinematic ~1.79e-6 m²/s
    let mu_mpas = liq.viscosity_dynamic().value * 1000.0;
    assert!((mu_mpas - 1.792).abs() < 1e-9);
    let nu = liq.viscosity_kinematic();
    assert!(nu > 1.5e-6 && nu < 2.0e-6, "nu = {nu} m²/s");
}

#[test]
fn temperature_change_tracks_the_table() {
    let tables = catalog::builtin();
    let mut liq = Liquid::new(tables, water(), degc(0.0), pa(101_325.0)).unwrap();

    liq.set_temperature(tables, degc(10.0)).unwrap();
    assert_eq!(liq.density().value, 999.7);

    // Between tabulated points: density falls between the neighbors
    liq.set_temperature(tables, degc(15.0)).unwrap();
    let rho = liq.density().value;
    assert!(rho < 999.7 && rho > 998.2, "rho = {rho} kg/m³");
}

#[test]
fn density_decreases_with_temperature() {
    let tables = catalog::builtin();
    let mut liq = Liquid::new(tables, water(), degc(5.0), pa(101_325.0)).unwrap();

    let mut last = liq.density().value;
    for t in [25.0, 45.0, 65.0, 85.0] {
        liq.set_temperature(tables, degc(t)).unwrap();
        let rho = liq.density().value;
        assert!(rho < last, "density should fall with temperature");
        last = rho;
    }
}

#[test]
fn viscosity_decreases_with_temperature() {
    let tables = catalog::builtin();
    let mut liq = Liquid::new(tables, water(), degc(5.0), pa(101_325.0)).unwrap();

    let mut last = liq.viscosity_dynamic().value;
    for t in [15.0, 35.0, 55.0, 95.0] {
        liq.set_temperature(tables, degc(t)).unwrap();
        let mu = liq.viscosity_dynamic().value;
        assert!(mu < last, "viscosity should fall with temperature");
        last = mu;
    }
}

#[test]
fn all_builtin_substances_resolve_at_20c() {
    let tables = catalog::builtin();
    for (raw, name) in tables.substances() {
        let id = SubstanceId::from_raw(i64::from(raw)).unwrap();
        let liq = Liquid::new(tables, id, degc(20.0), pa(101_325.0))
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(liq.density().value > 0.0);
        assert!(liq.viscosity_dynamic().value > 0.0);
        assert!(liq.viscosity_kinematic() > 0.0);
    }
}

#[test]
fn out_of_span_requests_are_refused_and_state_kept() {
    let tables = catalog::builtin();
    let mut liq = Liquid::new(tables, water(), degc(20.0), pa(101_325.0)).unwrap();
    let rho_before = liq.density().value;

    let err = liq.set_temperature(tables, degc(150.0)).unwrap_err();
    assert!(matches!(err, FluidError::OutOfRange { .. }));
    let err = liq.set_temperature(tables, degc(-40.0)).unwrap_err();
    assert!(matches!(err, FluidError::OutOfRange { .. }));

    assert!((celsius_of(liq.temperature()) - 20.0).abs() < 1e-9);
    assert_eq!(liq.density().value, rho_before);
}

#[test]
fn construction_beyond_span_fails() {
    let tables = catalog::builtin();
    let err = Liquid::new(tables, water(), degc(150.0), pa(101_325.0)).unwrap_err();
    assert!(matches!(err, FluidError::OutOfRange { .. }));
}

#[test]
fn unknown_substance_fails() {
    let tables = catalog::builtin();
    let id = SubstanceId::from_raw(999).unwrap();
    let err = Liquid::new(tables, id, degc(20.0), pa(101_325.0)).unwrap_err();
    assert!(matches!(err, FluidError::UnknownSubstance { .. }));
}

#[test]
fn spans_agree_between_kinds_for_water() {
    let tables = catalog::builtin();
    let d = tables.span(water(), PropertyKind::Density).unwrap();
    let v = tables.span(water(), PropertyKind::DynamicViscosity).unwrap();
    assert_eq!(d.min_c, v.min_c);
    assert_eq!(d.max_c, v.max_c);
}
