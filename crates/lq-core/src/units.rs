// lq-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Read a temperature back in degrees Celsius (reference tables are keyed in °C).
#[inline]
pub fn celsius_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kgm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mpas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::millipascal_second;
    DynVisc::new::<millipascal_second>(v)
}

pub mod constants {
    /// Absolute zero in degrees Celsius.
    pub const ABSOLUTE_ZERO_C: f64 = -273.15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _l = m(2.0);
        let _rho = kgm3(998.2);
        let _mu = mpas(1.002);
    }

    #[test]
    fn celsius_round_trip() {
        let t = degc(20.0);
        assert!((celsius_of(t) - 20.0).abs() < 1e-9);
        // canonical storage is kelvin
        assert!((t.value - 293.15).abs() < 1e-9);
    }

    #[test]
    fn absolute_zero_maps_to_zero_kelvin() {
        let t = degc(constants::ABSOLUTE_ZERO_C);
        assert!(t.value.abs() < 1e-9);
    }

    #[test]
    fn viscosity_constructor_is_milli() {
        // 1.0 mPa·s == 1e-3 Pa·s
        let mu = mpas(1.0);
        assert!((mu.value - 1e-3).abs() < 1e-12);
    }
}
