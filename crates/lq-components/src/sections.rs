//! Concrete cross-sections.

use crate::common::check_positive;
use crate::error::ComponentResult;
use crate::traits::CrossSection;
use lq_core::units::{Area, Length};
use std::f64::consts::PI;

/// Circular cross-section.
#[derive(Debug, Clone)]
pub struct CircularSection {
    diameter: Length,
}

impl CircularSection {
    pub fn new(diameter: Length) -> ComponentResult<Self> {
        check_positive(diameter.value, "diameter must be positive")?;
        Ok(Self { diameter })
    }
}

impl CrossSection for CircularSection {
    fn flow_area(&self) -> Area {
        self.diameter * self.diameter * PI / 4.0
    }

    fn wetted_perimeter(&self) -> Length {
        self.diameter * PI
    }

    // 4·(πd²/4)/(πd) reduces to d; skip the floating-point round trip.
    fn hydraulic_diameter(&self) -> Length {
        self.diameter
    }
}

/// Rectangular duct cross-section; uses the default 4·A/P hook.
#[derive(Debug, Clone)]
pub struct RectangularSection {
    width: Length,
    height: Length,
}

impl RectangularSection {
    pub fn new(width: Length, height: Length) -> ComponentResult<Self> {
        check_positive(width.value, "width must be positive")?;
        check_positive(height.value, "height must be positive")?;
        Ok(Self { width, height })
    }
}

impl CrossSection for RectangularSection {
    fn flow_area(&self) -> Area {
        self.width * self.height
    }

    fn wetted_perimeter(&self) -> Length {
        (self.width + self.height) * 2.0
    }
}
