//! Core traits for pipeline geometry.

use lq_core::units::{Area, Length};

/// Flow cross-section geometry.
///
/// `hydraulic_diameter` is the effective-diameter hook: the default derives
/// it from flow area and wetted perimeter as `4·A/P`; sections with a
/// closed-form diameter can override it.
pub trait CrossSection {
    /// Cross-sectional flow area.
    fn flow_area(&self) -> Area;

    /// Wetted perimeter.
    fn wetted_perimeter(&self) -> Length;

    /// Effective (hydraulic) diameter.
    fn hydraulic_diameter(&self) -> Length {
        self.flow_area() * 4.0 / self.wetted_perimeter()
    }
}
