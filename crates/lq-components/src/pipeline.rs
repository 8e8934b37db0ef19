//! Pipeline geometry.

use crate::common::check_positive;
use crate::error::ComponentResult;
use crate::traits::CrossSection;
use lq_core::MaterialId;
use lq_core::units::Length;

/// Material, length, and effective diameter of a pipeline of arbitrary
/// cross-section.
///
/// The diameter is resolved once at construction through the section's
/// hydraulic-diameter hook. The pipeline is an independent data object: it
/// never touches the property tables.
#[derive(Debug, Clone)]
pub struct Pipeline {
    material: MaterialId,
    length: Length,
    diameter: Length,
}

impl Pipeline {
    pub fn new(
        material: MaterialId,
        length: Length,
        section: &dyn CrossSection,
    ) -> ComponentResult<Self> {
        check_positive(length.value, "length must be positive")?;
        let diameter = section.hydraulic_diameter();
        check_positive(diameter.value, "effective diameter must be positive")?;
        Ok(Self {
            material,
            length,
            diameter,
        })
    }

    pub fn material(&self) -> MaterialId {
        self.material
    }

    pub fn length(&self) -> Length {
        self.length
    }

    /// Effective diameter.
    pub fn diameter(&self) -> Length {
        self.diameter
    }
}
