//! Dimensions and properties of a rolled universal section.
//!
//! Lengths are tagged with one length unit and the total mass with one mass
//! unit. The record never converts: callers bring tabulated values into the
//! units they work in before building it, so every length field agrees with
//! every other from construction onwards.
//!
//! The remaining engineering properties (thicknesses, radii, per-metre and
//! per-tonne ratios) are not modelled dimensionally and stay raw scalars.

use serde::{Deserialize, Serialize};

use crate::core_types::{Length, Mass, MassPerLength};
use crate::error::QuantityError;

/// Radius of gyration about the major (y-y) and minor (z-z) axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RadiusOfGyration<T> {
    pub yy: T,
    pub zz: T,
}

/// Tabulated scalar properties of a section, as read from reference data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGeometry<T> {
    pub mass_per_metre_length: T,
    pub cross_sectional_area: T,
    pub surface_area_per_metre: T,
    pub surface_area_per_tonne: T,
    pub web_thickness: T,
    pub flange_thickness: T,
    pub root_radius: T,
    pub depth_between_fillets: T,
    pub end_clearance_for_detailing: T,
    pub longitudinal_notch_dimension: T,
    pub vertical_notch_dimension: T,
    pub radius_of_gyration: RadiusOfGyration<T>,
}

/// Typed dimensions plus raw properties of one section.
///
/// Immutable once built; all accessors return copies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "L: Serialize, M: Serialize, L::Value: Serialize",
    deserialize = "L: Deserialize<'de>, M: Deserialize<'de>, L::Value: Deserialize<'de>"
))]
pub struct DimensionsAndProperties<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    depth: L,
    width: L,
    length: L,
    total_mass: M,
    #[serde(flatten)]
    geometry: SectionGeometry<L::Value>,
}

impl<L, M> DimensionsAndProperties<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    #[must_use]
    pub fn new(
        depth: L,
        width: L,
        length: L,
        total_mass: M,
        geometry: SectionGeometry<L::Value>,
    ) -> Self {
        DimensionsAndProperties {
            depth,
            width,
            length,
            total_mass,
            geometry,
        }
    }

    /// Overall depth of the section, h.
    pub fn depth(&self) -> L {
        self.depth
    }

    /// Overall width of the section, b.
    pub fn width(&self) -> L {
        self.width
    }

    /// Member length.
    pub fn length(&self) -> L {
        self.length
    }

    pub fn total_mass(&self) -> M {
        self.total_mass
    }

    pub fn geometry(&self) -> &SectionGeometry<L::Value> {
        &self.geometry
    }

    /// Mass per unit length implied by the total mass over the member length.
    ///
    /// # Errors
    /// [`QuantityError::ZeroLength`] for a member of zero length.
    /// [`QuantityError::Overflow`] if the ratio overflows.
    pub fn linear_mass(&self) -> Result<MassPerLength<M, L>, QuantityError> {
        MassPerLength::new(self.total_mass, self.length)
    }
}
