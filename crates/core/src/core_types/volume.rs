//! Volumes (length³) bound to the length unit they were measured in.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::area::SurfaceArea;
use super::float::{checked_div, DEFAULT_PRECISION};
use super::length::Length;
use crate::error::QuantityError;

/// A volume in cubic `L`.
///
/// `Volume<Metre<f64>>` and `Volume<Millimetre<f64>>` cannot be added or
/// compared; normalise one with [`Volume::convert`] first.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "L::Value: Serialize",
    deserialize = "L::Value: Deserialize<'de>"
))]
pub struct Volume<L: Length> {
    value: L::Value,
    #[serde(skip)]
    unit: PhantomData<L>,
}

impl<L: Length> Volume<L> {
    /// Create a volume from a raw value already expressed in cubic `L`.
    #[inline]
    #[must_use]
    pub const fn new(value: L::Value) -> Self {
        Volume {
            value,
            unit: PhantomData,
        }
    }

    /// Get the raw value in cubic `L`
    #[inline]
    #[must_use]
    pub fn value(self) -> L::Value {
        self.value
    }

    /// Volume of a `width` × `depth` × `length` box.
    #[must_use]
    pub fn from_cuboid(width: L, depth: L, length: L) -> Self {
        Self::new(width.value() * depth.value() * length.value())
    }

    /// Volume of a solid cylinder.
    #[must_use]
    pub fn from_cylinder(diameter: L, length: L) -> Self {
        SurfaceArea::from_circle(diameter) * length
    }

    /// Prism of constant cross-section `area` extruded over `length`.
    #[must_use]
    pub fn from_area(area: SurfaceArea<L>, length: L) -> Self {
        area * length
    }

    /// Express the same volume in cubic `U`.
    #[must_use]
    pub fn convert<U>(self) -> Volume<U>
    where
        U: Length<Value = L::Value>,
    {
        Volume::new(L::KIND.scale_to(U::KIND).cubed().apply(self.value))
    }

    /// The length that `area` must be extruded over to give this volume.
    ///
    /// # Errors
    /// [`QuantityError::ZeroArea`] if `area` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn per_area(self, area: SurfaceArea<L>) -> Result<L, QuantityError> {
        checked_div(self.value, area.value(), QuantityError::ZeroArea).map(L::from_value)
    }

    /// Average cross-sectional area over `length`.
    ///
    /// # Errors
    /// [`QuantityError::ZeroLength`] if `length` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn per_length(self, length: L) -> Result<SurfaceArea<L>, QuantityError> {
        checked_div(self.value, length.value(), QuantityError::ZeroLength).map(SurfaceArea::new)
    }
}

impl<L: Length> Add for Volume<L> {
    type Output = Volume<L>;
    fn add(self, rhs: Volume<L>) -> Volume<L> {
        Volume::new(self.value + rhs.value)
    }
}

impl<L: Length> Sub for Volume<L> {
    type Output = Volume<L>;
    fn sub(self, rhs: Volume<L>) -> Volume<L> {
        Volume::new(self.value - rhs.value)
    }
}

impl<L: Length> fmt::Display for Volume<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*} Cubic {}(s)", precision, self.value, L::NAME)
    }
}
