//! Areas (length²) bound to the length unit they were measured in.
//!
//! A `SurfaceArea<Metre<f64>>` and a `SurfaceArea<Millimetre<f64>>` are
//! different types. Adding or comparing them does not compile until one is
//! brought over with [`SurfaceArea::convert`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

use nalgebra::RealField;
use serde::{Deserialize, Serialize};

use super::float::{checked_div, Float, DEFAULT_PRECISION};
use super::length::{Length, LengthUnit};
use super::mass::{Mass, MassUnit};
use super::volume::Volume;
use crate::error::QuantityError;

/// An area in square `L`.
///
/// Used both for surface (coating) areas and cross-sectional areas.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "L::Value: Serialize",
    deserialize = "L::Value: Deserialize<'de>"
))]
pub struct SurfaceArea<L: Length> {
    value: L::Value,
    #[serde(skip)]
    unit: PhantomData<L>,
}

impl<L: Length> SurfaceArea<L> {
    /// Create an area from a raw value already expressed in square `L`.
    #[inline]
    #[must_use]
    pub const fn new(value: L::Value) -> Self {
        SurfaceArea {
            value,
            unit: PhantomData,
        }
    }

    /// Get the raw value in square `L`
    #[inline]
    #[must_use]
    pub fn value(self) -> L::Value {
        self.value
    }

    /// Area of a `width` × `depth` rectangle.
    #[must_use]
    pub fn from_rectangle(width: L, depth: L) -> Self {
        Self::new(width.value() * depth.value())
    }

    /// Area of a circle of the given diameter.
    #[must_use]
    pub fn from_circle(diameter: L) -> Self {
        let d = diameter.value();
        Self::new(<L::Value as RealField>::pi() * d * d / <L::Value as Float>::from_factor(4.0))
    }

    /// Lateral surface of a cuboid: perimeter of the `width` × `depth` face
    /// times `length`. End faces are not included.
    #[must_use]
    pub fn from_cuboid(width: L, depth: L, length: L) -> Self {
        let two = <L::Value as Float>::from_factor(2.0);
        let perimeter = two * width.value() + two * depth.value();
        Self::new(perimeter * length.value())
    }

    /// Lateral surface of a cylinder.
    #[must_use]
    pub fn from_cylinder(diameter: L, length: L) -> Self {
        Self::new(<L::Value as RealField>::pi() * diameter.value() * length.value())
    }

    /// Express the same area in square `U`.
    #[must_use]
    pub fn convert<U>(self) -> SurfaceArea<U>
    where
        U: Length<Value = L::Value>,
    {
        SurfaceArea::new(L::KIND.scale_to(U::KIND).squared().apply(self.value))
    }

    /// Area per unit length in the same unit, i.e. `L²/L = L`.
    ///
    /// # Errors
    /// [`QuantityError::ZeroLength`] if `length` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn per_length(self, length: L) -> Result<L, QuantityError> {
        checked_div(self.value, length.value(), QuantityError::ZeroLength).map(L::from_value)
    }

    /// Area per metre run as a plain m²/m ratio, whatever `L` is.
    ///
    /// # Errors
    /// [`QuantityError::ZeroLength`] if `length` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn per_metre(self, length: L) -> Result<L::Value, QuantityError> {
        let metres = match L::KIND {
            LengthUnit::Metre => length.value(),
            LengthUnit::Millimetre => LengthUnit::Millimetre
                .scale_to(LengthUnit::Metre)
                .apply(length.value()),
        };
        checked_div(self.square_metres(), metres, QuantityError::ZeroLength)
    }

    /// Area per tonne of `mass` as a plain m²/t ratio, whatever the units.
    ///
    /// # Errors
    /// [`QuantityError::ZeroMass`] if `mass` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn per_tonne<M>(self, mass: M) -> Result<L::Value, QuantityError>
    where
        M: Mass<Value = L::Value>,
    {
        let tonnes = M::KIND.scale_to(MassUnit::Tonne).apply(mass.value());
        checked_div(self.square_metres(), tonnes, QuantityError::ZeroMass)
    }

    fn square_metres(self) -> L::Value {
        match L::KIND {
            LengthUnit::Metre => self.value,
            LengthUnit::Millimetre => LengthUnit::Millimetre
                .scale_to(LengthUnit::Metre)
                .squared()
                .apply(self.value),
        }
    }
}

impl<L: Length> Add for SurfaceArea<L> {
    type Output = SurfaceArea<L>;
    fn add(self, rhs: SurfaceArea<L>) -> SurfaceArea<L> {
        SurfaceArea::new(self.value + rhs.value)
    }
}

impl<L: Length> Sub for SurfaceArea<L> {
    type Output = SurfaceArea<L>;
    fn sub(self, rhs: SurfaceArea<L>) -> SurfaceArea<L> {
        SurfaceArea::new(self.value - rhs.value)
    }
}

// Cross-type operation: area × length = volume
impl<L: Length> Mul<L> for SurfaceArea<L> {
    type Output = Volume<L>;
    fn mul(self, rhs: L) -> Volume<L> {
        Volume::new(self.value * rhs.value())
    }
}

impl<L: Length> fmt::Display for SurfaceArea<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*} Square {}(s)", precision, self.value, L::NAME)
    }
}
