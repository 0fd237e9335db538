//! Mass family: `Gram`, `Kilogram` and `Tonne`.
//!
//! Every ordered pair has its own direct factor, so converting gram to tonne
//! costs one rounding rather than two through kilograms.

use serde::{Deserialize, Serialize};

use super::float::Float;
use super::scale::Scale;
use super::unit::{unit_type, Unit};

/// Grams in one kilogram.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Grams in one tonne.
pub const GRAMS_PER_TONNE: f64 = 1_000_000.0;

/// Kilograms in one tonne.
pub const KILOGRAMS_PER_TONNE: f64 = 1000.0;

/// Closed set of mass units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Tonne,
}

impl MassUnit {
    /// Direct factor from `self` to `to`.
    #[must_use]
    pub fn scale_to(self, to: MassUnit) -> Scale {
        match (self, to) {
            (MassUnit::Gram, MassUnit::Gram)
            | (MassUnit::Kilogram, MassUnit::Kilogram)
            | (MassUnit::Tonne, MassUnit::Tonne) => Scale::Identity,
            (MassUnit::Gram, MassUnit::Kilogram) => Scale::Divide(GRAMS_PER_KILOGRAM),
            (MassUnit::Kilogram, MassUnit::Gram) => Scale::Multiply(GRAMS_PER_KILOGRAM),
            (MassUnit::Gram, MassUnit::Tonne) => Scale::Divide(GRAMS_PER_TONNE),
            (MassUnit::Tonne, MassUnit::Gram) => Scale::Multiply(GRAMS_PER_TONNE),
            (MassUnit::Kilogram, MassUnit::Tonne) => Scale::Divide(KILOGRAMS_PER_TONNE),
            (MassUnit::Tonne, MassUnit::Kilogram) => Scale::Multiply(KILOGRAMS_PER_TONNE),
        }
    }
}

/// Any unit of mass.
///
/// Sealed: only [`Gram`], [`Kilogram`] and [`Tonne`] implement it.
pub trait Mass: Unit {
    /// Which member of the family this is.
    const KIND: MassUnit;

    /// Convert to another mass unit of the same precision.
    #[inline]
    #[must_use]
    fn convert<U>(self) -> U
    where
        U: Mass<Value = Self::Value>,
    {
        U::from_value(Self::KIND.scale_to(U::KIND).apply(self.value()))
    }
}

unit_type!(
    /// One thousandth of a kilogram.
    Gram,
    "Gram",
    "g",
    ZeroMass
);

unit_type!(
    /// The SI base unit of mass.
    Kilogram,
    "Kilogram",
    "kg",
    ZeroMass
);

unit_type!(
    /// Metric tonne (1000 kg).
    Tonne,
    "Tonne",
    "t",
    ZeroMass
);

impl<T: Float> Mass for Gram<T> {
    const KIND: MassUnit = MassUnit::Gram;
}

impl<T: Float> Mass for Kilogram<T> {
    const KIND: MassUnit = MassUnit::Kilogram;
}

impl<T: Float> Mass for Tonne<T> {
    const KIND: MassUnit = MassUnit::Tonne;
}

impl<T: Float> Gram<T> {
    /// Convert to kilograms
    #[inline]
    #[must_use]
    pub fn to_kilogram(self) -> Kilogram<T> {
        self.convert()
    }

    /// Convert to tonnes
    #[inline]
    #[must_use]
    pub fn to_tonne(self) -> Tonne<T> {
        self.convert()
    }
}

impl<T: Float> Kilogram<T> {
    /// Convert to grams
    #[inline]
    #[must_use]
    pub fn to_gram(self) -> Gram<T> {
        self.convert()
    }

    /// Convert to tonnes
    #[inline]
    #[must_use]
    pub fn to_tonne(self) -> Tonne<T> {
        self.convert()
    }
}

impl<T: Float> Tonne<T> {
    /// Convert to grams
    #[inline]
    #[must_use]
    pub fn to_gram(self) -> Gram<T> {
        self.convert()
    }

    /// Convert to kilograms
    #[inline]
    #[must_use]
    pub fn to_kilogram(self) -> Kilogram<T> {
        self.convert()
    }
}
