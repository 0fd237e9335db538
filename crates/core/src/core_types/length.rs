//! Length family: `Metre` and `Millimetre`.

use serde::{Deserialize, Serialize};

use super::float::Float;
use super::scale::Scale;
use super::unit::{unit_type, Unit};

/// Millimetres in one metre.
pub const MILLIMETRES_PER_METRE: f64 = 1000.0;

/// Closed set of length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Metre,
    Millimetre,
}

impl LengthUnit {
    /// Direct factor from `self` to `to`.
    #[must_use]
    pub fn scale_to(self, to: LengthUnit) -> Scale {
        match (self, to) {
            (LengthUnit::Metre, LengthUnit::Metre)
            | (LengthUnit::Millimetre, LengthUnit::Millimetre) => Scale::Identity,
            (LengthUnit::Metre, LengthUnit::Millimetre) => Scale::Multiply(MILLIMETRES_PER_METRE),
            (LengthUnit::Millimetre, LengthUnit::Metre) => Scale::Divide(MILLIMETRES_PER_METRE),
        }
    }
}

/// Any unit of length.
///
/// Sealed: only [`Metre`] and [`Millimetre`] implement it.
pub trait Length: Unit {
    /// Which member of the family this is.
    const KIND: LengthUnit;

    /// Convert to another length unit of the same precision.
    #[inline]
    #[must_use]
    fn convert<U>(self) -> U
    where
        U: Length<Value = Self::Value>,
    {
        U::from_value(Self::KIND.scale_to(U::KIND).apply(self.value()))
    }
}

unit_type!(
    /// The metric base unit of length.
    Metre,
    "Metre",
    "m",
    ZeroLength
);

unit_type!(
    /// One thousandth of a metre.
    Millimetre,
    "Millimetre",
    "mm",
    ZeroLength
);

impl<T: Float> Length for Metre<T> {
    const KIND: LengthUnit = LengthUnit::Metre;
}

impl<T: Float> Length for Millimetre<T> {
    const KIND: LengthUnit = LengthUnit::Millimetre;
}

impl<T: Float> Metre<T> {
    /// Convert to millimetres
    #[inline]
    #[must_use]
    pub fn to_millimetre(self) -> Millimetre<T> {
        self.convert()
    }
}

impl<T: Float> Millimetre<T> {
    /// Convert to metres
    #[inline]
    #[must_use]
    pub fn to_metre(self) -> Metre<T> {
        self.convert()
    }
}
