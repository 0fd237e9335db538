//! Ratios of a mass to a geometric quantity.
//!
//! Both types carry the mass unit and the length unit in their type, so a
//! kg/m³ density never meets a t/mm³ density without an explicit
//! [`Density::convert`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

use super::float::{checked_div, Float, DEFAULT_PRECISION};
use super::length::{Length, Metre};
use super::mass::{Kilogram, Mass};
use super::volume::Volume;
use crate::error::QuantityError;

/// Design density of structural steel in kg/m³.
pub const STEEL_KG_PER_CUBIC_METRE: f64 = 7850.0;

/// Mass per cubic length, e.g. kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "M::Value: Serialize",
    deserialize = "M::Value: Deserialize<'de>"
))]
pub struct Density<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    value: M::Value,
    #[serde(skip)]
    units: PhantomData<(M, L)>,
}

/// Density of `mass` spread over `volume`.
///
/// # Errors
/// [`QuantityError::ZeroVolume`] if `volume` is zero, and
/// [`QuantityError::Overflow`] if the quotient of finite operands overflows.
/// The result is never a silent infinity or NaN produced by the division
/// itself.
pub fn density<M, L>(mass: M, volume: Volume<L>) -> Result<Density<M, L>, QuantityError>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    Density::new(mass, volume)
}

impl<M, L> Density<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    /// Steel, 7850 kg/m³, the usual design value.
    #[must_use]
    pub fn steel() -> Density<M, L> {
        let kg_per_m3 = Density::<Kilogram<M::Value>, Metre<M::Value>>::from_value(
            <M::Value as Float>::from_factor(STEEL_KG_PER_CUBIC_METRE),
        );
        kg_per_m3.convert()
    }

    /// Density of `mass` spread over `volume`.
    ///
    /// # Errors
    /// [`QuantityError::ZeroVolume`] if `volume` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn new(mass: M, volume: Volume<L>) -> Result<Self, QuantityError> {
        checked_div(mass.value(), volume.value(), QuantityError::ZeroVolume).map(Self::from_value)
    }

    /// Tag a raw value already expressed in `M` per cubic `L`.
    #[inline]
    #[must_use]
    pub const fn from_value(value: M::Value) -> Self {
        Density {
            value,
            units: PhantomData,
        }
    }

    /// Get the raw value in `M` per cubic `L`
    #[inline]
    #[must_use]
    pub fn value(self) -> M::Value {
        self.value
    }

    /// Mass held by `volume` of material at this density.
    #[must_use]
    pub fn mass_of(self, volume: Volume<L>) -> M {
        M::from_value(self.value * volume.value())
    }

    /// Express the same density in `M2` per cubic `L2`.
    #[must_use]
    pub fn convert<M2, L2>(self) -> Density<M2, L2>
    where
        M2: Mass<Value = M::Value>,
        L2: Length<Value = M::Value>,
    {
        let per_volume = L::KIND.scale_to(L2::KIND).cubed().inverse();
        let mass = M::KIND.scale_to(M2::KIND);
        Density::from_value(mass.apply(per_volume.apply(self.value)))
    }
}

impl<M, L> Mul<Volume<L>> for Density<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    type Output = M;
    fn mul(self, rhs: Volume<L>) -> M {
        self.mass_of(rhs)
    }
}

impl<M, L> fmt::Display for Density<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "{:.*} {}(s)/Cubic {}(s)",
            precision,
            self.value,
            M::NAME,
            L::NAME
        )
    }
}

/// Mass per unit length, e.g. the kg/m figure tabulated for rolled sections.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "M::Value: Serialize",
    deserialize = "M::Value: Deserialize<'de>"
))]
pub struct MassPerLength<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    value: M::Value,
    #[serde(skip)]
    units: PhantomData<(M, L)>,
}

impl<M, L> MassPerLength<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    /// `mass` spread evenly over `length`.
    ///
    /// # Errors
    /// [`QuantityError::ZeroLength`] if `length` is zero.
    /// [`QuantityError::Overflow`] if the quotient overflows.
    pub fn new(mass: M, length: L) -> Result<Self, QuantityError> {
        checked_div(mass.value(), length.value(), QuantityError::ZeroLength).map(Self::from_value)
    }

    /// Tag a raw value already expressed in `M` per `L`.
    #[inline]
    #[must_use]
    pub const fn from_value(value: M::Value) -> Self {
        MassPerLength {
            value,
            units: PhantomData,
        }
    }

    /// Get the raw value in `M` per `L`
    #[inline]
    #[must_use]
    pub fn value(self) -> M::Value {
        self.value
    }

    /// Total mass of a member of the given `length`.
    #[must_use]
    pub fn mass_over(self, length: L) -> M {
        M::from_value(self.value * length.value())
    }

    /// Express the same ratio in `M2` per `L2`.
    #[must_use]
    pub fn convert<M2, L2>(self) -> MassPerLength<M2, L2>
    where
        M2: Mass<Value = M::Value>,
        L2: Length<Value = M::Value>,
    {
        let per_length = L::KIND.scale_to(L2::KIND).inverse();
        let mass = M::KIND.scale_to(M2::KIND);
        MassPerLength::from_value(mass.apply(per_length.apply(self.value)))
    }
}

impl<M, L> Mul<L> for MassPerLength<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    type Output = M;
    fn mul(self, rhs: L) -> M {
        self.mass_over(rhs)
    }
}

impl<M, L> fmt::Display for MassPerLength<M, L>
where
    M: Mass,
    L: Length<Value = M::Value>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*} {}(s)/{}", precision, self.value, M::NAME, L::NAME)
    }
}
