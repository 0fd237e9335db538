//! Capability shared by every concrete unit type.
//!
//! Each unit (`Metre`, `Kilogram`, `Newton`, ...) is a single-field newtype
//! around its raw magnitude. The wrapper type is the only thing that says what
//! the number means: no implicit conversion ever crosses two wrapper types.
//!
//! `Unit` is sealed. Downstream code can be generic over "any length" or "any
//! mass" but can never add a member to a family.

use std::fmt;

use super::float::Float;

pub(crate) mod sealed {
    /// Restricts the unit traits to the types defined in this crate.
    pub trait Sealed {}
}

/// A concrete unit type wrapping a raw value of precision `Self::Value`.
pub trait Unit:
    sealed::Sealed + Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd
{
    /// Numeric precision of the wrapped value.
    type Value: Float;

    /// Human-readable unit name, e.g. `"Metre"`.
    const NAME: &'static str;

    /// Conventional symbol, e.g. `"m"`.
    const SYMBOL: &'static str;

    /// Tag a raw value with this unit.
    fn from_value(value: Self::Value) -> Self;

    /// The raw value in this unit.
    fn value(self) -> Self::Value;
}

/// Defines a concrete unit newtype with its constructor, accessor, text
/// rendering and same-unit arithmetic. `$zero` is the error returned when a
/// ratio is taken against a zero value of the unit.
macro_rules! unit_type {
    ($(#[$attr:meta])* $name:ident, $label:literal, $symbol:literal, $zero:ident) => {
        $(#[$attr])*
        #[derive(
            Debug, Clone, Copy, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name<T: $crate::core_types::float::Float>(T);

        impl<T: $crate::core_types::float::Float> $name<T> {
            #[doc = concat!("Create a new value in ", $label, "s.")]
            #[inline]
            #[must_use]
            pub const fn new(value: T) -> Self {
                $name(value)
            }

            /// Get the raw value
            #[inline]
            #[must_use]
            pub fn value(self) -> T {
                self.0
            }

            /// Dimensionless ratio of two values in the same unit.
            ///
            /// # Errors
            #[doc = concat!(
                "[`QuantityError::", stringify!($zero), "`](crate::QuantityError::",
                stringify!($zero), ") if `rhs` is zero."
            )]
            /// [`QuantityError::Overflow`](crate::QuantityError::Overflow) if the
            /// ratio overflows.
            pub fn ratio(self, rhs: $name<T>) -> Result<T, $crate::error::QuantityError> {
                $crate::core_types::float::checked_div(
                    self.0,
                    rhs.0,
                    $crate::error::QuantityError::$zero,
                )
            }
        }

        impl<T: $crate::core_types::float::Float> $crate::core_types::unit::sealed::Sealed
            for $name<T>
        {
        }

        impl<T: $crate::core_types::float::Float> $crate::core_types::unit::Unit for $name<T> {
            type Value = T;
            const NAME: &'static str = $label;
            const SYMBOL: &'static str = $symbol;

            #[inline]
            fn from_value(value: T) -> Self {
                $name(value)
            }

            #[inline]
            fn value(self) -> T {
                self.0
            }
        }

        impl<T: $crate::core_types::float::Float> From<T> for $name<T> {
            fn from(value: T) -> Self {
                $name(value)
            }
        }

        impl<T: $crate::core_types::float::Float> std::ops::Add for $name<T> {
            type Output = $name<T>;
            fn add(self, rhs: $name<T>) -> $name<T> {
                $name(self.0 + rhs.0)
            }
        }

        impl<T: $crate::core_types::float::Float> std::ops::Sub for $name<T> {
            type Output = $name<T>;
            fn sub(self, rhs: $name<T>) -> $name<T> {
                $name(self.0 - rhs.0)
            }
        }

        impl<T: $crate::core_types::float::Float> std::ops::Neg for $name<T> {
            type Output = $name<T>;
            fn neg(self) -> $name<T> {
                $name(-self.0)
            }
        }

        impl<T: $crate::core_types::float::Float> std::ops::Mul<T> for $name<T> {
            type Output = $name<T>;
            fn mul(self, rhs: T) -> $name<T> {
                $name(self.0 * rhs)
            }
        }

        // Scaling by a raw factor keeps IEEE semantics: dividing by zero gives
        // an infinite or NaN value. Use `ratio` for a checked quotient.
        impl<T: $crate::core_types::float::Float> std::ops::Div<T> for $name<T> {
            type Output = $name<T>;
            fn div(self, rhs: T) -> $name<T> {
                $name(self.0 / rhs)
            }
        }

        impl<T: $crate::core_types::float::Float> std::iter::Sum for $name<T> {
            fn sum<I: Iterator<Item = $name<T>>>(iter: I) -> $name<T> {
                iter.fold($name(T::zero()), |acc, x| acc + x)
            }
        }

        impl<T: $crate::core_types::float::Float> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let precision = f
                    .precision()
                    .unwrap_or($crate::core_types::float::DEFAULT_PRECISION);
                write!(f, "{:.*} {}(s)", precision, self.0, $label)
            }
        }
    };
}

pub(crate) use unit_type;
