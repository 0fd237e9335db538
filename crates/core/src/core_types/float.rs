//! Numeric precision parameter shared by every unit type.
//!
//! Callers pick `f32` or `f64` once and thread it through every quantity in a
//! computation. Anything `nalgebra` accepts as a real scalar qualifies, which
//! keeps the unit types interoperable with the linear algebra used elsewhere.

use nalgebra::RealField;
use tracing::warn;

use crate::error::QuantityError;

/// Floating-point representation underlying a unit value.
///
/// Blanket-implemented for every `Copy` real field, i.e. `f32` and `f64`.
pub trait Float: RealField + Copy {
    /// Bring a fixed `f64` conversion constant into this precision.
    #[inline]
    #[must_use]
    fn from_factor(factor: f64) -> Self {
        nalgebra::convert(factor)
    }
}

impl<T: RealField + Copy> Float for T {}

/// Default number of decimals used when rendering a quantity as text.
pub(crate) const DEFAULT_PRECISION: usize = 6;

/// Divide, refusing a zero denominator with `error`.
///
/// A quotient of two finite operands that overflows the precision (e.g. a
/// subnormal divisor) is refused with [`QuantityError::Overflow`]. Operands
/// that are already NaN or infinite are passed through untouched.
pub(crate) fn checked_div<T: Float>(
    numerator: T,
    denominator: T,
    error: QuantityError,
) -> Result<T, QuantityError> {
    if denominator == T::zero() {
        warn!(%error, "refusing division by zero");
        return Err(error);
    }
    let quotient = numerator / denominator;
    if numerator.is_finite() && denominator.is_finite() && !quotient.is_finite() {
        warn!(%numerator, %denominator, "refusing division that overflows");
        return Err(QuantityError::Overflow);
    }
    Ok(quotient)
}
