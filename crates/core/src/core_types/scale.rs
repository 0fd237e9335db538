//! Fixed multiplicative factors between two units of one family.

use super::float::Float;

/// How to rescale a raw value from one unit to another.
///
/// Factors are exact powers of ten. Converting towards the smaller unit
/// multiplies and converting back divides by the same constant, so a round
/// trip costs at most one rounding in each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Source and target are the same unit.
    Identity,
    /// Multiply the raw value by the factor.
    Multiply(f64),
    /// Divide the raw value by the factor.
    Divide(f64),
}

impl Scale {
    /// Rescale `value`, returning a new value. The input is never touched.
    #[inline]
    #[must_use]
    pub fn apply<T: Float>(self, value: T) -> T {
        match self {
            Scale::Identity => value,
            Scale::Multiply(factor) => value * T::from_factor(factor),
            Scale::Divide(factor) => value / T::from_factor(factor),
        }
    }

    /// The reverse rescaling.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Scale::Identity => Scale::Identity,
            Scale::Multiply(factor) => Scale::Divide(factor),
            Scale::Divide(factor) => Scale::Multiply(factor),
        }
    }

    /// Rescaling for a quantity of dimension length².
    #[must_use]
    pub fn squared(self) -> Self {
        match self {
            Scale::Identity => Scale::Identity,
            Scale::Multiply(factor) => Scale::Multiply(factor * factor),
            Scale::Divide(factor) => Scale::Divide(factor * factor),
        }
    }

    /// Rescaling for a quantity of dimension length³.
    #[must_use]
    pub fn cubed(self) -> Self {
        match self {
            Scale::Identity => Scale::Identity,
            Scale::Multiply(factor) => Scale::Multiply(factor * factor * factor),
            Scale::Divide(factor) => Scale::Divide(factor * factor * factor),
        }
    }

    /// The effective multiplier as a plain number.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Scale::Identity => 1.0,
            Scale::Multiply(factor) => factor,
            Scale::Divide(factor) => 1.0 / factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Scale::Identity.apply(2.5_f64), 2.5);
        assert_eq!(Scale::Multiply(1000.0).apply(2.5_f64), 2500.0);
        assert_eq!(Scale::Divide(1000.0).apply(2500.0_f32), 2.5);
    }

    #[test]
    fn test_powers_stay_exact() {
        assert_eq!(Scale::Multiply(1000.0).squared(), Scale::Multiply(1e6));
        assert_eq!(Scale::Divide(1000.0).cubed(), Scale::Divide(1e9));
        assert_eq!(Scale::Identity.cubed(), Scale::Identity);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(Scale::Multiply(10.0).inverse(), Scale::Divide(10.0));
        assert_eq!(Scale::Divide(10.0).inverse().inverse(), Scale::Divide(10.0));
        assert_eq!(Scale::Multiply(1000.0).inverse().factor(), 0.001);
    }
}
