//! Force family: `Newton` and `Kilonewton`.

use serde::{Deserialize, Serialize};

use super::float::Float;
use super::scale::Scale;
use super::unit::{unit_type, Unit};

/// Newtons in one kilonewton.
pub const NEWTONS_PER_KILONEWTON: f64 = 1000.0;

/// Closed set of force units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    Kilonewton,
}

impl ForceUnit {
    /// Direct factor from `self` to `to`.
    #[must_use]
    pub fn scale_to(self, to: ForceUnit) -> Scale {
        match (self, to) {
            (ForceUnit::Newton, ForceUnit::Newton)
            | (ForceUnit::Kilonewton, ForceUnit::Kilonewton) => Scale::Identity,
            (ForceUnit::Newton, ForceUnit::Kilonewton) => Scale::Divide(NEWTONS_PER_KILONEWTON),
            (ForceUnit::Kilonewton, ForceUnit::Newton) => Scale::Multiply(NEWTONS_PER_KILONEWTON),
        }
    }
}

/// Any unit of force.
///
/// Sealed: only [`Newton`] and [`Kilonewton`] implement it.
pub trait Force: Unit {
    /// Which member of the family this is.
    const KIND: ForceUnit;

    /// Convert to another force unit of the same precision.
    #[inline]
    #[must_use]
    fn convert<U>(self) -> U
    where
        U: Force<Value = Self::Value>,
    {
        U::from_value(Self::KIND.scale_to(U::KIND).apply(self.value()))
    }
}

unit_type!(
    /// The SI unit of force.
    Newton,
    "Newton",
    "N",
    ZeroForce
);

unit_type!(
    /// One thousand newtons; the usual unit for structural actions.
    Kilonewton,
    "Kilonewton",
    "kN",
    ZeroForce
);

impl<T: Float> Force for Newton<T> {
    const KIND: ForceUnit = ForceUnit::Newton;
}

impl<T: Float> Force for Kilonewton<T> {
    const KIND: ForceUnit = ForceUnit::Kilonewton;
}

impl<T: Float> Newton<T> {
    /// Convert to kilonewtons
    #[inline]
    #[must_use]
    pub fn to_kilonewton(self) -> Kilonewton<T> {
        self.convert()
    }
}

impl<T: Float> Kilonewton<T> {
    /// Convert to newtons
    #[inline]
    #[must_use]
    pub fn to_newton(self) -> Newton<T> {
        self.convert()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuantityError;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_to_kilonewton() {
        assert_eq!(Newton::new(1000.0_f64).to_kilonewton(), Kilonewton::new(1.0));
        assert_eq!(Newton::new(250.0_f32).to_kilonewton(), Kilonewton::new(0.25));
    }

    #[test]
    fn test_kilonewton_to_newton() {
        assert_eq!(Kilonewton::new(12.5_f64).to_newton(), Newton::new(12_500.0));
    }

    #[test]
    fn test_round_trip() {
        let kn = Kilonewton::new(0.3_f64);
        assert_relative_eq!(kn.to_newton().to_kilonewton().value(), 0.3, max_relative = 1e-15);
    }

    #[test]
    fn test_load_ratio() {
        let applied = Kilonewton::new(45.0_f64);
        assert_eq!(applied.ratio(Kilonewton::new(60.0)), Ok(0.75));
        assert_eq!(
            applied.ratio(Kilonewton::new(-0.0)),
            Err(QuantityError::ZeroForce)
        );
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(Newton::new(f64::NAN).to_kilonewton().value().is_nan());
        assert_eq!(
            Kilonewton::new(f64::INFINITY).to_newton().value(),
            f64::INFINITY
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilonewton::new(3.5_f64).to_string(), "3.500000 Kilonewton(s)");
        assert_eq!(format!("{:.0}", Newton::new(42.0_f64)), "42 Newton(s)");
    }
}
