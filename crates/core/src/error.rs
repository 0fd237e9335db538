//! Recoverable domain errors.
//!
//! Mixing units is rejected by the type checker and never reaches this
//! module. What remains are divisions whose result would be undefined and
//! lookups into section tables.

use thiserror::Error;

/// A derived quantity could not be formed because its divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Density of something with no volume.
    #[error("density is undefined for a zero volume")]
    ZeroVolume,
    /// Division by a zero area.
    #[error("cannot divide by a zero area")]
    ZeroArea,
    /// Division by a zero length, e.g. a per-metre ratio over no length.
    #[error("cannot divide by a zero length")]
    ZeroLength,
    /// Division by a zero mass, e.g. surface area per tonne of nothing.
    #[error("cannot divide by a zero mass")]
    ZeroMass,
    /// Division by a zero force, e.g. the ratio of two loads.
    #[error("cannot divide by a zero force")]
    ZeroForce,
    /// Both operands were finite but the quotient is not representable.
    #[error("division overflows the numeric precision")]
    Overflow,
}

/// Errors raised while assembling or querying section tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("no section with designation '{0}'")]
    DesignationNotFound(String),
    #[error("section '{0}' is already in the table")]
    DuplicateDesignation(String),
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            QuantityError::ZeroVolume.to_string(),
            "density is undefined for a zero volume"
        );
        assert_eq!(
            QuantityError::Overflow.to_string(),
            "division overflows the numeric precision"
        );
        assert_eq!(
            SectionError::DesignationNotFound("203x133x25".into()).to_string(),
            "no section with designation '203x133x25'"
        );
    }

    #[test]
    fn test_quantity_error_converts() {
        let err: SectionError = QuantityError::ZeroLength.into();
        assert_eq!(err, SectionError::Quantity(QuantityError::ZeroLength));
        assert_eq!(err.to_string(), "cannot divide by a zero length");
    }
}
