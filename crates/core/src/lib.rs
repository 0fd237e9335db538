//! Girder Core Library
//!
//! Strongly-typed quantities for structural engineering: length, mass, force,
//! area, volume and density, plus typed records for standard rolled steel
//! sections (universal beams, columns and bearing piles).
//!
//! Units are part of the type. Numeric precision (`f32` or `f64`) stays the
//! caller's choice and is threaded through every unit as a type parameter.
//!
//! ## Units and conversions
//!
//! ```
//! use girder_core::{Kilogram, Metre, Millimetre, Tonne};
//!
//! let span = Metre::new(7.5_f64);
//! assert_eq!(span.to_millimetre(), Millimetre::new(7500.0));
//!
//! let mass = Tonne::new(1.0_f64);
//! assert_eq!(mass.to_kilogram(), Kilogram::new(1000.0));
//! assert_eq!(mass.to_string(), "1.000000 Tonne(s)");
//! ```
//!
//! ## Derived quantities keep their base unit
//!
//! ```
//! use girder_core::{density, Kilogram, Metre, QuantityError, Volume};
//!
//! let rho = density(Kilogram::new(1000.0_f64), Volume::<Metre<f64>>::new(1.0)).unwrap();
//! assert_eq!(rho.value(), 1000.0);
//!
//! let empty = density(Kilogram::new(5.0_f64), Volume::<Metre<f64>>::new(0.0));
//! assert_eq!(empty, Err(QuantityError::ZeroVolume));
//! ```
//!
//! ## Rejected at compile time
//!
//! Millimetres and kilograms cannot be added:
//!
//! ```compile_fail
//! use girder_core::{Kilogram, Millimetre};
//!
//! let _ = Millimetre::new(1.0_f64) + Kilogram::new(1.0_f64);
//! ```
//!
//! Volumes in different length units cannot be combined without a conversion:
//!
//! ```compile_fail
//! use girder_core::{Metre, Millimetre, Volume};
//!
//! let a = Volume::<Metre<f64>>::new(1.0);
//! let b = Volume::<Millimetre<f64>>::new(1.0);
//! let _ = a + b;
//! ```
//!
//! A mass unit is not a length:
//!
//! ```compile_fail
//! use girder_core::{Kilogram, Volume};
//!
//! let _ = Volume::<Kilogram<f64>>::new(1.0);
//! ```
//!
//! Units only wrap floating-point values:
//!
//! ```compile_fail
//! use girder_core::Metre;
//!
//! let _ = Metre::<i32>::default();
//! ```
//!
//! Densities are bound to both units:
//!
//! ```compile_fail
//! use girder_core::{Density, Kilogram, Metre, Millimetre, Tonne};
//!
//! let a = Density::<Kilogram<f64>, Metre<f64>>::from_value(7850.0);
//! let b = Density::<Tonne<f64>, Millimetre<f64>>::from_value(7.85e-9);
//! let _ = a == b;
//! ```
//!
//! The unit families are closed:
//!
//! ```compile_fail
//! use girder_core::{Length, LengthUnit, Unit};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
//! struct Furlong(f64);
//!
//! impl std::fmt::Display for Furlong {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "{} furlong", self.0)
//!     }
//! }
//!
//! impl Unit for Furlong {
//!     type Value = f64;
//!     const NAME: &'static str = "Furlong";
//!     const SYMBOL: &'static str = "fur";
//!     fn from_value(value: f64) -> Self { Furlong(value) }
//!     fn value(self) -> f64 { self.0 }
//! }
//!
//! impl Length for Furlong {
//!     const KIND: LengthUnit = LengthUnit::Metre;
//! }
//! ```

// Numeric precision, unit families and derived quantities
pub mod core_types;

// Domain errors
pub mod error;

// Standard steel section records
pub mod sections;

// Re-export core types
pub use core_types::{density, Density, MassPerLength, SurfaceArea, Volume};
pub use core_types::{Float, Scale, Unit};
pub use core_types::{Force, ForceUnit, Kilonewton, Newton};
pub use core_types::{Gram, Kilogram, Mass, MassUnit, Tonne};
pub use core_types::{Length, LengthUnit, Metre, Millimetre};

// Re-export errors
pub use error::{QuantityError, SectionError};

// Re-export section records
pub use sections::{
    DimensionsAndProperties, RadiusOfGyration, SectionCategory, SectionGeometry, SectionTable,
    SteelSection,
};
