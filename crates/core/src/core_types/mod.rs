//! Core types: numeric precision, unit families and derived quantities

pub mod area;
pub mod density;
pub mod float;
pub mod force;
pub mod length;
pub mod mass;
pub mod scale;
pub mod unit;
pub mod volume;

pub use area::SurfaceArea;
pub use density::{density, Density, MassPerLength, STEEL_KG_PER_CUBIC_METRE};
pub use float::Float;
pub use force::{Force, ForceUnit, Kilonewton, Newton, NEWTONS_PER_KILONEWTON};
pub use length::{Length, LengthUnit, Metre, Millimetre, MILLIMETRES_PER_METRE};
pub use mass::{
    Gram, Kilogram, Mass, MassUnit, Tonne, GRAMS_PER_KILOGRAM, GRAMS_PER_TONNE,
    KILOGRAMS_PER_TONNE,
};
pub use scale::Scale;
pub use unit::Unit;
pub use volume::Volume;
