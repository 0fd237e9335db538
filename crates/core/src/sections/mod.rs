//! Standard rolled steel sections.
//!
//! Universal beams, universal columns and universal bearing piles share one
//! data shape and differ only in their category. Reference tables are loaded
//! elsewhere; this module only holds the records in typed units.

pub mod catalogue;
pub mod properties;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::{Length, Mass};

pub use catalogue::SectionTable;
pub use properties::{DimensionsAndProperties, RadiusOfGyration, SectionGeometry};

/// Closed set of universal section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionCategory {
    #[serde(rename = "UB")]
    UniversalBeam,
    #[serde(rename = "UC")]
    UniversalColumn,
    #[serde(rename = "UBP")]
    UniversalBearingPile,
}

impl SectionCategory {
    /// Every category, in table order.
    pub const ALL: [SectionCategory; 3] = [
        SectionCategory::UniversalBeam,
        SectionCategory::UniversalColumn,
        SectionCategory::UniversalBearingPile,
    ];

    /// Short designation prefix used in section tables.
    pub fn abbreviation(self) -> &'static str {
        match self {
            SectionCategory::UniversalBeam => "UB",
            SectionCategory::UniversalColumn => "UC",
            SectionCategory::UniversalBearingPile => "UBP",
        }
    }
}

impl fmt::Display for SectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SectionCategory::UniversalBeam => "Universal Beam",
            SectionCategory::UniversalColumn => "Universal Column",
            SectionCategory::UniversalBearingPile => "Universal Bearing Pile",
        };
        f.write_str(label)
    }
}

/// One standard section, e.g. UB 203x133x25.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "L: Serialize, M: Serialize, L::Value: Serialize",
    deserialize = "L: Deserialize<'de>, M: Deserialize<'de>, L::Value: Deserialize<'de>"
))]
pub struct SteelSection<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    designation: String,
    category: SectionCategory,
    is_non_standard: bool,
    properties: DimensionsAndProperties<L, M>,
}

impl<L, M> SteelSection<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    pub fn new(
        designation: impl Into<String>,
        category: SectionCategory,
        is_non_standard: bool,
        properties: DimensionsAndProperties<L, M>,
    ) -> Self {
        let designation = designation.into();
        debug!(
            %designation,
            %category,
            length_unit = L::NAME,
            mass_unit = M::NAME,
            "Building section record"
        );
        SteelSection {
            designation,
            category,
            is_non_standard,
            properties,
        }
    }

    pub fn universal_beam(
        designation: impl Into<String>,
        is_non_standard: bool,
        properties: DimensionsAndProperties<L, M>,
    ) -> Self {
        Self::new(
            designation,
            SectionCategory::UniversalBeam,
            is_non_standard,
            properties,
        )
    }

    pub fn universal_column(
        designation: impl Into<String>,
        is_non_standard: bool,
        properties: DimensionsAndProperties<L, M>,
    ) -> Self {
        Self::new(
            designation,
            SectionCategory::UniversalColumn,
            is_non_standard,
            properties,
        )
    }

    pub fn universal_bearing_pile(
        designation: impl Into<String>,
        is_non_standard: bool,
        properties: DimensionsAndProperties<L, M>,
    ) -> Self {
        Self::new(
            designation,
            SectionCategory::UniversalBearingPile,
            is_non_standard,
            properties,
        )
    }

    /// Serial size designation, e.g. `"203x133x25"`.
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn category(&self) -> SectionCategory {
        self.category
    }

    /// Whether the section is uncommon in UK practice.
    pub fn is_non_standard(&self) -> bool {
        self.is_non_standard
    }

    pub fn properties(&self) -> &DimensionsAndProperties<L, M> {
        &self.properties
    }
}

impl<L, M> fmt::Display for SteelSection<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}
