//! Designation-keyed collection of section records.

use std::collections::hash_map;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{SectionCategory, SteelSection};
use crate::core_types::{Length, Mass};
use crate::error::SectionError;

/// Sections of one unit system, looked up by designation.
#[derive(Debug, Clone, Default)]
pub struct SectionTable<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    sections: FxHashMap<String, SteelSection<L, M>>,
}

impl<L, M> SectionTable<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    #[must_use]
    pub fn new() -> Self {
        SectionTable {
            sections: FxHashMap::default(),
        }
    }

    /// Build a table, rejecting repeated designations.
    ///
    /// # Errors
    /// [`SectionError::DuplicateDesignation`] on the first repeat.
    pub fn from_sections<I>(sections: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = SteelSection<L, M>>,
    {
        let mut table = Self::new();
        for section in sections {
            table.insert(section)?;
        }
        debug!(count = table.len(), "Built section table");
        Ok(table)
    }

    /// Add a section.
    ///
    /// # Errors
    /// [`SectionError::DuplicateDesignation`] if the designation is taken;
    /// the table is left unchanged.
    pub fn insert(&mut self, section: SteelSection<L, M>) -> Result<(), SectionError> {
        let designation = section.designation().to_owned();
        if self.sections.contains_key(&designation) {
            return Err(SectionError::DuplicateDesignation(designation));
        }
        self.sections.insert(designation, section);
        Ok(())
    }

    /// Look up a section by designation.
    ///
    /// # Errors
    /// [`SectionError::DesignationNotFound`] if no such section exists.
    pub fn get(&self, designation: &str) -> Result<&SteelSection<L, M>, SectionError> {
        self.sections
            .get(designation)
            .ok_or_else(|| SectionError::DesignationNotFound(designation.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All sections, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SteelSection<L, M>> {
        self.sections.values()
    }

    /// Sections of one category.
    pub fn by_category(
        &self,
        category: SectionCategory,
    ) -> impl Iterator<Item = &SteelSection<L, M>> {
        self.iter().filter(move |s| s.category() == category)
    }

    /// Designations in ascending order.
    pub fn designations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<'a, L, M> IntoIterator for &'a SectionTable<L, M>
where
    L: Length,
    M: Mass<Value = L::Value>,
{
    type Item = &'a SteelSection<L, M>;
    type IntoIter = hash_map::Values<'a, String, SteelSection<L, M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Kilogram, Metre};
    use crate::sections::{DimensionsAndProperties, SectionGeometry};

    type Section = SteelSection<Metre<f64>, Kilogram<f64>>;

    fn section(designation: &str, category: SectionCategory) -> Section {
        let props = DimensionsAndProperties::new(
            Metre::new(0.3),
            Metre::new(0.15),
            Metre::new(1.0),
            Kilogram::new(40.0),
            SectionGeometry::default(),
        );
        SteelSection::new(designation, category, false, props)
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = SectionTable::new();
        table
            .insert(section("305x165x40", SectionCategory::UniversalBeam))
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("305x165x40").unwrap().category(),
            SectionCategory::UniversalBeam
        );
        assert_eq!(
            table.get("305x165x41").unwrap_err(),
            SectionError::DesignationNotFound("305x165x41".into())
        );
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let err = SectionTable::from_sections([
            section("203x203x46", SectionCategory::UniversalColumn),
            section("203x203x46", SectionCategory::UniversalColumn),
        ])
        .unwrap_err();
        assert_eq!(err, SectionError::DuplicateDesignation("203x203x46".into()));
    }

    #[test]
    fn test_by_category_and_designations() {
        let table = SectionTable::from_sections([
            section("305x165x40", SectionCategory::UniversalBeam),
            section("203x203x46", SectionCategory::UniversalColumn),
            section("203x133x25", SectionCategory::UniversalBeam),
        ])
        .unwrap();
        assert_eq!(
            table.by_category(SectionCategory::UniversalBeam).count(),
            2
        );
        assert_eq!(
            table
                .by_category(SectionCategory::UniversalBearingPile)
                .count(),
            0
        );
        assert_eq!(
            table.designations(),
            vec!["203x133x25", "203x203x46", "305x165x40"]
        );
        assert!(!table.is_empty());
        let mut seen = Vec::new();
        for section in &table {
            seen.push(section.designation());
        }
        assert_eq!(seen.len(), 3);
    }
}
