// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple owned [`SectionModel`] storing header flags and row counts.

use smallvec::SmallVec;

use crate::SectionModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Section {
    header: bool,
    rows: usize,
}

/// A [`SectionModel`] that stores per-section geometry directly.
///
/// Useful when the host keeps its row data elsewhere and only needs to
/// describe shape, or as a snapshot of a host's geometry taken before a
/// structural change.
///
/// The index-based mutators panic on an out-of-bounds section, like the
/// corresponding `Vec` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTable {
    sections: SmallVec<[Section; 8]>,
}

impl SectionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the table has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Appends a section and returns its index.
    pub fn push_section(&mut self, header: bool, rows: usize) -> usize {
        self.sections.push(Section { header, rows });
        self.sections.len() - 1
    }

    /// Inserts a section at `section`, shifting later sections back.
    ///
    /// # Panics
    ///
    /// Panics if `section > len()`.
    pub fn insert_section(&mut self, section: usize, header: bool, rows: usize) {
        assert!(
            section <= self.sections.len(),
            "SectionTable::insert_section: section {section} out of bounds (len {})",
            self.sections.len()
        );
        self.sections.insert(section, Section { header, rows });
    }

    /// Removes `section`, returning its `(header, rows)`.
    ///
    /// # Panics
    ///
    /// Panics if `section >= len()`.
    pub fn remove_section(&mut self, section: usize) -> (bool, usize) {
        let removed = self.sections.remove(section);
        (removed.header, removed.rows)
    }

    /// Sets whether `section` has a header.
    ///
    /// # Panics
    ///
    /// Panics if `section >= len()`.
    pub fn set_header(&mut self, section: usize, header: bool) {
        self.sections[section].header = header;
    }

    /// Sets the row count of `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section >= len()`.
    pub fn set_row_count(&mut self, section: usize, rows: usize) {
        self.sections[section].rows = rows;
    }

    /// Adds `count` rows to `section`.
    ///
    /// # Panics
    ///
    /// Panics if `section >= len()`.
    pub fn insert_rows(&mut self, section: usize, count: usize) {
        let entry = &mut self.sections[section];
        entry.rows = entry.rows.saturating_add(count);
    }

    /// Removes `count` rows from `section`.
    ///
    /// Removing more rows than the section holds leaves it empty.
    ///
    /// # Panics
    ///
    /// Panics if `section >= len()`.
    pub fn remove_rows(&mut self, section: usize, count: usize) {
        let entry = &mut self.sections[section];
        debug_assert!(
            count <= entry.rows,
            "SectionTable::remove_rows: removing {count} rows from section {section} with {}",
            entry.rows
        );
        entry.rows = entry.rows.saturating_sub(count);
    }

    /// Removes all sections.
    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

impl SectionModel for SectionTable {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn has_section_header(&self, section: usize) -> bool {
        self.sections[section].header
    }

    fn row_count(&self, section: usize) -> usize {
        self.sections[section].rows
    }
}

impl FromIterator<(bool, usize)> for SectionTable {
    fn from_iter<I: IntoIterator<Item = (bool, usize)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(header, rows)| Section { header, rows })
                .collect(),
        }
    }
}

impl Extend<(bool, usize)> for SectionTable {
    fn extend<I: IntoIterator<Item = (bool, usize)>>(&mut self, iter: I) {
        self.sections
            .extend(iter.into_iter().map(|(header, rows)| Section { header, rows }));
    }
}

#[cfg(test)]
mod tests {
    use super::SectionTable;
    use crate::{IndexPath, SectionModel, index_path_at, item_count, position_of};

    #[test]
    fn collects_from_pairs() {
        let table: SectionTable = [(true, 2), (false, 1), (true, 0)].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.section_count(), 3);
        assert!(table.has_section_header(0));
        assert!(!table.has_section_header(1));
        assert_eq!(table.row_count(0), 2);
        assert_eq!(item_count(&table), 5);
    }

    #[test]
    fn mutations_reshape_the_flat_sequence() {
        let mut table = SectionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.push_section(true, 1), 0);
        assert_eq!(table.push_section(false, 2), 1);
        assert_eq!(item_count(&table), 4);
        assert_eq!(position_of(&table, IndexPath::row(1, 0)), Some(2));

        table.insert_section(0, true, 0);
        assert_eq!(item_count(&table), 5);
        assert_eq!(index_path_at(&table, 0), Some(IndexPath::header(0)));
        assert_eq!(position_of(&table, IndexPath::row(2, 0)), Some(3));

        table.set_header(2, true);
        assert_eq!(position_of(&table, IndexPath::row(2, 0)), Some(4));

        table.insert_rows(1, 3);
        assert_eq!(table.row_count(1), 4);
        table.remove_rows(1, 4);
        assert_eq!(table.row_count(1), 0);

        table.set_row_count(2, 5);
        assert_eq!(item_count(&table), 1 + 1 + 6);

        assert_eq!(table.remove_section(0), (true, 0));
        assert_eq!(table.len(), 2);

        table.clear();
        assert_eq!(item_count(&table), 0);
    }

    #[test]
    fn extend_appends_sections() {
        let mut table: SectionTable = [(true, 1)].into_iter().collect();
        table.extend([(false, 3), (true, 2)]);
        assert_eq!(table.len(), 3);
        assert_eq!(item_count(&table), 2 + 3 + 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn insert_past_end_panics() {
        let mut table = SectionTable::new();
        table.insert_section(1, false, 0);
    }
}
