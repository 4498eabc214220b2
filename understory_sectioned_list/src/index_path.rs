// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical coordinates: a section header or a row within a section.

use core::fmt;

/// A data row addressed by its section and its zero-based index inside that section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowPath {
    /// Section containing the row.
    pub section: usize,
    /// Zero-based row index, local to `section`.
    pub row: usize,
}

impl RowPath {
    /// Creates a new [`RowPath`].
    #[inline]
    #[must_use]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// A logical coordinate in a sectioned list.
///
/// Every flat position of a sectioned list resolves to exactly one of:
/// - [`IndexPath::Header`]: the header item of a section,
/// - [`IndexPath::Row`]: a data row of a section.
///
/// "No such coordinate" is expressed as `Option::<IndexPath>::None` by the
/// mapping functions rather than as a distinguished value of this type.
///
/// Ordering follows derive order: within a section the header sorts before
/// every row, but across sections the variant is compared first. Use
/// [`IndexPath::section`] if you need section-major ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexPath {
    /// The header item of the given section.
    Header(usize),
    /// A data row.
    Row(RowPath),
}

impl IndexPath {
    /// Path of the header of `section`.
    #[inline]
    #[must_use]
    pub const fn header(section: usize) -> Self {
        Self::Header(section)
    }

    /// Path of row `row` in `section`.
    #[inline]
    #[must_use]
    pub const fn row(section: usize, row: usize) -> Self {
        Self::Row(RowPath::new(section, row))
    }

    /// The section this path points into.
    #[inline]
    #[must_use]
    pub const fn section(&self) -> usize {
        match self {
            Self::Header(section) => *section,
            Self::Row(path) => path.section,
        }
    }

    /// The local row index, or `None` for a header.
    #[inline]
    #[must_use]
    pub const fn row_index(&self) -> Option<usize> {
        match self {
            Self::Header(_) => None,
            Self::Row(path) => Some(path.row),
        }
    }

    /// The row path, or `None` for a header.
    #[inline]
    #[must_use]
    pub const fn as_row(&self) -> Option<RowPath> {
        match self {
            Self::Header(_) => None,
            Self::Row(path) => Some(*path),
        }
    }

    /// Returns `true` if this path refers to a section header.
    #[inline]
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }
}

impl From<RowPath> for IndexPath {
    #[inline]
    fn from(path: RowPath) -> Self {
        Self::Row(path)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(section) => write!(f, "{section}:header"),
            Self::Row(path) => write!(f, "{}:{}", path.section, path.row),
        }
    }
}
