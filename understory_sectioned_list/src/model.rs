// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section geometry and the flat position mapping built on it.

use crate::IndexPath;

/// Section geometry of a sectioned list.
///
/// The flat sequence described by a model is the concatenation, over sections
/// `0..section_count()` in order, of the section header (if present) followed by
/// rows `0..row_count(section)`.
///
/// Nothing is cached: every mapping function re-queries the model, so answers
/// track the host's data as long as these three methods agree with each other
/// for the duration of a single call.
pub trait SectionModel {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Whether `section` is prefixed by a header item.
    ///
    /// Only called with `section < section_count()`.
    fn has_section_header(&self, section: usize) -> bool;

    /// Number of data rows in `section`.
    ///
    /// Only called with `section < section_count()`.
    fn row_count(&self, section: usize) -> usize;
}

impl<M: SectionModel + ?Sized> SectionModel for &M {
    fn section_count(&self) -> usize {
        (**self).section_count()
    }

    fn has_section_header(&self, section: usize) -> bool {
        (**self).has_section_header(section)
    }

    fn row_count(&self, section: usize) -> usize {
        (**self).row_count(section)
    }
}

/// Number of flat items `section` occupies: its rows plus one for a header.
#[inline]
pub fn section_span<M: SectionModel + ?Sized>(model: &M, section: usize) -> usize {
    model.row_count(section) + usize::from(model.has_section_header(section))
}

/// Flat position of the first item of `section`.
///
/// This is the sum of the spans of all sections before it. `section` may be
/// equal to `section_count()`, in which case the result is [`item_count`].
pub fn section_start<M: SectionModel + ?Sized>(model: &M, section: usize) -> usize {
    let end = section.min(model.section_count());
    (0..end).map(|s| section_span(model, s)).sum()
}

/// Total number of flat items over all sections.
pub fn item_count<M: SectionModel + ?Sized>(model: &M) -> usize {
    (0..model.section_count())
        .map(|s| section_span(model, s))
        .sum()
}

/// Resolve a flat position to its logical coordinate.
///
/// Sections are scanned in order; a position exactly on a section boundary
/// belongs to the following section, so empty header-less sections never
/// claim a position.
///
/// Returns `None` if `position >= item_count(model)`.
pub fn index_path_at<M: SectionModel + ?Sized>(model: &M, position: usize) -> Option<IndexPath> {
    let mut start = 0_usize;
    for section in 0..model.section_count() {
        let has_header = model.has_section_header(section);
        let span = model.row_count(section) + usize::from(has_header);
        if start + span > position {
            if has_header && position == start {
                return Some(IndexPath::Header(section));
            }
            let row = position - start - usize::from(has_header);
            return Some(IndexPath::row(section, row));
        }
        start += span;
    }
    None
}

/// Resolve a logical coordinate to its flat position.
///
/// Returns `None` when:
/// - `path.section() >= section_count()`,
/// - `path` is a row and its index is `>= row_count(section)`,
/// - `path` is a header and the section has no header.
pub fn position_of<M: SectionModel + ?Sized>(model: &M, path: IndexPath) -> Option<usize> {
    let section = path.section();
    if section >= model.section_count() {
        return None;
    }
    let has_header = model.has_section_header(section);
    match path {
        IndexPath::Header(_) => has_header.then(|| section_start(model, section)),
        IndexPath::Row(row) => {
            if row.row >= model.row_count(section) {
                return None;
            }
            Some(section_start(model, section) + usize::from(has_header) + row.row)
        }
    }
}
