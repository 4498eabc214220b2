// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host and surface adapter contracts.

use crate::{RowPath, SectionModel};

/// How many cells of a multi-column layout an item occupies.
///
/// Single-column layouts can ignore this.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemSpan {
    /// One cell.
    #[default]
    Single,
    /// The whole track (row of a vertical grid, column of a horizontal one).
    Full,
}

/// The contract a flat list rendering surface consumes.
///
/// Positions are dense indices `0..item_count()`. Out-of-range positions are
/// tolerated: queries return `None` and `bind` returns `false`.
pub trait FlatAdapter {
    /// View holder type populated by [`FlatAdapter::bind`].
    type Holder;
    /// Layout or view-type identifier.
    type Layout;

    /// Number of items.
    fn item_count(&self) -> usize;

    /// Layout used to render the item at `position`.
    fn layout_at(&self, position: usize) -> Option<Self::Layout>;

    /// Populate `holder` for the item at `position`.
    ///
    /// Returns `false` if nothing was bound.
    fn bind(&self, holder: &mut Self::Holder, position: usize) -> bool;

    /// Stable id of the item at `position`, if the adapter has stable ids.
    fn item_id(&self, position: usize) -> Option<u64> {
        let _ = position;
        None
    }

    /// Span of the item at `position`.
    fn item_span(&self, position: usize) -> ItemSpan {
        let _ = position;
        ItemSpan::Single
    }
}

/// Host capabilities for a sectioned list.
///
/// Implementors describe geometry through [`SectionModel`] and render headers
/// and rows separately. Wrap an implementation in
/// [`SectionedList`](crate::SectionedList) to obtain a [`FlatAdapter`].
///
/// Header methods are only called for sections where
/// [`SectionModel::has_section_header`] is `true`; row methods only for rows
/// inside `0..row_count(section)`.
pub trait SectionedAdapter: SectionModel {
    /// View holder type.
    type Holder;
    /// Layout or view-type identifier.
    type Layout;

    /// Layout for the header of `section`.
    fn section_header_layout(&self, section: usize) -> Self::Layout;

    /// Layout for a data row.
    fn row_layout(&self, path: RowPath) -> Self::Layout;

    /// Populate `holder` with the header of `section`.
    fn bind_section_header(&self, holder: &mut Self::Holder, section: usize);

    /// Populate `holder` with a data row.
    fn bind_row(&self, holder: &mut Self::Holder, path: RowPath);

    /// Stable id for the header of `section`.
    fn section_item_id(&self, section: usize) -> Option<u64> {
        let _ = section;
        None
    }

    /// Stable id for a data row.
    fn row_item_id(&self, path: RowPath) -> Option<u64> {
        let _ = path;
        None
    }

    /// Span of the flat item at `position` before headers are promoted.
    ///
    /// [`SectionedList`](crate::SectionedList) consults this for every
    /// position and then forces [`ItemSpan::Full`] on header items.
    fn span_hint(&self, position: usize) -> ItemSpan {
        let _ = position;
        ItemSpan::Single
    }
}
