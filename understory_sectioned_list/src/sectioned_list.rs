// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`FlatAdapter`] over a [`SectionedAdapter`].

use tracing::{debug, trace, warn};

use crate::{
    FlatAdapter, FlatListNotifier, IndexPath, ItemSpan, SectionedAdapter, index_path_at,
    item_count, position_of,
};

/// Presents a [`SectionedAdapter`] as a [`FlatAdapter`].
///
/// This type:
/// - resolves flat positions to [`IndexPath`]s and dispatches bind, layout,
///   and id queries to the header- or row-specific methods of the host,
/// - promotes header items to [`ItemSpan::Full`],
/// - translates row-level change notifications into flat-position ones.
///
/// It holds no state besides the adapter. Every call re-reads the host's
/// geometry, so it never needs to be invalidated after data changes.
///
/// Row notifications are translated against the geometry at the time of the
/// call. Hosts should notify insertions *after* updating their data (so the
/// new row resolves) and removals and moves *before* (so the old row still
/// resolves).
#[derive(Debug, Clone, Default)]
pub struct SectionedList<A> {
    adapter: A,
}

impl<A: SectionedAdapter> SectionedList<A> {
    /// Wraps `adapter`.
    #[must_use]
    pub const fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Returns a shared reference to the host adapter.
    #[must_use]
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Returns a mutable reference to the host adapter.
    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Unwraps the host adapter.
    pub fn into_inner(self) -> A {
        self.adapter
    }

    /// Logical coordinate of the flat item at `position`.
    #[must_use]
    pub fn index_path_at(&self, position: usize) -> Option<IndexPath> {
        index_path_at(&self.adapter, position)
    }

    /// Flat position of `path`.
    #[must_use]
    pub fn position_of(&self, path: IndexPath) -> Option<usize> {
        position_of(&self.adapter, path)
    }

    /// Notify that the item at `path` changed in place.
    pub fn notify_row_changed<N: FlatListNotifier + ?Sized>(
        &self,
        notifier: &mut N,
        path: IndexPath,
    ) {
        let position = self.resolve_for_notification(path, "changed");
        notifier.item_changed(position);
    }

    /// Notify that an item was inserted at `path`.
    pub fn notify_row_inserted<N: FlatListNotifier + ?Sized>(
        &self,
        notifier: &mut N,
        path: IndexPath,
    ) {
        let position = self.resolve_for_notification(path, "inserted");
        notifier.item_inserted(position);
    }

    /// Notify that the item at `path` was removed.
    pub fn notify_row_removed<N: FlatListNotifier + ?Sized>(
        &self,
        notifier: &mut N,
        path: IndexPath,
    ) {
        let position = self.resolve_for_notification(path, "removed");
        notifier.item_removed(position);
    }

    /// Notify that the item at `from` moved to `to`.
    ///
    /// Both paths are resolved against the current geometry.
    pub fn notify_row_moved<N: FlatListNotifier + ?Sized>(
        &self,
        notifier: &mut N,
        from: IndexPath,
        to: IndexPath,
    ) {
        let from = self.resolve_for_notification(from, "moved from");
        let to = self.resolve_for_notification(to, "moved to");
        notifier.item_moved(from, to);
    }

    fn resolve_for_notification(&self, path: IndexPath, what: &'static str) -> Option<usize> {
        let position = self.position_of(path);
        match position {
            Some(position) => {
                trace!(target: "understory_sectioned_list", %path, position, what, "row notification");
            }
            None => {
                warn!(
                    target: "understory_sectioned_list",
                    %path,
                    what,
                    "row notification does not map to a flat position"
                );
            }
        }
        position
    }

    fn resolve_for_query(&self, position: usize, what: &'static str) -> Option<IndexPath> {
        let path = self.index_path_at(position);
        if path.is_none() {
            debug!(
                target: "understory_sectioned_list",
                position,
                what,
                "flat position is past the end of the list"
            );
        }
        path
    }
}

impl<A: SectionedAdapter> FlatAdapter for SectionedList<A> {
    type Holder = A::Holder;
    type Layout = A::Layout;

    fn item_count(&self) -> usize {
        item_count(&self.adapter)
    }

    fn layout_at(&self, position: usize) -> Option<A::Layout> {
        Some(match self.resolve_for_query(position, "layout")? {
            IndexPath::Header(section) => self.adapter.section_header_layout(section),
            IndexPath::Row(path) => self.adapter.row_layout(path),
        })
    }

    fn bind(&self, holder: &mut A::Holder, position: usize) -> bool {
        match self.resolve_for_query(position, "bind") {
            Some(IndexPath::Header(section)) => self.adapter.bind_section_header(holder, section),
            Some(IndexPath::Row(path)) => self.adapter.bind_row(holder, path),
            None => return false,
        }
        true
    }

    fn item_id(&self, position: usize) -> Option<u64> {
        match self.resolve_for_query(position, "item id")? {
            IndexPath::Header(section) => self.adapter.section_item_id(section),
            IndexPath::Row(path) => self.adapter.row_item_id(path),
        }
    }

    fn item_span(&self, position: usize) -> ItemSpan {
        let span = self.adapter.span_hint(position);
        match self.index_path_at(position) {
            Some(IndexPath::Header(_)) => ItemSpan::Full,
            _ => span,
        }
    }
}
