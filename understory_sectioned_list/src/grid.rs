// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of flat items onto the tracks of a multi-column layout.
//!
//! In a grid, the scroll axis runs over *tracks* (rows of a vertical grid or
//! columns of a horizontal one), each holding `columns` cells. Items flow into
//! cells in flat order:
//!
//! - An [`ItemSpan::Single`] item takes the next free cell, wrapping to a new
//!   track once the current one is full.
//! - An [`ItemSpan::Full`] item always starts a new track (unless the current
//!   one is still empty) and takes all of it, so the next item starts another
//!   track.
//!
//! With a [`SectionedList`](crate::SectionedList), headers are full-span, so
//! every header sits alone on its track and the rows of its section start on
//! the following one.

use alloc::vec::Vec;
use core::num::NonZeroUsize;
use core::ops::Range;

use crate::{FlatAdapter, ItemSpan};

/// Where a flat item was placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridSlot {
    /// Track containing the item.
    pub track: usize,
    /// First cell occupied within the track.
    pub cell: usize,
    /// Number of cells occupied.
    pub cells: usize,
}

/// Track placement for every item of a [`FlatAdapter`].
///
/// Placement is computed by [`GridTracks::rebuild`] and must be rebuilt after
/// the adapter's item count or spans change.
#[derive(Debug, Clone)]
pub struct GridTracks {
    columns: NonZeroUsize,
    slots: Vec<GridSlot>,
    track_count: usize,
}

impl GridTracks {
    /// Creates an empty placement for a grid with `columns` cells per track.
    #[must_use]
    pub const fn new(columns: NonZeroUsize) -> Self {
        Self {
            columns,
            slots: Vec::new(),
            track_count: 0,
        }
    }

    /// Creates a placement for `adapter`.
    #[must_use]
    pub fn for_adapter<F: FlatAdapter + ?Sized>(adapter: &F, columns: NonZeroUsize) -> Self {
        let mut tracks = Self::new(columns);
        tracks.rebuild(adapter);
        tracks
    }

    /// Number of cells per track.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns.get()
    }

    /// Sets the number of cells per track.
    ///
    /// This clears the current placement; call [`GridTracks::rebuild`] again.
    pub fn set_columns(&mut self, columns: NonZeroUsize) {
        self.columns = columns;
        self.slots.clear();
        self.track_count = 0;
    }

    /// Recomputes the placement of every item of `adapter`.
    pub fn rebuild<F: FlatAdapter + ?Sized>(&mut self, adapter: &F) {
        let columns = self.columns.get();
        let len = adapter.item_count();
        self.slots.clear();
        self.slots.reserve(len);

        let mut track = 0;
        let mut cell = 0;
        for position in 0..len {
            match adapter.item_span(position) {
                ItemSpan::Single => {
                    self.slots.push(GridSlot {
                        track,
                        cell,
                        cells: 1,
                    });
                    cell += 1;
                    if cell == columns {
                        track += 1;
                        cell = 0;
                    }
                }
                ItemSpan::Full => {
                    if cell != 0 {
                        track += 1;
                    }
                    self.slots.push(GridSlot {
                        track,
                        cell: 0,
                        cells: columns,
                    });
                    track += 1;
                    cell = 0;
                }
            }
        }
        self.track_count = if cell == 0 { track } else { track + 1 };
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no items are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of tracks used by the placement.
    #[must_use]
    pub const fn track_count(&self) -> usize {
        self.track_count
    }

    /// Placement of the item at `position`.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<GridSlot> {
        self.slots.get(position).copied()
    }

    /// Track containing the item at `position`.
    #[must_use]
    pub fn track_of(&self, position: usize) -> Option<usize> {
        self.slot(position).map(|slot| slot.track)
    }

    /// Flat positions placed on `track`.
    ///
    /// Empty if `track >= track_count()`.
    #[must_use]
    pub fn positions_in_track(&self, track: usize) -> Range<usize> {
        // Tracks are non-decreasing along flat positions.
        let start = self.slots.partition_point(|slot| slot.track < track);
        let end = self.slots.partition_point(|slot| slot.track <= track);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use super::{GridSlot, GridTracks};
    use crate::{
        FlatAdapter, ItemSpan, RowPath, SectionModel, SectionTable, SectionedAdapter,
        SectionedList,
    };

    struct Spans(Vec<ItemSpan>);

    impl FlatAdapter for Spans {
        type Holder = ();
        type Layout = ();

        fn item_count(&self) -> usize {
            self.0.len()
        }

        fn layout_at(&self, position: usize) -> Option<()> {
            (position < self.0.len()).then_some(())
        }

        fn bind(&self, _holder: &mut (), position: usize) -> bool {
            position < self.0.len()
        }

        fn item_span(&self, position: usize) -> ItemSpan {
            self.0[position]
        }
    }

    /// Shape-only adapter over a [`SectionTable`].
    struct Shape(SectionTable);

    impl SectionModel for Shape {
        fn section_count(&self) -> usize {
            self.0.section_count()
        }

        fn has_section_header(&self, section: usize) -> bool {
            self.0.has_section_header(section)
        }

        fn row_count(&self, section: usize) -> usize {
            self.0.row_count(section)
        }
    }

    impl SectionedAdapter for Shape {
        type Holder = ();
        type Layout = ();

        fn section_header_layout(&self, _section: usize) {}

        fn row_layout(&self, _path: RowPath) {}

        fn bind_section_header(&self, _holder: &mut (), _section: usize) {}

        fn bind_row(&self, _holder: &mut (), _path: RowPath) {}
    }

    fn cols(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn single_items_wrap_at_column_count() {
        let adapter = Spans([ItemSpan::Single; 7].to_vec());
        let tracks = GridTracks::for_adapter(&adapter, cols(3));
        assert_eq!(tracks.len(), 7);
        assert_eq!(tracks.track_count(), 3);
        assert_eq!(
            tracks.slot(4),
            Some(GridSlot {
                track: 1,
                cell: 1,
                cells: 1
            })
        );
        assert_eq!(tracks.positions_in_track(0), 0..3);
        assert_eq!(tracks.positions_in_track(2), 6..7);
        assert_eq!(tracks.positions_in_track(3), 7..7);
        assert_eq!(tracks.slot(7), None);
    }

    #[test]
    fn full_span_items_take_their_own_track() {
        use ItemSpan::{Full, Single};
        let adapter = Spans([Single, Full, Single, Single, Full, Full].to_vec());
        let tracks = GridTracks::for_adapter(&adapter, cols(2));
        let placed: Vec<_> = (0..tracks.len()).filter_map(|p| tracks.track_of(p)).collect();
        assert_eq!(placed, [0, 1, 2, 2, 3, 4]);
        assert_eq!(tracks.track_count(), 5);
        assert_eq!(tracks.slot(1).map(|s| s.cells), Some(2));
    }

    #[test]
    fn headers_of_a_sectioned_list_start_new_tracks() {
        let table: SectionTable = [(true, 3), (false, 2), (true, 1)].into_iter().collect();
        let list = SectionedList::new(Shape(table));
        let tracks = GridTracks::for_adapter(&list, cols(2));
        // [H0] [r r] [r r] [r] [H2] [r]
        let placed: Vec<_> = (0..list.item_count()).filter_map(|p| tracks.track_of(p)).collect();
        assert_eq!(placed, [0, 1, 1, 2, 2, 3, 4, 5]);
        assert_eq!(tracks.track_count(), 6);
        assert_eq!(tracks.positions_in_track(4), 6..7);
    }

    #[test]
    fn empty_adapter_has_no_tracks() {
        let mut tracks = GridTracks::for_adapter(&Spans(Vec::new()), cols(4));
        assert!(tracks.is_empty());
        assert_eq!(tracks.track_count(), 0);
        assert_eq!(tracks.positions_in_track(0), 0..0);

        tracks.rebuild(&Spans([ItemSpan::Single; 5].to_vec()));
        assert_eq!(tracks.track_count(), 2);
        tracks.set_columns(cols(5));
        assert!(tracks.is_empty());
        assert_eq!(tracks.columns(), 5);
    }
}
