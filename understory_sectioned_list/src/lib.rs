// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sectioned_list --heading-base-level=0

//! Understory Sectioned List: section/row addressing over a flat list.
//!
//! List widgets usually render a dense strip of items indexed `0..len`. Many
//! lists are logically grouped instead: *sections*, each optionally headed by a
//! header item and containing zero or more *rows*. This crate maps between the
//! two, so the rendering side can keep working with flat positions while the
//! data side thinks in sections and rows.
//!
//! The core concepts are:
//!
//! - [`IndexPath`]: a logical coordinate, either [`IndexPath::Header`] of a
//!   section or an [`IndexPath::Row`] holding a [`RowPath`].
//! - [`SectionModel`]: a trait describing section geometry (section count,
//!   header presence, row count per section).
//! - [`index_path_at`] and [`position_of`]: the forward and reverse mapping
//!   between flat positions and [`IndexPath`]s, plus [`item_count`],
//!   [`section_start`] and [`section_span`].
//! - [`SectionedAdapter`]: the host side of a sectioned list (layouts, binding,
//!   stable ids) and [`FlatAdapter`]: the contract a flat list surface consumes.
//! - [`SectionedList`]: wraps a [`SectionedAdapter`] and implements
//!   [`FlatAdapter`] by dispatching each flat position to the header or row
//!   handlers. It also translates row-level change notifications into
//!   flat-position ones for a [`FlatListNotifier`].
//! - [`SectionTable`]: a ready-made [`SectionModel`] storing geometry directly.
//! - [`GridTracks`]: places flat items on the tracks of a multi-column layout,
//!   honoring full-span headers.
//!
//! Nothing here caches geometry. Every query re-reads the host's
//! [`SectionModel`], so answers always reflect the host's current data, at a
//! cost of `O(section_count)` per query.
//!
//! This crate deliberately does **not** know about widgets or any particular UI
//! framework. Host frameworks are responsible for:
//!
//! - Owning the actual data and view instances.
//! - Calling [`FlatAdapter`] methods from their list widget.
//! - Sending row notifications at the right moment relative to data changes:
//!   insertions after the data is updated, removals and moves before.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_sectioned_list::{IndexPath, SectionTable, index_path_at, item_count, position_of};
//!
//! // A section with a header and two rows, a header-less section with one
//! // row, and an empty section that only shows its header.
//! let sections: SectionTable = [(true, 2), (false, 1), (true, 0)].into_iter().collect();
//!
//! assert_eq!(item_count(&sections), 5);
//! assert_eq!(index_path_at(&sections, 0), Some(IndexPath::header(0)));
//! assert_eq!(index_path_at(&sections, 3), Some(IndexPath::row(1, 0)));
//! assert_eq!(index_path_at(&sections, 5), None);
//! assert_eq!(position_of(&sections, IndexPath::row(0, 1)), Some(2));
//!
//! // Section 1 has no header, so its header has no position.
//! assert_eq!(position_of(&sections, IndexPath::header(1)), None);
//! ```
//!
//! ## Adapting a host
//!
//! ```rust
//! use understory_sectioned_list::{
//!     FlatAdapter, FlatUpdate, IndexPath, RowPath, SectionModel, SectionedAdapter,
//!     SectionedList,
//! };
//!
//! struct Fruit {
//!     groups: Vec<(&'static str, Vec<&'static str>)>,
//! }
//!
//! impl SectionModel for Fruit {
//!     fn section_count(&self) -> usize {
//!         self.groups.len()
//!     }
//!     fn has_section_header(&self, _section: usize) -> bool {
//!         true
//!     }
//!     fn row_count(&self, section: usize) -> usize {
//!         self.groups[section].1.len()
//!     }
//! }
//!
//! impl SectionedAdapter for Fruit {
//!     type Holder = String;
//!     type Layout = &'static str;
//!
//!     fn section_header_layout(&self, _section: usize) -> &'static str {
//!         "header"
//!     }
//!     fn row_layout(&self, _path: RowPath) -> &'static str {
//!         "row"
//!     }
//!     fn bind_section_header(&self, holder: &mut String, section: usize) {
//!         *holder = self.groups[section].0.to_uppercase();
//!     }
//!     fn bind_row(&self, holder: &mut String, path: RowPath) {
//!         *holder = self.groups[path.section].1[path.row].to_string();
//!     }
//! }
//!
//! let mut list = SectionedList::new(Fruit {
//!     groups: vec![("a", vec!["apple", "apricot"]), ("b", vec!["banana"])],
//! });
//!
//! let mut holder = String::new();
//! assert!(list.bind(&mut holder, 3));
//! assert_eq!(holder, "B");
//! assert_eq!(list.layout_at(4), Some("row"));
//!
//! // Remove "apricot": notify first, then change the data.
//! let mut updates: Vec<FlatUpdate> = Vec::new();
//! list.notify_row_removed(&mut updates, IndexPath::row(0, 1));
//! list.adapter_mut().groups[0].1.remove(1);
//! assert_eq!(updates, [FlatUpdate::Removed(Some(2))]);
//! assert_eq!(list.item_count(), 4);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `tracing`.
//!
//! Log events are emitted through `tracing` under the `understory_sectioned_list`
//! target: a warning when a row notification does not resolve, and debug events
//! for queries past the end of the list.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod grid;
mod index_path;
mod model;
mod notify;
mod sectioned_list;
mod table;

pub use adapter::{FlatAdapter, ItemSpan, SectionedAdapter};
pub use grid::{GridSlot, GridTracks};
pub use index_path::{IndexPath, RowPath};
pub use model::{
    SectionModel, index_path_at, item_count, position_of, section_span, section_start,
};
pub use notify::{FlatListNotifier, FlatUpdate};
pub use sectioned_list::SectionedList;
pub use table::SectionTable;
