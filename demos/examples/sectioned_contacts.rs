// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A grouped contact list driven through a flat adapter.
//!
//! This example shows how to:
//! - describe grouped data with `SectionModel` + `SectionedAdapter`,
//! - render it through the flat `FlatAdapter` surface,
//! - lay it out in a two-column grid where headers take a whole track,
//! - translate row edits into flat-position notifications.
//!
//! Run:
//! - `cargo run -p understory_demos --example sectioned_contacts`
//! - `RUST_LOG=understory_sectioned_list=trace cargo run -p understory_demos --example sectioned_contacts`

use std::num::NonZeroUsize;

use understory_sectioned_list::{
    FlatAdapter, FlatListNotifier, GridTracks, IndexPath, RowPath, SectionModel,
    SectionedAdapter, SectionedList,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Layout {
    Letter,
    Contact,
}

/// Contacts grouped by initial, after a leading favorites group without a header.
struct Contacts {
    groups: Vec<Group>,
}

struct Group {
    title: Option<String>,
    names: Vec<String>,
}

impl Contacts {
    fn from_names(favorites: &[&str], names: &[&str]) -> Self {
        let mut groups = vec![Group {
            title: None,
            names: favorites.iter().map(|s| s.to_string()).collect(),
        }];
        for name in names {
            let initial = name.chars().next().unwrap_or('#').to_string();
            match groups.last_mut() {
                Some(group) if group.title.as_deref() == Some(initial.as_str()) => {
                    group.names.push(name.to_string());
                }
                _ => groups.push(Group {
                    title: Some(initial),
                    names: vec![name.to_string()],
                }),
            }
        }
        Self { groups }
    }
}

impl SectionModel for Contacts {
    fn section_count(&self) -> usize {
        self.groups.len()
    }

    fn has_section_header(&self, section: usize) -> bool {
        self.groups[section].title.is_some()
    }

    fn row_count(&self, section: usize) -> usize {
        self.groups[section].names.len()
    }
}

impl SectionedAdapter for Contacts {
    type Holder = String;
    type Layout = Layout;

    fn section_header_layout(&self, _section: usize) -> Layout {
        Layout::Letter
    }

    fn row_layout(&self, _path: RowPath) -> Layout {
        Layout::Contact
    }

    fn bind_section_header(&self, holder: &mut String, section: usize) {
        holder.clear();
        holder.push_str("== ");
        holder.push_str(self.groups[section].title.as_deref().unwrap_or_default());
        holder.push_str(" ==");
    }

    fn bind_row(&self, holder: &mut String, path: RowPath) {
        holder.clone_from(&self.groups[path.section].names[path.row]);
    }
}

/// Prints flat notifications the way a list widget would receive them.
struct PrintingSurface;

impl FlatListNotifier for PrintingSurface {
    fn item_changed(&mut self, position: Option<usize>) {
        println!("  surface: changed {position:?}");
    }

    fn item_inserted(&mut self, position: Option<usize>) {
        println!("  surface: inserted {position:?}");
    }

    fn item_removed(&mut self, position: Option<usize>) {
        println!("  surface: removed {position:?}");
    }

    fn item_moved(&mut self, from: Option<usize>, to: Option<usize>) {
        println!("  surface: moved {from:?} -> {to:?}");
    }
}

fn render<F: FlatAdapter<Holder = String>>(list: &F, columns: NonZeroUsize) {
    let tracks = GridTracks::for_adapter(list, columns);
    let mut holder = String::new();
    for track in 0..tracks.track_count() {
        let cells: Vec<String> = tracks
            .positions_in_track(track)
            .map(|position| {
                list.bind(&mut holder, position);
                format!("{position:>2}: {holder:<10}")
            })
            .collect();
        println!("  {}", cells.join(" | "));
    }
}

fn main() {
    understory_demos::init_tracing();

    let columns = NonZeroUsize::new(2).unwrap();
    let mut list = SectionedList::new(Contacts::from_names(
        &["Mom"],
        &["Ada", "Alan", "Barbara", "Brian", "Brendan", "Grace"],
    ));
    let mut surface = PrintingSurface;

    println!("{} items:", list.item_count());
    render(&list, columns);

    for position in [0, 1, 2, 7] {
        println!(
            "position {position} -> {:?} ({:?})",
            list.index_path_at(position),
            list.layout_at(position)
        );
    }

    // Insert: update the data first, then notify.
    println!("insert Gus into G:");
    let g = list.adapter().groups.len() - 1;
    list.adapter_mut().groups[g].names.push("Gus".to_string());
    list.notify_row_inserted(&mut surface, IndexPath::row(g, 1));

    // Remove: notify first, then update the data.
    println!("remove Brian:");
    list.notify_row_removed(&mut surface, IndexPath::row(2, 1));
    list.adapter_mut().groups[2].names.remove(1);

    // Move: both paths resolve against the geometry before the move.
    println!("move Ada to the top of favorites:");
    list.notify_row_moved(&mut surface, IndexPath::row(1, 0), IndexPath::row(0, 0));
    let ada = list.adapter_mut().groups[1].names.remove(0);
    list.adapter_mut().groups[0].names.insert(0, ada);

    // A stale path still reaches the surface, unresolved.
    println!("change a row that does not exist:");
    list.notify_row_changed(&mut surface, IndexPath::row(9, 0));

    println!("{} items:", list.item_count());
    render(&list, columns);
}
