// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping properties over arbitrary section geometry.

use proptest::prelude::*;
use understory_sectioned_list::{
    IndexPath, SectionModel, SectionTable, index_path_at, item_count, position_of, section_start,
};

fn sections() -> impl Strategy<Value = Vec<(bool, usize)>> {
    prop::collection::vec((any::<bool>(), 0_usize..6), 0..12)
}

proptest! {
    #[test]
    fn every_position_round_trips(shape in sections()) {
        let table: SectionTable = shape.into_iter().collect();
        for position in 0..item_count(&table) {
            let path = index_path_at(&table, position);
            prop_assert!(path.is_some(), "position {} should resolve", position);
            prop_assert_eq!(path.and_then(|p| position_of(&table, p)), Some(position));
        }
    }

    #[test]
    fn count_is_the_sum_of_spans(shape in sections()) {
        let expected: usize = shape.iter().map(|&(header, rows)| rows + usize::from(header)).sum();
        let table: SectionTable = shape.into_iter().collect();
        prop_assert_eq!(item_count(&table), expected);
    }

    #[test]
    fn positions_past_the_end_do_not_resolve(shape in sections(), extra in 0_usize..100) {
        let table: SectionTable = shape.into_iter().collect();
        prop_assert_eq!(index_path_at(&table, item_count(&table) + extra), None);
    }

    #[test]
    fn first_position_of_a_section_is_its_header_or_first_row(shape in sections()) {
        let table: SectionTable = shape.into_iter().collect();
        for section in 0..table.section_count() {
            let start = section_start(&table, section);
            let expected = if table.has_section_header(section) {
                Some(IndexPath::header(section))
            } else if table.row_count(section) > 0 {
                Some(IndexPath::row(section, 0))
            } else {
                // Empty header-less sections occupy no position.
                continue;
            };
            prop_assert_eq!(index_path_at(&table, start), expected);
        }
    }

    #[test]
    fn out_of_range_paths_have_no_position(shape in sections(), row in 0_usize..10) {
        let table: SectionTable = shape.into_iter().collect();
        let count = table.section_count();
        prop_assert_eq!(position_of(&table, IndexPath::row(count, row)), None);
        prop_assert_eq!(position_of(&table, IndexPath::header(count)), None);
        for section in 0..count {
            let rows = table.row_count(section);
            prop_assert_eq!(position_of(&table, IndexPath::row(section, rows + row)), None);
            if !table.has_section_header(section) {
                prop_assert_eq!(position_of(&table, IndexPath::header(section)), None);
            }
        }
    }

    #[test]
    fn positions_are_dense_and_ordered(shape in sections()) {
        let table: SectionTable = shape.into_iter().collect();
        let mut expected = 0;
        for section in 0..table.section_count() {
            if table.has_section_header(section) {
                prop_assert_eq!(position_of(&table, IndexPath::header(section)), Some(expected));
                expected += 1;
            }
            for row in 0..table.row_count(section) {
                prop_assert_eq!(position_of(&table, IndexPath::row(section, row)), Some(expected));
                expected += 1;
            }
        }
        prop_assert_eq!(expected, item_count(&table));
    }
}
