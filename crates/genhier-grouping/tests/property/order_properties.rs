use genhier_aggregate::AggregateFunction;
use genhier_core::{IHierarchyBuilder, IntegerType};
use genhier_grouping::OrderBasedBuilder;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn hierarchy_is_rectangular_and_keeps_input(
        values in prop::collection::vec(-50i64..50, 1..40),
        low in 1usize..5,
        high in 1usize..4,
    ) {
        let data: Vec<String> = values.iter().map(i64::to_string).collect();
        let mut builder = OrderBasedBuilder::new(IntegerType);
        builder.add_group(0, low, AggregateFunction::Bounds).unwrap();
        builder.add_group(1, high, AggregateFunction::Bounds).unwrap();
        let hierarchy = builder.build_from(&data).unwrap();

        prop_assert_eq!(hierarchy.len(), data.len());
        let height = hierarchy.height();
        for (row, raw) in hierarchy.rows().iter().zip(&data) {
            prop_assert_eq!(row.len(), height);
            prop_assert_eq!(&row[0], raw);
        }
    }

    #[test]
    fn each_value_and_label_maps_to_one_parent(
        values in prop::collection::vec(0i64..30, 1..40),
        low in 1usize..4,
    ) {
        let data: Vec<String> = values.iter().map(i64::to_string).collect();
        let mut builder = OrderBasedBuilder::new(IntegerType);
        builder.add_group(0, low, AggregateFunction::Bounds).unwrap();
        builder.add_group(1, 2, AggregateFunction::Bounds).unwrap();
        let hierarchy = builder.build_from(&data).unwrap();

        for level in 0..hierarchy.height().saturating_sub(1) {
            let mut parents: HashMap<&str, &str> = HashMap::new();
            for row in hierarchy.rows() {
                let parent = parents.entry(row[level].as_str()).or_insert(row[level + 1].as_str());
                prop_assert_eq!(*parent, row[level + 1].as_str());
            }
        }
    }
}
