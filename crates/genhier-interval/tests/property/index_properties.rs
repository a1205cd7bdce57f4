use genhier_aggregate::AggregateFunction;
use genhier_core::IntegerType;
use genhier_interval::{IndexNode, Interval, IntervalIndex, NodeContent};
use proptest::prelude::*;

fn index_from_widths(start: i64, widths: &[i64]) -> IntervalIndex<i64> {
    let mut min = start;
    let intervals = widths
        .iter()
        .map(|width| {
            let interval = Interval::normal(min, min + width, AggregateFunction::default());
            min += width;
            interval
        })
        .collect();
    IntervalIndex::new(intervals).unwrap()
}

fn assert_tiles(index: &IntervalIndex<i64>, node: &IndexNode<i64>) {
    let ranges: Vec<(i64, i64)> = match node.content() {
        NodeContent::Leaf(positions) => positions
            .iter()
            .map(|&p| {
                let (min, max) = index.intervals()[p].bounds().unwrap();
                (*min, *max)
            })
            .collect(),
        NodeContent::Inner(children) => {
            for child in children {
                assert_tiles(index, child);
            }
            children.iter().map(|c| (*c.min(), *c.max())).collect()
        }
    };
    assert!(!ranges.is_empty() && ranges.len() <= 2);
    assert_eq!(ranges[0].0, *node.min());
    assert_eq!(ranges[ranges.len() - 1].1, *node.max());
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
}

proptest! {
    #[test]
    fn every_node_is_tiled_by_its_children(
        start in -1000i64..1000,
        widths in prop::collection::vec(1i64..50, 1..64),
    ) {
        let index = index_from_widths(start, &widths);
        assert_tiles(&index, index.root());
        let depth = index.root().depth();
        let bound = 1 + (widths.len() as f64).log2().ceil() as usize;
        prop_assert!(depth <= bound, "depth {} exceeds {}", depth, bound);
    }

    #[test]
    fn lookup_finds_exactly_the_containing_interval(
        start in -1000i64..1000,
        widths in prop::collection::vec(1i64..50, 1..64),
        pick in 0.0f64..1.0,
    ) {
        let index = index_from_widths(start, &widths);
        let span = index.max() - index.min();
        let value = index.min() + ((span as f64) * pick) as i64;
        let value = value.min(index.max() - 1);
        let found = index.lookup(&IntegerType, &value).unwrap();
        prop_assert!(found.contains(&IntegerType, &value));
        let hits = index
            .intervals()
            .iter()
            .filter(|i| i.contains(&IntegerType, &value))
            .count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn periodic_lookup_contains_the_value(
        widths in prop::collection::vec(1i64..20, 1..16),
        value in -10_000i64..10_000,
    ) {
        let index = index_from_widths(0, &widths);
        let found = index.lookup_periodic(&IntegerType, &value).unwrap();
        prop_assert!(found.contains(&IntegerType, &value));
    }
}
