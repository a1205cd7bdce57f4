use genhier_aggregate::AggregateFunction;
use genhier_core::{Decimal, DecimalType, IntegerType};
use genhier_interval::{repeat_window, Interval, IntervalIndex, IntervalKind, Side};

fn decades(count: i64) -> IntervalIndex<i64> {
    let intervals = (0..count)
        .map(|i| Interval::normal(i * 10, (i + 1) * 10, AggregateFunction::default()))
        .collect();
    IntervalIndex::new(intervals).unwrap()
}

fn bounds(interval: &Interval<i64>) -> (i64, i64) {
    let (min, max) = interval.bounds().unwrap();
    (*min, *max)
}

#[test]
fn lookup_descends_to_the_containing_interval() {
    let index = decades(5);
    assert_eq!(index.len(), 5);
    assert_eq!((*index.min(), *index.max()), (0, 50));
    assert_eq!(bounds(index.lookup(&IntegerType, &0).unwrap()), (0, 10));
    assert_eq!(bounds(index.lookup(&IntegerType, &39).unwrap()), (30, 40));
    assert_eq!(bounds(index.lookup(&IntegerType, &40).unwrap()), (40, 50));
    assert!(index.lookup(&IntegerType, &50).is_none());
    assert!(index.lookup(&IntegerType, &-1).is_none());
}

#[test]
fn tree_is_balanced_with_fanout_two() {
    assert_eq!(decades(1).root().depth(), 1);
    assert_eq!(decades(2).root().depth(), 1);
    assert_eq!(decades(3).root().depth(), 2);
    assert_eq!(decades(8).root().depth(), 3);
    assert_eq!(decades(9).root().depth(), 4);
}

#[test]
fn periodic_lookup_shifts_by_whole_windows() {
    let index = decades(2);
    let ty = IntegerType;
    assert_eq!(bounds(&index.lookup_periodic(&ty, &25).unwrap()), (20, 30));
    assert_eq!(bounds(&index.lookup_periodic(&ty, &40).unwrap()), (40, 50));
    assert_eq!(bounds(&index.lookup_periodic(&ty, &-1).unwrap()), (-10, 0));
    assert_eq!(bounds(&index.lookup_periodic(&ty, &-20).unwrap()), (-20, -10));
    assert_eq!(bounds(&index.lookup_periodic(&ty, &7).unwrap()), (0, 10));
}

#[test]
fn upper_snap_lookup_prefers_the_preceding_interval() {
    let index = decades(3);
    let ty = IntegerType;
    // exactly on a lower bound inside the window
    assert_eq!(bounds(&index.lookup_upper_snap(&ty, &20).unwrap()), (10, 20));
    // exactly on the window edge wraps to the last interval of the previous window
    assert_eq!(bounds(&index.lookup_upper_snap(&ty, &30).unwrap()), (20, 30));
    assert_eq!(bounds(&index.lookup_upper_snap(&ty, &60).unwrap()), (50, 60));
    // elsewhere it matches the plain periodic lookup
    assert_eq!(bounds(&index.lookup_upper_snap(&ty, &45).unwrap()), (40, 50));
}

#[test]
fn shifted_intervals_keep_their_function() {
    let intervals = vec![Interval::normal(0, 10, AggregateFunction::constant("ten"))];
    let index = IntervalIndex::new(intervals).unwrap();
    let found = index.lookup_periodic(&IntegerType, &95).unwrap();
    assert_eq!(bounds(&found), (90, 100));
    assert_eq!(found.label(&IntegerType).unwrap(), "ten");
}

#[test]
fn repeat_window_buckets_any_value() {
    let ty = IntegerType;
    assert_eq!(repeat_window(&ty, &0, &10, &1985), (1980, 1990));
    assert_eq!(repeat_window(&ty, &0, &10, &1980), (1980, 1990));
    assert_eq!(repeat_window(&ty, &0, &100, &-5), (-100, 0));
    assert_eq!(repeat_window(&ty, &0, &1000, &2024), (2000, 3000));

    let (lo, hi) = repeat_window(&DecimalType, &Decimal(0.0), &Decimal(0.5), &Decimal(1.2));
    assert_eq!((lo, hi), (Decimal(1.0), Decimal(1.5)));
}

#[test]
fn periodic_decimal_labels_stay_clean() {
    let index = IntervalIndex::new(vec![
        Interval::normal(Decimal(0.0), Decimal(0.1), AggregateFunction::default()),
        Interval::normal(Decimal(0.1), Decimal(0.3), AggregateFunction::default()),
    ])
    .unwrap();
    let found = index.lookup_periodic(&DecimalType, &Decimal(0.9)).unwrap();
    assert_eq!(found.label(&DecimalType).unwrap(), "[0.9, 1)");
    let found = index.lookup_periodic(&DecimalType, &Decimal(1.05)).unwrap();
    assert_eq!(found.label(&DecimalType).unwrap(), "[1, 1.2)");
}

#[test]
fn unbounded_intervals_cannot_be_indexed() {
    assert!(IntervalIndex::<i64>::new(vec![Interval::null()]).is_err());
    assert!(IntervalIndex::<i64>::new(Vec::new()).is_err());
}

#[test]
fn equality_ignores_the_function() {
    let a = Interval::normal(0, 10, AggregateFunction::Bounds);
    let b = Interval::normal(0, 10, AggregateFunction::Set);
    assert_eq!(a, b);
    assert_ne!(a, Interval::normal(0, 11, AggregateFunction::Bounds));
    assert_ne!(
        Interval::out_of_bound(Side::Lower, 0),
        Interval::out_of_bound(Side::Upper, 0)
    );
    assert_eq!(Interval::<i64>::null().kind(), &IntervalKind::Null);
}

#[test]
fn out_of_bound_labels() {
    let ty = IntegerType;
    assert_eq!(Interval::out_of_bound(Side::Lower, 5).label(&ty).unwrap(), "<5");
    assert_eq!(Interval::out_of_bound(Side::Upper, 9).label(&ty).unwrap(), ">=9");
    assert_eq!(Interval::<i64>::null().label(&ty).unwrap(), "NULL");
}
