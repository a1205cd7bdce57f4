use genhier_aggregate::AggregateFunction;
use genhier_core::datatype::{IntegerType, StringType};
use proptest::prelude::*;

proptest! {
    #[test]
    fn common_prefix_is_prefix_of_every_value(
        values in prop::collection::vec("[ab]{0,6}", 1..6)
    ) {
        let prefix = AggregateFunction::common_prefix(None)
            .aggregate(&StringType, &values)
            .unwrap();
        for v in &values {
            prop_assert!(v.starts_with(&prefix), "{} is not a prefix of {}", prefix, v);
        }
    }

    #[test]
    fn redacted_prefix_has_longest_input_length(
        values in prop::collection::vec("[a-c]{0,8}", 1..6)
    ) {
        let label = AggregateFunction::common_prefix(Some('*'))
            .aggregate(&StringType, &values)
            .unwrap();
        let longest = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);
        prop_assert_eq!(label.chars().count(), longest);
    }

    #[test]
    fn bounds_contain_every_value(values in prop::collection::vec(-1000i64..1000, 1..20)) {
        let raw: Vec<String> = values.iter().map(i64::to_string).collect();
        let label = AggregateFunction::Bounds.aggregate(&IntegerType, &raw).unwrap();
        let min = values.iter().min().unwrap();
        let max = values.iter().max().unwrap();
        prop_assert_eq!(label, format!("[{min}, {max}]"));
    }

    #[test]
    fn integral_mean_lies_between_extremes(values in prop::collection::vec(-1000i64..1000, 1..20)) {
        let raw: Vec<String> = values.iter().map(i64::to_string).collect();
        let mean: i64 = AggregateFunction::ArithmeticMean
            .aggregate(&IntegerType, &raw)
            .unwrap()
            .parse()
            .unwrap();
        prop_assert!(mean >= *values.iter().min().unwrap());
        prop_assert!(mean <= *values.iter().max().unwrap());
    }
}
