use genhier_aggregate::AggregateFunction;
use genhier_core::datatype::{DateType, DecimalType, IntegerType, StringType};
use genhier_core::errors::{ConfigurationError, HierarchyError};

fn strs(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// --- Prefix family ---

#[test]
fn common_prefix_without_redaction() {
    let f = AggregateFunction::common_prefix(None);
    assert_eq!(f.aggregate(&StringType, &["abc123", "abc456"]).unwrap(), "abc");
}

#[test]
fn common_prefix_with_redaction_pads_to_longest_input() {
    let f = AggregateFunction::common_prefix(Some('*'));
    assert_eq!(f.aggregate(&StringType, &["abc123", "abc456"]).unwrap(), "abc***");
    assert_eq!(f.aggregate(&StringType, &["ab", "abcd"]).unwrap(), "ab**");
    assert_eq!(f.aggregate(&StringType, &["xy", "ab"]).unwrap(), "**");
}

#[test]
fn common_prefix_of_single_value_is_the_value() {
    let f = AggregateFunction::common_prefix(Some('*'));
    assert_eq!(f.aggregate(&StringType, &["solo"]).unwrap(), "solo");
    let empty: [&str; 0] = [];
    assert_eq!(f.aggregate(&StringType, &empty).unwrap(), "");
}

#[test]
fn set_of_prefixes_truncates_and_joins() {
    let f = AggregateFunction::set_of_prefixes(2).unwrap();
    assert_eq!(
        f.aggregate(&StringType, &["apple", "ant", "bee"]).unwrap(),
        "ap-an-be"
    );
    let f = AggregateFunction::set_of_prefixes(4).unwrap();
    assert_eq!(f.aggregate(&StringType, &["ox", "yak"]).unwrap(), "ox-yak");
}

#[test]
fn set_of_prefixes_rejects_zero_length() {
    assert!(AggregateFunction::set_of_prefixes(0).is_err());
}

#[test]
fn set_lists_values_in_input_order() {
    let f = AggregateFunction::Set;
    assert_eq!(f.aggregate(&StringType, &["b", "a", "c"]).unwrap(), "{b, a, c}");
}

#[test]
fn constant_ignores_inputs() {
    let f = AggregateFunction::constant("adult");
    assert_eq!(f.aggregate(&IntegerType, &["18", "64"]).unwrap(), "adult");
}

// --- Bounds family ---

#[test]
fn bounds_use_type_order_not_text_order() {
    let values = strs(&["9", "10", "100", "NULL"]);
    assert_eq!(
        AggregateFunction::Bounds.aggregate(&IntegerType, &values).unwrap(),
        "[9, 100]"
    );
    assert_eq!(
        AggregateFunction::Bounds.aggregate(&StringType, &values[..3]).unwrap(),
        "[10, 9]"
    );
}

#[test]
fn interval_brackets_follow_inclusion_flags() {
    let values = ["0", "10"];
    assert_eq!(
        AggregateFunction::interval(true, false).aggregate(&IntegerType, &values).unwrap(),
        "[0, 10)"
    );
    assert_eq!(
        AggregateFunction::interval(false, true).aggregate(&IntegerType, &values).unwrap(),
        "(0, 10]"
    );
    assert_eq!(AggregateFunction::default(), AggregateFunction::interval(true, false));
}

#[test]
fn bounds_of_only_nulls_render_null() {
    assert_eq!(
        AggregateFunction::Bounds.aggregate(&IntegerType, &["NULL"]).unwrap(),
        "NULL"
    );
}

// --- Means ---

#[test]
fn arithmetic_mean_skips_nulls() {
    let f = AggregateFunction::ArithmeticMean;
    assert_eq!(f.aggregate(&IntegerType, &["2", "NULL", "4"]).unwrap(), "3");
    assert_eq!(f.aggregate(&DecimalType, &["1", "2"]).unwrap(), "1.5");
}

#[test]
fn integral_mean_rounds_to_nearest() {
    let f = AggregateFunction::ArithmeticMean;
    assert_eq!(f.aggregate(&IntegerType, &["1", "2"]).unwrap(), "2");
    assert_eq!(f.aggregate(&IntegerType, &["1", "1", "2"]).unwrap(), "1");
}

#[test]
fn geometric_mean_works_in_log_space() {
    let f = AggregateFunction::GeometricMean;
    assert_eq!(f.aggregate(&IntegerType, &["1", "100"]).unwrap(), "10");
    let decimal = f.aggregate(&DecimalType, &["2", "8"]).unwrap();
    let parsed: f64 = decimal.parse().unwrap();
    assert!((parsed - 4.0).abs() < 1e-9);
}

#[test]
fn means_of_bounds_only_use_extremes() {
    let values = ["1", "2", "3", "100"];
    assert_eq!(
        AggregateFunction::ArithmeticMeanOfBounds
            .aggregate(&DecimalType, &values)
            .unwrap(),
        "50.5"
    );
    assert_eq!(
        AggregateFunction::GeometricMeanOfBounds
            .aggregate(&IntegerType, &values)
            .unwrap(),
        "10"
    );
}

#[test]
fn temporal_mean_averages_timestamps() {
    let ty = DateType::new("%Y-%m-%d");
    let f = AggregateFunction::ArithmeticMean;
    assert_eq!(
        f.aggregate(&ty, &["2020-01-01", "2020-01-03"]).unwrap(),
        "2020-01-02"
    );
}

#[test]
fn all_null_mean_keeps_division_artifact() {
    let f = AggregateFunction::ArithmeticMean;
    assert_eq!(f.aggregate(&IntegerType, &["NULL", "NULL"]).unwrap(), "0");
    assert_eq!(f.aggregate(&DecimalType, &["NULL"]).unwrap(), "NaN");
    assert_eq!(
        f.aggregate(&DateType::new("%Y-%m-%d"), &["NULL"]).unwrap(),
        "1970-01-01"
    );
}

#[test]
fn means_are_unsupported_for_text() {
    let f = AggregateFunction::ArithmeticMean;
    let err = f.aggregate(&StringType, &["a", "b"]).unwrap_err();
    assert!(matches!(
        err,
        HierarchyError::Configuration(ConfigurationError::UnsupportedFunction { .. })
    ));
    assert!(f.check_supported(&StringType).is_err());
    assert!(f.check_supported(&IntegerType).is_ok());
    assert!(AggregateFunction::Set.check_supported(&StringType).is_ok());
}

#[test]
fn unparsable_values_propagate() {
    let f = AggregateFunction::ArithmeticMean;
    assert!(matches!(
        f.aggregate(&IntegerType, &["1", "x"]).unwrap_err(),
        HierarchyError::Data(_)
    ));
}

// --- Parameters ---

#[test]
fn parameterised_functions_can_be_reinstantiated() {
    let prefix = AggregateFunction::common_prefix(None);
    assert!(prefix.has_parameter());
    assert_eq!(prefix.parameter().as_deref(), Some(""));
    let redacted = prefix.with_parameter("#").unwrap();
    assert_eq!(redacted, AggregateFunction::common_prefix(Some('#')));
    assert!(!prefix.accepts_parameter("##"));

    let constant = AggregateFunction::constant("a").with_parameter("b").unwrap();
    assert_eq!(constant.parameter().as_deref(), Some("b"));

    let prefixes = AggregateFunction::set_of_prefixes(1).unwrap();
    assert_eq!(
        prefixes.with_parameter("3").unwrap(),
        AggregateFunction::SetOfPrefixes { length: 3 }
    );
    assert!(prefixes.with_parameter("0").is_err());
    assert!(prefixes.with_parameter("three").is_err());
}

#[test]
fn parameterless_functions_reject_parameters() {
    let f = AggregateFunction::ArithmeticMean;
    assert!(!f.has_parameter());
    assert_eq!(f.parameter(), None);
    assert!(f.with_parameter("x").is_err());
}

#[test]
fn display_includes_parameter() {
    assert_eq!(AggregateFunction::constant("x").to_string(), "Constant value (x)");
    assert_eq!(AggregateFunction::Set.to_string(), "Set of values");
}

#[test]
fn functions_serialize_with_tag() {
    let f = AggregateFunction::interval(true, false);
    let json = serde_json::to_string(&f).unwrap();
    assert!(json.contains(r#""function":"interval""#));
    let back: AggregateFunction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, f);
}
