use genhier_core::errors::*;

#[test]
fn inverted_interval_carries_bounds() {
    let err = ConfigurationError::InvertedInterval {
        min: "10".into(),
        max: "5".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("10"));
    assert!(msg.contains('5'));
}

#[test]
fn gap_carries_both_intervals() {
    let err = ValidationError::Gap {
        left: "[0, 10)".into(),
        right: "[20, 30)".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("[0, 10)"));
    assert!(msg.contains("[20, 30)"));
}

// --- From impls ---

#[test]
fn category_errors_convert_to_hierarchy_error() {
    let err: HierarchyError = DataError::BelowLabelBound {
        value: "-5".into(),
        bound: "0".into(),
    }
    .into();
    assert!(matches!(err, HierarchyError::Data(_)));
    assert!(err.to_string().contains("-5"));

    let err: HierarchyError = ValidationError::MissingLevel { level: 2 }.into();
    assert!(matches!(err, HierarchyError::Validation(_)));

    let err: HierarchyError = ConfigurationError::NonPositiveGroupSize { size: 0 }.into();
    assert!(matches!(err, HierarchyError::Configuration(_)));
}

// --- Error codes ---

#[test]
fn error_codes_separate_input_errors_from_sequencing_errors() {
    let not_prepared = HierarchyError::NotPrepared {
        builder: "interval-based",
    };
    assert_eq!(not_prepared.error_code(), error_code::NOT_PREPARED);
    assert!(!not_prepared.is_input_error());

    let data: HierarchyError = DataError::NoMatchingInterval { value: "7".into() }.into();
    assert_eq!(data.error_code(), error_code::DATA_ERROR);
    assert!(data.is_input_error());

    let config: HierarchyError = ConfigurationError::UnknownGranularity {
        name: "fortnight".into(),
    }
    .into();
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let validation: HierarchyError = ValidationError::NoIntervals.into();
    assert_eq!(validation.error_code(), error_code::VALIDATION_ERROR);
}

#[test]
fn coded_string_prefixes_code() {
    let err = HierarchyError::NotPrepared {
        builder: "order-based",
    };
    let coded = err.coded_string();
    assert!(coded.starts_with("[NOT_PREPARED]"));
    assert!(coded.contains("order-based"));
}
