use genhier_core::errors::{ConfigurationError, HierarchyError, ValidationError};
use genhier_core::{DataType, DateType, GenHierConfig, IHierarchyBuilder};
use genhier_date::{DateBasedBuilder, Granularity};
use test_fixtures::{init_tracing, load_golden, strings};

fn millis(raw: &str) -> i64 {
    DateType::default().parse(raw).unwrap().unwrap()
}

#[test]
fn golden_calendar_buckets() {
    init_tracing();
    let golden = load_golden("golden/date/calendar_buckets.json");
    let mut builder = DateBasedBuilder::new(
        DateType::default(),
        [
            Granularity::MonthYear,
            Granularity::Year,
            Granularity::Decade,
            Granularity::Century,
            Granularity::Millennium,
        ],
    );
    let counts = builder.prepare(&golden.input).unwrap();
    assert_eq!(counts, vec![4, 4, 4, 4, 3, 3]);
    golden.assert_matches(&builder.build().unwrap());
}

#[test]
fn calendar_cycles_and_weeks() {
    let mut builder = DateBasedBuilder::new(
        DateType::default(),
        [
            Granularity::WeekYear,
            Granularity::QuarterYear,
            Granularity::DayOfWeek,
            Granularity::WeekOfYear,
            Granularity::MonthOfYear,
            Granularity::QuarterOfYear,
        ],
    );
    let hierarchy = builder.build_from(&strings(&["2021-08-15"])).unwrap();
    assert_eq!(
        hierarchy.row(0).unwrap(),
        ["2021-08-15", "2021-W32", "2021-Q3", "Sunday", "32", "August", "Q3"]
    );
}

#[test]
fn time_of_day_granularities() {
    let ty = DateType::new("%Y-%m-%d %H:%M:%S");
    let mut builder = DateBasedBuilder::new(
        ty,
        [
            Granularity::SecondMinuteHourDayMonthYear,
            Granularity::MinuteHourDayMonthYear,
            Granularity::HourDayMonthYear,
            Granularity::DayMonthYear,
        ],
    );
    let hierarchy = builder.build_from(&strings(&["2021-08-15 13:45:10"])).unwrap();
    assert_eq!(
        hierarchy.row(0).unwrap(),
        [
            "2021-08-15 13:45:10",
            "2021-08-15 13:45:10",
            "2021-08-15 13:45",
            "2021-08-15 13:00",
            "2021-08-15"
        ]
    );
}

#[test]
fn coding_bounds_apply_to_every_column() {
    let mut builder =
        DateBasedBuilder::new(DateType::default(), [Granularity::Year, Granularity::Decade]);
    builder
        .set_coding_bounds_str(Some("2000-01-01"), Some("2020-01-01"))
        .unwrap();
    let hierarchy = builder
        .build_from(&strings(&["1999-12-31", "2000-01-01", "2020-01-01", "2019-06-30"]))
        .unwrap();
    assert_eq!(hierarchy.row(0).unwrap(), ["1999-12-31", "<2000-01-01", "<2000-01-01"]);
    assert_eq!(hierarchy.row(1).unwrap(), ["2000-01-01", "2000", "[2000, 2010)"]);
    assert_eq!(hierarchy.row(2).unwrap(), ["2020-01-01", ">=2020-01-01", ">=2020-01-01"]);
    assert_eq!(hierarchy.row(3).unwrap(), ["2019-06-30", "2019", "[2010, 2020)"]);
}

#[test]
fn bottom_bound_must_be_below_top_bound() {
    let mut builder = DateBasedBuilder::new(DateType::default(), [Granularity::Year]);
    builder.set_bottom_coding(Some(millis("2020-01-01")));
    builder.set_top_coding(Some(millis("2020-01-01")));
    let err = builder.prepare(&strings(&["2020-05-05"])).unwrap_err();
    assert!(matches!(
        err,
        HierarchyError::Validation(ValidationError::BoundOrder { .. })
    ));
    assert!(!builder.is_prepared());
}

#[test]
fn unparsable_coding_bound_is_rejected() {
    let mut builder = DateBasedBuilder::new(DateType::default(), [Granularity::Year]);
    let err = builder
        .set_coding_bounds_str(Some("yesterday"), None)
        .unwrap_err();
    assert!(matches!(
        err,
        HierarchyError::Configuration(ConfigurationError::UnparsableBound { .. })
    ));
    assert_eq!(builder.bottom_coding(), None);
}

#[test]
fn formats_come_from_config() {
    let config = GenHierConfig::from_toml(
        r#"
        [date.formats]
        month_year = "%m/%Y"
        quarter_of_year = "quarter %q"
        "#,
    )
    .unwrap();
    let mut builder = DateBasedBuilder::with_config(
        DateType::default(),
        [Granularity::MonthYear, Granularity::QuarterOfYear],
        &config.date,
    )
    .unwrap();
    assert_eq!(builder.format_for(Granularity::MonthYear), "%m/%Y");
    assert_eq!(builder.format_for(Granularity::Year), "%Y");
    let hierarchy = builder.build_from(&strings(&["2021-02-03"])).unwrap();
    assert_eq!(hierarchy.row(0).unwrap(), ["2021-02-03", "02/2021", "quarter 1"]);
}

#[test]
fn unknown_granularity_in_config_is_rejected() {
    let config = GenHierConfig::from_toml("[date.formats]\nfortnight = \"%Y\"\n").unwrap();
    let err = DateBasedBuilder::with_config(DateType::default(), [Granularity::Year], &config.date)
        .unwrap_err();
    assert!(matches!(
        err,
        HierarchyError::Configuration(ConfigurationError::UnknownGranularity { ref name })
            if name == "fortnight"
    ));
}

#[test]
fn granularity_names_round_trip_through_from_str() {
    for granularity in Granularity::ALL {
        assert_eq!(granularity.name().parse::<Granularity>().unwrap(), granularity);
        assert_eq!(granularity.to_string(), granularity.name());
    }
    assert_eq!(Granularity::Century.bucket_width(), Some(100));
}

#[test]
fn unparsable_dates_fail_prepare() {
    let mut builder = DateBasedBuilder::new(DateType::default(), [Granularity::Year]);
    let err = builder.prepare(&strings(&["15.08.2021"])).unwrap_err();
    assert!(matches!(err, HierarchyError::Data(_)));
}

#[test]
fn setters_invalidate_prepared_state() {
    let mut builder = DateBasedBuilder::new(DateType::default(), [Granularity::Year]);
    builder.prepare(&strings(&["2021-01-01"])).unwrap();
    assert!(builder.is_prepared());
    builder.set_format(Granularity::Year, "%y");
    assert!(!builder.is_prepared());
    assert!(matches!(
        builder.build().unwrap_err(),
        HierarchyError::NotPrepared { builder: "date-based" }
    ));
    let hierarchy = builder.build_from(&strings(&["2021-01-01"])).unwrap();
    assert_eq!(hierarchy.row(0).unwrap(), ["2021-01-01", "21"]);
}
