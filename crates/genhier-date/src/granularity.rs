use std::fmt;
use std::str::FromStr;

use genhier_core::errors::{ConfigurationError, HierarchyError};
use serde::{Deserialize, Serialize};

/// A calendar resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    SecondMinuteHourDayMonthYear,
    MinuteHourDayMonthYear,
    HourDayMonthYear,
    DayMonthYear,
    WeekYear,
    MonthYear,
    QuarterYear,
    Year,
    Decade,
    Century,
    Millennium,
    DayOfWeek,
    WeekOfYear,
    MonthOfYear,
    QuarterOfYear,
}

impl Granularity {
    pub const ALL: [Granularity; 15] = [
        Granularity::SecondMinuteHourDayMonthYear,
        Granularity::MinuteHourDayMonthYear,
        Granularity::HourDayMonthYear,
        Granularity::DayMonthYear,
        Granularity::WeekYear,
        Granularity::MonthYear,
        Granularity::QuarterYear,
        Granularity::Year,
        Granularity::Decade,
        Granularity::Century,
        Granularity::Millennium,
        Granularity::DayOfWeek,
        Granularity::WeekOfYear,
        Granularity::MonthOfYear,
        Granularity::QuarterOfYear,
    ];

    /// Configuration key.
    pub fn name(self) -> &'static str {
        match self {
            Granularity::SecondMinuteHourDayMonthYear => "second_minute_hour_day_month_year",
            Granularity::MinuteHourDayMonthYear => "minute_hour_day_month_year",
            Granularity::HourDayMonthYear => "hour_day_month_year",
            Granularity::DayMonthYear => "day_month_year",
            Granularity::WeekYear => "week_year",
            Granularity::MonthYear => "month_year",
            Granularity::QuarterYear => "quarter_year",
            Granularity::Year => "year",
            Granularity::Decade => "decade",
            Granularity::Century => "century",
            Granularity::Millennium => "millennium",
            Granularity::DayOfWeek => "day_of_week",
            Granularity::WeekOfYear => "week_of_year",
            Granularity::MonthOfYear => "month_of_year",
            Granularity::QuarterOfYear => "quarter_of_year",
        }
    }

    /// strftime pattern; `%q` is the quarter.
    pub fn default_format(self) -> &'static str {
        match self {
            Granularity::SecondMinuteHourDayMonthYear => "%Y-%m-%d %H:%M:%S",
            Granularity::MinuteHourDayMonthYear => "%Y-%m-%d %H:%M",
            Granularity::HourDayMonthYear => "%Y-%m-%d %H:00",
            Granularity::DayMonthYear => "%Y-%m-%d",
            Granularity::WeekYear => "%G-W%V",
            Granularity::MonthYear => "%Y-%m",
            Granularity::QuarterYear => "%Y-Q%q",
            Granularity::Year
            | Granularity::Decade
            | Granularity::Century
            | Granularity::Millennium => "%Y",
            Granularity::DayOfWeek => "%A",
            Granularity::WeekOfYear => "%V",
            Granularity::MonthOfYear => "%B",
            Granularity::QuarterOfYear => "Q%q",
        }
    }

    /// Width in years of a range bucket.
    pub fn bucket_width(self) -> Option<i64> {
        match self {
            Granularity::Decade => Some(10),
            Granularity::Century => Some(100),
            Granularity::Millennium => Some(1000),
            _ => None,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = HierarchyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| {
                ConfigurationError::UnknownGranularity {
                    name: s.to_string(),
                }
                .into()
            })
    }
}
