//! Fixed-width timestamps embedded in file names

use crate::error::{Result, RotateError};
use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, Timelike};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Width of a formatted timestamp, e.g. "2020-01-12T13:45:00"
pub const TIMESTAMP_WIDTH: usize = 19;

fn timestamp_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})$")
            .unwrap()
    })
}

/// Calendar fields that take part in a bucket comparison.
///
/// The calendar masks cascade: every mask includes all coarser fields.
/// `WEEKLY` is the exception and only looks at the year and the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMask {
    pub year: bool,
    pub month: bool,
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
    pub week: bool,
}

impl FieldMask {
    pub const YEARLY: FieldMask = FieldMask {
        year: true,
        month: false,
        day: false,
        hour: false,
        minute: false,
        week: false,
    };
    pub const MONTHLY: FieldMask = FieldMask {
        month: true,
        ..Self::YEARLY
    };
    pub const DAILY: FieldMask = FieldMask {
        day: true,
        ..Self::MONTHLY
    };
    pub const HOURLY: FieldMask = FieldMask {
        hour: true,
        ..Self::DAILY
    };
    pub const MINUTELY: FieldMask = FieldMask {
        minute: true,
        ..Self::HOURLY
    };
    pub const WEEKLY: FieldMask = FieldMask {
        week: true,
        ..Self::YEARLY
    };
}

/// A point in time as written into a file name.
///
/// The calendar fields hold exactly what was parsed (or read from the clock).
/// `day_of_year`, `week` and the instant come from the normalized date, so
/// out-of-range fields such as month 13 roll over into the next year there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    day_of_year: u32,
    week: u32,
    instant: NaiveDateTime,
}

impl Timestamp {
    /// Current local wall-clock time, truncated to whole seconds
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        Self::from_naive(now.with_nanosecond(0).unwrap_or(now))
    }

    /// Build a timestamp from a local date-time
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Timestamp {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            day_of_year: dt.ordinal0(),
            week: dt.ordinal0() / 7,
            instant: dt,
        }
    }

    /// Parse the fixed `YYYY-MM-DDTHH:MM:SS` form.
    ///
    /// Field ranges are not checked; overflowing fields carry into the next
    /// unit when the instant is computed. No daylight saving adjustment is made.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = |reason: &str| RotateError::InvalidTimestamp {
            input: text.to_string(),
            reason: reason.to_string(),
        };

        let caps = timestamp_regex()
            .captures(text)
            .ok_or_else(|| invalid("{now} is not the correct time format"))?;

        let field = |i: usize| -> Result<u32> {
            caps[i]
                .parse()
                .map_err(|_| invalid("failed to convert to valid time"))
        };

        let year = field(1)? as i32;
        let (month, day) = (field(2)?, field(3)?);
        let (hour, minute, second) = (field(4)?, field(5)?, field(6)?);

        let instant = normalize(year, month, day, hour, minute, second)
            .ok_or_else(|| invalid("failed to convert to valid time"))?;

        Ok(Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
            day_of_year: instant.ordinal0(),
            week: instant.ordinal0() / 7,
            instant,
        })
    }

    /// Format as `YYYY-MM-DDTHH:MM:SS`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Days since January 1st (0-365)
    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Week of year as `day_of_year / 7`. Not the ISO 8601 week.
    pub fn week(&self) -> u32 {
        self.week
    }

    /// The point in time used for ordering
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// True when every field selected by `mask` is equal
    pub fn equal_under_mask(&self, other: &Timestamp, mask: FieldMask) -> bool {
        (!mask.minute || self.minute == other.minute)
            && (!mask.hour || self.hour == other.hour)
            && (!mask.day || self.day == other.day)
            && (!mask.month || self.month == other.month)
            && (!mask.year || self.year == other.year)
            && (!mask.week || self.week == other.week)
    }
}

/// Compute the instant for possibly out-of-range fields, carrying overflow
/// the way C `mktime` does (month 13 is January of the next year, day 0 is
/// the last day of the previous month, second 60 is the next minute).
fn normalize(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month_start = match month {
        0 => jan1.checked_sub_months(Months::new(1))?,
        m => jan1.checked_add_months(Months::new(m - 1))?,
    };
    let offset = Duration::days(i64::from(day) - 1)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
        + Duration::seconds(i64::from(second));
    month_start.and_hms_opt(0, 0, 0)?.checked_add_signed(offset)
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for Timestamp {
    type Err = RotateError;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse(s)
    }
}
