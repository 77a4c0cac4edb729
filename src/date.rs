//! Normalization of date inputs into the canonical `NaiveDateTime`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{Error, Result};

/// Anything `to_date` accepts: a wall-clock date-time or a millisecond timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateInput {
    /// A calendar date and time of day.
    DateTime(NaiveDateTime),
    /// Milliseconds since 1970-01-01T00:00:00, read as UTC wall-clock time.
    Timestamp(i64),
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::DateTime(value.and_time(NaiveTime::MIN))
    }
}

/// Zoned date-times are read at their UTC wall-clock time, the same way
/// their millisecond timestamp would be.
impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.naive_utc())
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

/// Normalize a date input into a `NaiveDateTime`.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if a timestamp is outside chrono's range.
///
/// # Examples
///
/// ```
/// use datesub::date::to_date;
/// use chrono::NaiveDate;
///
/// let date = to_date(1_497_540_560_000_i64).unwrap();
/// assert_eq!(
///     date,
///     NaiveDate::from_ymd_opt(2017, 6, 15).unwrap().and_hms_opt(15, 29, 20).unwrap()
/// );
/// ```
pub fn to_date(input: impl Into<DateInput>) -> Result<NaiveDateTime> {
    match input.into() {
        DateInput::DateTime(date) => Ok(date),
        DateInput::Timestamp(millis) => DateTime::from_timestamp_millis(millis)
            .map(|date| date.naive_utc())
            .ok_or(Error::TimestampOutOfRange(millis)),
    }
}

/// The millisecond timestamp of a normalized date, the inverse of `to_date`.
#[must_use]
pub fn timestamp_millis(date: NaiveDateTime) -> i64 {
    date.and_utc().timestamp_millis()
}
