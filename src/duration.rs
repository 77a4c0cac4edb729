//! Composite calendar durations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, Unit};

const MONTHS_PER_YEAR: i64 = 12;
const DAYS_PER_WEEK: i64 = 7;
const MINUTES_PER_HOUR: i64 = 60;
const SECONDS_PER_MINUTE: i64 = 60;
const MILLIS_PER_SECOND: i64 = 1000;

/// A duration made of optional calendar and clock fields.
///
/// Absent fields count as zero. Fields are not validated: any sign and
/// magnitude is accepted, and negative fields reverse the direction of a shift.
///
/// # Examples
///
/// ```
/// use datesub::Duration;
///
/// let duration = Duration::new().years(2).months(9).hours(5);
/// let resolved = duration.resolve();
/// assert_eq!(resolved.months, 9);
/// assert_eq!(resolved.weeks, 0);
/// assert_eq!(resolved.total_months().unwrap(), 33);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Duration {
    /// Years, folded into months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<i64>,
    /// Calendar months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months: Option<i64>,
    /// Weeks, folded into days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
    /// Calendar days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    /// Hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<i64>,
    /// Minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i64>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i64>,
}

impl Duration {
    /// An empty duration, equivalent to all fields being zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            years: None,
            months: None,
            weeks: None,
            days: None,
            hours: None,
            minutes: None,
            seconds: None,
        }
    }

    /// Set the years field.
    #[must_use]
    pub const fn years(mut self, years: i64) -> Self {
        self.years = Some(years);
        self
    }

    /// Set the months field.
    #[must_use]
    pub const fn months(mut self, months: i64) -> Self {
        self.months = Some(months);
        self
    }

    /// Set the weeks field.
    #[must_use]
    pub const fn weeks(mut self, weeks: i64) -> Self {
        self.weeks = Some(weeks);
        self
    }

    /// Set the days field.
    #[must_use]
    pub const fn days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    /// Set the hours field.
    #[must_use]
    pub const fn hours(mut self, hours: i64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Set the minutes field.
    #[must_use]
    pub const fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = Some(minutes);
        self
    }

    /// Set the seconds field.
    #[must_use]
    pub const fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = Some(seconds);
        self
    }

    /// Fill every absent field from `fallback`, keeping the fields already set.
    #[must_use]
    pub fn or(self, fallback: &Self) -> Self {
        Self {
            years: self.years.or(fallback.years),
            months: self.months.or(fallback.months),
            weeks: self.weeks.or(fallback.weeks),
            days: self.days.or(fallback.days),
            hours: self.hours.or(fallback.hours),
            minutes: self.minutes.or(fallback.minutes),
            seconds: self.seconds.or(fallback.seconds),
        }
    }

    /// Replace every absent field with zero.
    #[must_use]
    pub fn resolve(&self) -> ResolvedDuration {
        ResolvedDuration {
            years: self.years.unwrap_or_default(),
            months: self.months.unwrap_or_default(),
            weeks: self.weeks.unwrap_or_default(),
            days: self.days.unwrap_or_default(),
            hours: self.hours.unwrap_or_default(),
            minutes: self.minutes.unwrap_or_default(),
            seconds: self.seconds.unwrap_or_default(),
        }
    }
}

/// A duration with every field present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedDuration {
    /// Years.
    pub years: i64,
    /// Months.
    pub months: i64,
    /// Weeks.
    pub weeks: i64,
    /// Days.
    pub days: i64,
    /// Hours.
    pub hours: i64,
    /// Minutes.
    pub minutes: i64,
    /// Seconds.
    pub seconds: i64,
}

impl ResolvedDuration {
    /// `months + years * 12`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total does not fit in an `i64`.
    pub fn total_months(&self) -> Result<i64> {
        self.years
            .checked_mul(MONTHS_PER_YEAR)
            .and_then(|months| months.checked_add(self.months))
            .ok_or(Error::Overflow { unit: Unit::Months })
    }

    /// `days + weeks * 7`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total does not fit in an `i64`.
    pub fn total_days(&self) -> Result<i64> {
        self.weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(|days| days.checked_add(self.days))
            .ok_or(Error::Overflow { unit: Unit::Days })
    }

    /// `(seconds + (minutes + hours * 60) * 60) * 1000`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total does not fit in an `i64`.
    pub fn total_millis(&self) -> Result<i64> {
        self.hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|minutes| minutes.checked_add(self.minutes))
            .and_then(|minutes| minutes.checked_mul(SECONDS_PER_MINUTE))
            .and_then(|seconds| seconds.checked_add(self.seconds))
            .and_then(|seconds| seconds.checked_mul(MILLIS_PER_SECOND))
            .ok_or(Error::Overflow {
                unit: Unit::Milliseconds,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_resolve_to_zero() {
        assert_eq!(Duration::default().resolve(), ResolvedDuration::default());
        let resolved = Duration::new().weeks(1).resolve();
        assert_eq!(resolved.weeks, 1);
        assert_eq!(resolved.days, 0);
    }

    #[test]
    fn folds_units() {
        let resolved = Duration::new()
            .years(2)
            .months(9)
            .weeks(1)
            .days(7)
            .hours(5)
            .minutes(9)
            .seconds(30)
            .resolve();
        assert_eq!(resolved.total_months().unwrap(), 33);
        assert_eq!(resolved.total_days().unwrap(), 14);
        assert_eq!(resolved.total_millis().unwrap(), 18_570_000);
    }

    #[test]
    fn mixed_signs_fold_naturally() {
        let resolved = Duration::new().hours(1).minutes(-90).resolve();
        assert_eq!(resolved.total_millis().unwrap(), -30 * 60 * 1000);
    }

    #[test]
    fn reports_overflow() {
        let resolved = Duration::new().years(i64::MAX).resolve();
        assert_eq!(
            resolved.total_months(),
            Err(Error::Overflow { unit: Unit::Months })
        );
        let resolved = Duration::new().seconds(i64::MAX / 10).resolve();
        assert_eq!(
            resolved.total_millis(),
            Err(Error::Overflow {
                unit: Unit::Milliseconds
            })
        );
    }

    #[test]
    fn fills_absent_fields_from_fallback() {
        let defaults = Duration::new().days(3).hours(1);
        let merged = Duration::new().days(1).or(&defaults);
        assert_eq!(merged, Duration::new().days(1).hours(1));
    }

    #[test]
    fn deserializes_partial_tables() {
        let duration: Duration = toml::from_str("months = 1\nseconds = -5").unwrap();
        assert_eq!(duration, Duration::new().months(1).seconds(-5));
        assert!(toml::from_str::<Duration>("days = 1.5").is_err());
        assert!(toml::from_str::<Duration>("fortnights = 1").is_err());
    }

    #[test]
    fn serializes_only_present_fields() {
        let json = serde_json::to_string(&Duration::new().weeks(2)).unwrap();
        assert_eq!(json, r#"{"weeks":2}"#);
    }
}
