//! Shifting a date by a composite [`Duration`].
//!
//! Calendar units are applied first and in order, months (with years folded
//! in) then days (with weeks folded in), so month clamping is relative to the
//! original date. Hours, minutes and seconds are then applied as a raw number
//! of milliseconds, which lets out-of-range values such as 90 minutes carry
//! naturally.

use chrono::{NaiveDateTime, TimeDelta};

use crate::date::{to_date, DateInput};
use crate::days::{add_days, sub_days};
use crate::duration::Duration;
use crate::error::{Error, Result, Unit};
use crate::months::{add_months, sub_months};

/// Subtract a duration from a date.
///
/// # Errors
///
/// Returns an error if `date` is an unrepresentable timestamp, if a folded
/// amount overflows, or if the result leaves the representable date range.
///
/// # Examples
///
/// ```
/// use datesub::{sub, Duration};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2017, 6, 15).unwrap().and_hms_opt(15, 29, 20).unwrap();
/// let duration = Duration::new()
///     .years(2)
///     .months(9)
///     .weeks(1)
///     .days(7)
///     .hours(5)
///     .minutes(9)
///     .seconds(30);
/// assert_eq!(
///     sub(date, &duration).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 9, 1).unwrap().and_hms_opt(10, 19, 50).unwrap()
/// );
/// ```
pub fn sub(date: impl Into<DateInput>, duration: &Duration) -> Result<NaiveDateTime> {
    let date = to_date(date)?;
    let resolved = duration.resolve();
    log::debug!("Subtracting {resolved:?} from {date}...");

    let without_months = sub_months(date, resolved.total_months()?)?;
    let without_days = sub_days(without_months, resolved.total_days()?)?;
    let result = shift_millis(without_days, resolved.total_millis()?, Direction::Backward)?;
    log::trace!("Subtracted {resolved:?} from {date}: {result}");
    Ok(result)
}

/// Add a duration to a date, applying units in the same order as [`sub`].
///
/// # Errors
///
/// Returns an error if `date` is an unrepresentable timestamp, if a folded
/// amount overflows, or if the result leaves the representable date range.
pub fn add(date: impl Into<DateInput>, duration: &Duration) -> Result<NaiveDateTime> {
    let date = to_date(date)?;
    let resolved = duration.resolve();
    log::debug!("Adding {resolved:?} to {date}...");

    let with_months = add_months(date, resolved.total_months()?)?;
    let with_days = add_days(with_months, resolved.total_days()?)?;
    let result = shift_millis(with_days, resolved.total_millis()?, Direction::Forward)?;
    log::trace!("Added {resolved:?} to {date}: {result}");
    Ok(result)
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn shift_millis(date: NaiveDateTime, millis: i64, direction: Direction) -> Result<NaiveDateTime> {
    let out_of_range = Error::OutOfRange {
        unit: Unit::Milliseconds,
        amount: millis,
    };
    let delta = TimeDelta::try_milliseconds(millis).ok_or(out_of_range.clone())?;
    match direction {
        Direction::Forward => date.checked_add_signed(delta),
        Direction::Backward => date.checked_sub_signed(delta),
    }
    .ok_or(out_of_range)
}
