//! Whole calendar-month shifts with day-of-month clamping.
//!
//! Shifting by months keeps the time of day and the day-of-month, except when
//! the target month is too short: the day is then clamped to the last day of
//! that month, so March 31 minus one month lands on February 28 (or 29).

use chrono::{Months, NaiveDateTime};

use crate::error::{Error, Result, Unit};

/// Add `amount` calendar months to `date`. Negative amounts move backwards.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the result is not representable.
///
/// # Examples
///
/// ```
/// use datesub::months::add_months;
/// use chrono::NaiveDate;
///
/// let jan31 = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let feb28 = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// assert_eq!(add_months(jan31, 1).unwrap(), feb28);
/// ```
pub fn add_months(date: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    if amount == 0 {
        return Ok(date);
    }

    let out_of_range = Error::OutOfRange {
        unit: Unit::Months,
        amount,
    };
    let months = u32::try_from(amount.unsigned_abs())
        .map(Months::new)
        .map_err(|_| out_of_range.clone())?;
    let shifted = if amount > 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    log::trace!("Shifted {date} by {amount} months: {shifted:?}");
    shifted.ok_or(out_of_range)
}

/// Subtract `amount` calendar months from `date`. Negative amounts move forwards.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the result is not representable.
pub fn sub_months(date: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    let out_of_range = Error::OutOfRange {
        unit: Unit::Months,
        amount,
    };
    let negated = amount.checked_neg().ok_or(out_of_range.clone())?;
    add_months(date, negated).map_err(|_| out_of_range)
}
