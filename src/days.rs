//! Whole calendar-day shifts.

use chrono::{Days, NaiveDateTime};

use crate::error::{Error, Result, Unit};

/// Add `amount` calendar days to `date`, keeping the time of day.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the result is not representable.
///
/// # Examples
///
/// ```
/// use datesub::days::add_days;
/// use chrono::NaiveDate;
///
/// let eve = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let new_year = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// assert_eq!(add_days(eve, 1).unwrap(), new_year);
/// ```
pub fn add_days(date: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    if amount == 0 {
        return Ok(date);
    }

    let days = Days::new(amount.unsigned_abs());
    let shifted = if amount > 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };
    log::trace!("Shifted {date} by {amount} days: {shifted:?}");
    shifted.ok_or(Error::OutOfRange {
        unit: Unit::Days,
        amount,
    })
}

/// Subtract `amount` calendar days from `date`. Negative amounts move forwards.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if the result is not representable.
pub fn sub_days(date: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
    let out_of_range = Error::OutOfRange {
        unit: Unit::Days,
        amount,
    };
    let negated = amount.checked_neg().ok_or(out_of_range.clone())?;
    add_days(date, negated).map_err(|_| out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(
            sub_days(at(2020, 1, 1, 0, 0, 0), 1).unwrap(),
            at(2019, 12, 31, 0, 0, 0)
        );
    }

    #[test]
    fn crosses_leap_day() {
        assert_eq!(
            sub_days(at(2020, 3, 1, 6, 45, 0), 2).unwrap(),
            at(2020, 2, 28, 6, 45, 0)
        );
    }

    #[test]
    fn keeps_time_of_day() {
        assert_eq!(
            sub_days(at(2014, 9, 15, 15, 29, 20), 14).unwrap(),
            at(2014, 9, 1, 15, 29, 20)
        );
    }

    #[test]
    fn negative_amounts_add() {
        let date = at(2021, 2, 28, 0, 0, 0);
        assert_eq!(sub_days(date, -1).unwrap(), at(2021, 3, 1, 0, 0, 0));
        assert_eq!(sub_days(date, -1).unwrap(), add_days(date, 1).unwrap());
    }

    #[test]
    fn reports_out_of_range() {
        let date = at(2000, 1, 1, 0, 0, 0);
        assert_eq!(
            sub_days(date, i64::MAX),
            Err(Error::OutOfRange {
                unit: Unit::Days,
                amount: i64::MAX
            })
        );
        assert_eq!(
            sub_days(date, i64::MIN),
            Err(Error::OutOfRange {
                unit: Unit::Days,
                amount: i64::MIN
            })
        );
    }
}
