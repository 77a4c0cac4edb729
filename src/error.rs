//! Error types for date arithmetic.

use std::fmt::{self, Display};

/// A calendar or clock unit that an amount is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Calendar months (years are folded into months).
    Months,
    /// Calendar days (weeks are folded into days).
    Days,
    /// Milliseconds (hours, minutes and seconds are folded into milliseconds).
    Milliseconds,
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Months => "months",
            Self::Days => "days",
            Self::Milliseconds => "milliseconds",
        })
    }
}

/// Error returned when a date cannot be normalized or shifted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A millisecond timestamp does not map onto a representable date.
    #[error("timestamp {0}ms is outside the representable date range")]
    TimestampOutOfRange(i64),
    /// Folding a duration into a single unit overflowed.
    #[error("duration overflowed when converted to {unit}")]
    Overflow {
        /// The unit being accumulated when the overflow happened.
        unit: Unit,
    },
    /// Shifting by the given amount leaves the representable date range.
    #[error("applying {amount} {unit} leaves the representable date range")]
    OutOfRange {
        /// The unit of the shift.
        unit: Unit,
        /// The signed amount as passed by the caller, before any negation.
        amount: i64,
    },
}

/// Result alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;
