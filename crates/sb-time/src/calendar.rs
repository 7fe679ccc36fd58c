//! `Calendar` trait.
//!
//! A calendar only knows which dates are public holidays.  Weekends are a
//! property of the [`Weekday`](crate::Weekday): a public holiday falling on
//! a Saturday is still a public holiday, which matters when judging how
//! close a working day sits to a day off.

use crate::date::Date;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"South Korea"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a public (non-working) holiday, whatever
    /// its weekday.
    fn is_holiday(&self, date: Date) -> bool;
}
