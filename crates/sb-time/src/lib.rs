//! # sb-time
//!
//! Date, weekday, and calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// Calendars composed from other calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendars::joint_calendar::JointCalendar;
pub use date::Date;
pub use weekday::Weekday;
