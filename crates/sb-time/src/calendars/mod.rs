//! Calendars composed from other calendars.

/// Joint calendar (combination of several calendars).
pub mod joint_calendar;
