//! # schedule-bridge
//!
//! Compares the public-holiday calendars of South Korea and Japan and turns
//! them into scheduling guidance for teams working across the two.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sb-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! schedule-bridge = "0.1"
//! ```
//!
//! ```rust
//! use schedule_bridge::analytics::{DayStatus, SessionBuilder};
//! use schedule_bridge::core::Country;
//! use schedule_bridge::holidays::BuiltinSource;
//! use schedule_bridge::time::Date;
//!
//! let session = SessionBuilder::new()
//!     .reference_date(Date::from_ymd(2026, 2, 9).unwrap())
//!     .fetch_from(&BuiltinSource, 2026..=2026)
//!     .build()
//!     .unwrap();
//!
//! // National Foundation Day: Japan is off, Korea is working.
//! let advice = session.advice(Date::from_ymd(2026, 2, 11).unwrap());
//! assert_eq!(advice.status, DayStatus::JpOnly);
//!
//! for day in session.recommended_days() {
//!     assert!(!day.date.weekday().is_weekend_adjacent());
//! }
//! assert!(!session.vacation_blocks(Country::Korea).is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, countries, and languages.
pub use sb_core as core;

/// Dates, weekdays, and calendars.
pub use sb_time as time;

/// Holiday records, classification, sources, and user events.
pub use sb_holidays as holidays;

/// Vacation blocks, business-day advice, and meeting-day recommendations.
pub use sb_analytics as analytics;

/// Email templates and AI drafting prompts.
pub use sb_drafting as drafting;
