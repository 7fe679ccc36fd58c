//! # sb-holidays
//!
//! Holiday records and everything that happens to them before analysis:
//! ingestion from a holiday source, classification into real public
//! holidays versus named observances, and merging of user-entered events.
//!
//! The pipeline is
//!
//! ```text
//! HolidaySource ─▶ Vec<HolidayRecord> ─▶ ingest (tag HolidayKind)
//!               ─▶ merge_user_events  ─▶ PublicHolidays (classifier filter)
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Offline rule-based holiday lists for Korea and Japan.
pub mod builtin;

/// A calendar backed by a list of holiday records.
pub mod calendar;

/// Public-holiday classification and the `PublicHolidays` pipeline stage.
pub mod classifier;

/// `HolidayRecord` and `HolidayKind`.
pub mod record;

/// Holiday source adapter seam and feed parsing.
pub mod source;

/// User-entered events and their merge into holiday lists.
pub mod user_event;

pub use builtin::BuiltinSource;
pub use calendar::RecordCalendar;
pub use classifier::{
    ingest, is_actual_public_holiday, ClassificationTable, PublicHolidays, EXCLUDED_OBSERVANCES,
};
pub use record::{HolidayKind, HolidayRecord};
pub use source::{feed_url, fetch_or_empty, parse_feed, HolidaySource, MemorySource};
pub use user_event::{merge_user_events, EventType, UserEvent};
