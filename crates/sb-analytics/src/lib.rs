//! # sb-analytics
//!
//! The holiday analytics: everything that turns two countries' holiday
//! lists into scheduling guidance.
//!
//! * [`vacation_blocks`] groups a classified list into multi-day absences;
//! * [`analyze_business_day`] classifies one date and explains it;
//! * [`recommended_meeting_days`] ranks the coming business days;
//! * [`conflict_markers`] tags every holiday date by country;
//! * [`ScheduleSession`] holds the resolved lists, user events, and
//!   settings, and answers all of the above for one user.
//!
//! Every function here is pure and total: the same inputs always give the
//! same output, and empty holiday lists are valid everywhere.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-Day Advisor.
pub mod advisor;

/// Vacation Block Aggregator.
pub mod blocks;

/// Per-date conflict markers for calendar views.
pub mod markers;

/// Localized advisory and recommendation text.
pub mod messages;

/// Meeting-Day Recommender.
pub mod recommender;

/// `ScheduleSession`: request-scoped holiday context.
pub mod session;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use advisor::{analyze_business_day, analyze_business_day_str, DayAdvice, DayStatus, Severity};
pub use blocks::{vacation_blocks, vacation_blocks_within, VacationBlock};
pub use markers::{conflict_markers, ConflictKind};
pub use recommender::{recommended_meeting_days, MeetingDayRecommender, RecommendedDay};
pub use session::{ScheduleSession, SessionBuilder};
