//! Analytics settings.
//!
//! [`Settings`] carries every tunable threshold of the holiday analytics:
//! the vacation-block gap, the recommendation window and scores, and the
//! user-event blocking policy.  It is a plain value passed into the
//! computations (or held by a session); there is no process-wide instance.
//!
//! Settings can be deserialized from any serde format (missing fields fall
//! back to the defaults) or read from `SB_*` environment variables with
//! [`Settings::from_env`].

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::lang::Lang;

/// Which user events block days in the meeting-day recommender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventBlocking {
    /// Every merged user event blocks its day, whatever its type.
    #[default]
    AllTypes,
    /// Only `holiday` and `personal` events block; meetings and deadlines are
    /// merged as non-blocking observances.
    HolidayLikeOnly,
}

impl FromStr for EventBlocking {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "all_types" => Ok(EventBlocking::AllTypes),
            "holiday_like" | "holiday_like_only" => Ok(EventBlocking::HolidayLikeOnly),
            other => Err(Error::Config(format!("unknown event blocking policy {other:?}"))),
        }
    }
}

/// Longest scan window and holiday distance accepted by
/// [`Settings::validate`], in days.
pub const MAX_SCAN_DAYS: i32 = 366;

/// Tunable parameters of the holiday analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum day gap between consecutive holidays of one vacation block.
    pub block_gap_days: i32,
    /// Number of days after the reference date scanned for meeting days.
    pub window_days: i32,
    /// Maximum number of recommended meeting days.
    pub max_recommendations: usize,
    /// Score of a candidate day with no holiday nearby.
    pub full_score: u32,
    /// Score of a candidate day with a holiday `nearby_distance_days` away.
    pub nearby_score: u32,
    /// Distance (in days, either direction) that triggers the downgrade.
    pub nearby_distance_days: i32,
    /// User-event blocking policy.
    pub event_blocking: EventBlocking,
    /// Default output language.
    pub language: Lang,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_gap_days: 3,
            window_days: 14,
            max_recommendations: 3,
            full_score: 100,
            nearby_score: 70,
            nearby_distance_days: 2,
            event_blocking: EventBlocking::AllTypes,
            language: Lang::Ko,
        }
    }
}

impl Settings {
    /// Load settings from the environment, reading a `.env` file first if
    /// one exists.
    ///
    /// Recognised variables: `SB_BLOCK_GAP_DAYS`, `SB_WINDOW_DAYS`,
    /// `SB_MAX_RECOMMENDATIONS`, `SB_FULL_SCORE`, `SB_NEARBY_SCORE`,
    /// `SB_NEARBY_DISTANCE_DAYS`, `SB_EVENT_BLOCKING`, `SB_LANGUAGE`.
    /// Unset variables keep their defaults; set-but-invalid ones are errors.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let settings = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::debug!(?settings, "loaded analytics settings from environment");
        Ok(settings)
    }

    /// Build settings from an arbitrary key lookup (used by [`from_env`]).
    ///
    /// [`from_env`]: Settings::from_env
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut s = Self::default();
        if let Some(v) = lookup("SB_BLOCK_GAP_DAYS") {
            s.block_gap_days = parse_var("SB_BLOCK_GAP_DAYS", &v)?;
        }
        if let Some(v) = lookup("SB_WINDOW_DAYS") {
            s.window_days = parse_var("SB_WINDOW_DAYS", &v)?;
        }
        if let Some(v) = lookup("SB_MAX_RECOMMENDATIONS") {
            s.max_recommendations = parse_var("SB_MAX_RECOMMENDATIONS", &v)?;
        }
        if let Some(v) = lookup("SB_FULL_SCORE") {
            s.full_score = parse_var("SB_FULL_SCORE", &v)?;
        }
        if let Some(v) = lookup("SB_NEARBY_SCORE") {
            s.nearby_score = parse_var("SB_NEARBY_SCORE", &v)?;
        }
        if let Some(v) = lookup("SB_NEARBY_DISTANCE_DAYS") {
            s.nearby_distance_days = parse_var("SB_NEARBY_DISTANCE_DAYS", &v)?;
        }
        if let Some(v) = lookup("SB_EVENT_BLOCKING") {
            s.event_blocking = v.parse()?;
        }
        if let Some(v) = lookup("SB_LANGUAGE") {
            s.language = Lang::from_tag(&v).map_err(|e| Error::Config(e.to_string()))?;
        }
        s.validate()?;
        Ok(s)
    }

    /// Check the internal consistency of the settings.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.block_gap_days >= 0,
            "block_gap_days must be non-negative, got {}",
            self.block_gap_days
        );
        crate::ensure!(
            (1..=MAX_SCAN_DAYS).contains(&self.window_days),
            "window_days must be in 1..={MAX_SCAN_DAYS}, got {}",
            self.window_days
        );
        crate::ensure!(
            (1..=MAX_SCAN_DAYS).contains(&self.nearby_distance_days),
            "nearby_distance_days must be in 1..={MAX_SCAN_DAYS}, got {}",
            self.nearby_distance_days
        );
        crate::ensure!(
            self.nearby_score <= self.full_score,
            "nearby_score ({}) must not exceed full_score ({})",
            self.nearby_score,
            self.full_score
        );
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key}: cannot parse {value:?}")))
}
