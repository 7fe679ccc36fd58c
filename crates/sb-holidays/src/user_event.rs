//! User-entered events.
//!
//! Events are persisted elsewhere and handed in as a list.  Before the
//! meeting-day recommender runs they are folded into the holiday lists of
//! the countries their scope covers, with the event title standing in for
//! the holiday name.

use sb_core::{Country, EventBlocking, EventScope};
use sb_time::Date;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::{HolidayKind, HolidayRecord};

/// What a user event is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A meeting or other work commitment.
    Meeting,
    /// A day off (company holiday, vacation).
    Holiday,
    /// A personal day off.
    Personal,
    /// A deadline.
    Deadline,
}

impl EventType {
    /// Return `true` for event types that mean someone is away.
    pub fn is_absence(&self) -> bool {
        matches!(self, EventType::Holiday | EventType::Personal)
    }

    fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Holiday => "holiday",
            EventType::Personal => "personal",
            EventType::Deadline => "deadline",
        }
    }
}

/// An event entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    /// Caller-assigned unique identifier.
    pub id: String,
    /// Calendar date of the event.
    pub date: Date,
    /// Free-text title.
    pub title: String,
    /// Event type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Countries the event applies to.
    pub country_code: EventScope,
}

impl UserEvent {
    /// Return `true` if the event blocks its day under `policy`.
    pub fn blocks(&self, policy: EventBlocking) -> bool {
        match policy {
            EventBlocking::AllTypes => true,
            EventBlocking::HolidayLikeOnly => self.event_type.is_absence(),
        }
    }

    /// Convert into a holiday record for `country`.
    ///
    /// The record is tagged explicitly, so the name heuristic never sees
    /// the free-text title.
    pub fn to_record(&self, country: Country, policy: EventBlocking) -> HolidayRecord {
        let kind = if self.blocks(policy) {
            HolidayKind::PublicHoliday
        } else {
            HolidayKind::Observance
        };
        let mut provenance = Map::new();
        provenance.insert("eventId".into(), Value::String(self.id.clone()));
        provenance.insert("eventType".into(), Value::String(self.event_type.as_str().into()));
        HolidayRecord {
            date: self.date,
            local_name: self.title.clone(),
            name: None,
            country_code: country.code().to_string(),
            kind: Some(kind),
            provenance,
        }
    }
}

/// Fold the events whose scope covers `country` into `holidays`.
///
/// The result is ordered by date; on a shared date the feed records come
/// before the events, which keep their input order.
pub fn merge_user_events(
    holidays: &[HolidayRecord],
    events: &[UserEvent],
    country: Country,
    policy: EventBlocking,
) -> Vec<HolidayRecord> {
    let mut merged = holidays.to_vec();
    merged.extend(
        events
            .iter()
            .filter(|e| e.country_code.includes(country))
            .map(|e| e.to_record(country, policy)),
    );
    merged.sort_by_key(|r| r.date);
    merged
}
