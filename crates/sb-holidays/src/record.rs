//! `HolidayRecord`: one dated entry of a country's holiday list.
//!
//! The serde shape follows the `date.nager.at` v3 `PublicHolidays` payload
//! (`date`, `localName`, `name`, `countryCode`, ...).  Fields the analytics
//! never look at (`fixed`, `global`, `counties`, `launchYear`, `types`, or
//! anything a future feed adds) are kept verbatim in [`HolidayRecord::provenance`].

use sb_core::Country;
use sb_time::Date;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Whether a holiday actually stops business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A non-working public holiday.
    PublicHoliday,
    /// A named commemorative day on which business continues.
    Observance,
}

/// A dated holiday entry for one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// Calendar date.
    pub date: Date,
    /// Display name in the issuing country's language.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub local_name: String,
    /// English name, when the feed supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issuing country (alpha-2 code as delivered by the source).
    pub country_code: String,
    /// Explicit classification attached at ingestion, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<HolidayKind>,
    /// Remaining feed fields, carried through unexamined.
    #[serde(flatten)]
    pub provenance: Map<String, Value>,
}

impl HolidayRecord {
    /// Create an untagged record with no English name and no provenance.
    pub fn new(date: Date, local_name: impl Into<String>, country: Country) -> Self {
        Self {
            date,
            local_name: local_name.into(),
            name: None,
            country_code: country.code().to_string(),
            kind: None,
            provenance: Map::new(),
        }
    }

    /// Set the English name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an explicit classification.
    pub fn with_kind(mut self, kind: HolidayKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// The issuing country, if the code is one of the supported pair.
    pub fn country(&self) -> Option<Country> {
        Country::from_code(&self.country_code).ok()
    }

    /// Key used by the classification table: the English name when present,
    /// otherwise the local name.
    pub fn stable_key(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.local_name)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_feed_entry_keeps_provenance() {
        let json = r#"{
            "date": "2026-05-05",
            "localName": "こどもの日",
            "name": "Children's Day",
            "countryCode": "JP",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        }"#;
        let r: HolidayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.date, Date::from_ymd(2026, 5, 5).unwrap());
        assert_eq!(r.local_name, "こどもの日");
        assert_eq!(r.name.as_deref(), Some("Children's Day"));
        assert_eq!(r.country(), Some(Country::Japan));
        assert_eq!(r.kind, None);
        assert_eq!(r.provenance.get("global"), Some(&Value::Bool(true)));
        assert_eq!(r.provenance.get("types"), Some(&serde_json::json!(["Public"])));
    }

    #[test]
    fn null_local_name_becomes_empty() {
        let json = r#"{"date": "2026-01-01", "localName": null, "countryCode": "KR"}"#;
        let r: HolidayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.local_name, "");
        assert_eq!(r.stable_key(), "");
    }

    #[test]
    fn serialize_skips_absent_optionals() {
        let r = HolidayRecord::new(Date::from_ymd(2026, 3, 1).unwrap(), "삼일절", Country::Korea);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"date": "2026-03-01", "localName": "삼일절", "countryCode": "KR"})
        );
    }

    #[test]
    fn stable_key_prefers_english_name() {
        let r = HolidayRecord::new(Date::from_ymd(2026, 5, 8).unwrap(), "어버이날", Country::Korea)
            .with_name("Parents' Day");
        assert_eq!(r.stable_key(), "Parents' Day");
    }
}
