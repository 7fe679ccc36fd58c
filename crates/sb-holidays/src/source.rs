//! Holiday source adapter seam.
//!
//! Fetching and caching remote calendars is the job of an adapter outside
//! this crate; the analytics only need a list of [`HolidayRecord`]s per
//! country and year.  This module defines the adapter trait, the fail-soft
//! wrapper every caller goes through, and the parser for the
//! `date.nager.at` v3 payload that adapters typically fetch.

use std::collections::HashMap;

use sb_core::errors::{Error, Result};
use sb_core::Country;

use crate::record::HolidayRecord;

/// Base URL of the public-holiday feed the records are modelled on.
pub const NAGER_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Something that can produce the holiday list of a country for a year.
pub trait HolidaySource: Send + Sync {
    /// Human-readable name used in log messages.
    fn name(&self) -> &str;

    /// Return the holidays of `country` in `year`.
    fn fetch_holidays(&self, country: Country, year: u16) -> Result<Vec<HolidayRecord>>;
}

/// Fetch from `source`, degrading any failure to an empty list.
///
/// The analytics are correct (if less informative) with an empty list, so a
/// broken feed must never take the caller down.
pub fn fetch_or_empty(source: &dyn HolidaySource, country: Country, year: u16) -> Vec<HolidayRecord> {
    match source.fetch_holidays(country, year) {
        Ok(records) => {
            tracing::debug!(
                source = source.name(),
                country = country.code(),
                year,
                count = records.len(),
                "fetched holidays"
            );
            records
        }
        Err(err) => {
            tracing::warn!(
                source = source.name(),
                country = country.code(),
                year,
                error = %err,
                "holiday fetch failed, continuing with an empty list"
            );
            Vec::new()
        }
    }
}

/// URL of the feed for `country` and `year`.
pub fn feed_url(country: Country, year: u16) -> String {
    format!("{NAGER_BASE_URL}/PublicHolidays/{year}/{}", country.code())
}

/// Parse a `PublicHolidays` feed payload (a JSON array of holiday objects).
///
/// The result is ordered by date; same-date entries keep their feed order.
pub fn parse_feed(json: &str) -> Result<Vec<HolidayRecord>> {
    let mut records: Vec<HolidayRecord> =
        serde_json::from_str(json).map_err(|e| Error::Parse(format!("holiday feed: {e}")))?;
    records.sort_by_key(|r| r.date);
    Ok(records)
}

/// An in-memory source holding pre-resolved lists.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: HashMap<(Country, u16), Vec<HolidayRecord>>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the list of `country` for `year`.
    pub fn with_list(mut self, country: Country, year: u16, records: Vec<HolidayRecord>) -> Self {
        self.lists.insert((country, year), records);
        self
    }
}

impl HolidaySource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch_holidays(&self, country: Country, year: u16) -> Result<Vec<HolidayRecord>> {
        self.lists
            .get(&(country, year))
            .cloned()
            .ok_or_else(|| Error::Source(format!("no {} holidays loaded for {year}", country.code())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_time::Date;

    #[derive(Debug)]
    struct Broken;

    impl HolidaySource for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn fetch_holidays(&self, _country: Country, _year: u16) -> Result<Vec<HolidayRecord>> {
            Err(Error::Source("connection refused".into()))
        }
    }

    #[test]
    fn url_format() {
        assert_eq!(
            feed_url(Country::Korea, 2026),
            "https://date.nager.at/api/v3/PublicHolidays/2026/KR"
        );
    }

    #[test]
    fn failures_degrade_to_empty() {
        assert!(fetch_or_empty(&Broken, Country::Japan, 2026).is_empty());
        assert!(fetch_or_empty(&MemorySource::new(), Country::Japan, 2026).is_empty());
    }

    #[test]
    fn memory_source_returns_registered_list() {
        let d = Date::from_ymd(2026, 1, 1).unwrap();
        let source = MemorySource::new().with_list(
            Country::Korea,
            2026,
            vec![HolidayRecord::new(d, "새해", Country::Korea)],
        );
        let list = fetch_or_empty(&source, Country::Korea, 2026);
        assert_eq!(list.len(), 1);
        assert!(source.fetch_holidays(Country::Korea, 2027).is_err());
    }

    #[test]
    fn parse_feed_sorts_by_date() {
        let json = r#"[
            {"date": "2026-03-01", "localName": "삼일절", "name": "Independence Movement Day", "countryCode": "KR"},
            {"date": "2026-01-01", "localName": "새해", "name": "New Year's Day", "countryCode": "KR"}
        ]"#;
        let records = parse_feed(json).unwrap();
        assert_eq!(records[0].local_name, "새해");
        assert_eq!(records[1].local_name, "삼일절");
    }

    #[test]
    fn parse_feed_rejects_bad_payloads() {
        assert!(matches!(parse_feed("{}"), Err(Error::Parse(_))));
        assert!(matches!(
            parse_feed(r#"[{"date": "2026-13-01", "localName": "x", "countryCode": "KR"}]"#),
            Err(Error::Parse(_))
        ));
    }
}
