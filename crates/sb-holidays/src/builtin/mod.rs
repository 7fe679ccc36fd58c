//! Offline, rule-based holiday lists.
//!
//! [`BuiltinSource`] computes the solar-calendar public holidays of Korea
//! and Japan, including substitute holidays, without any network access.
//! Korean lunar-calendar holidays (Seollal, Buddha's Birthday, Chuseok) are
//! proclaimed yearly and are not included; use a feed for complete data.

use sb_core::errors::{Error, Result};
use sb_core::Country;
use sb_time::Date;
use serde_json::{json, Map};

use crate::record::HolidayRecord;
use crate::source::HolidaySource;

/// Japanese national holidays.
pub mod japan;

/// South Korean public holidays.
pub mod south_korea;

/// First year with built-in rules (the Japanese holiday law of 1948).
pub const FIRST_YEAR: u16 = 1948;

/// Last year with built-in rules; the equinox approximation stops here.
pub const LAST_YEAR: u16 = 2099;

/// Rule-based holiday source for Korea and Japan.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl HolidaySource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn fetch_holidays(&self, country: Country, year: u16) -> Result<Vec<HolidayRecord>> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(Error::Source(format!("no built-in rules for year {year}")));
        }
        let mut records = match country {
            Country::Korea => south_korea::holidays(year)?,
            Country::Japan => japan::holidays(year)?,
        };
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}

/// Build a record shaped like a feed entry.
fn record(date: Date, local_name: &str, name: &str, country: Country, public: bool) -> HolidayRecord {
    let mut provenance = Map::new();
    provenance.insert("global".into(), json!(true));
    provenance.insert(
        "types".into(),
        json!([if public { "Public" } else { "Observance" }]),
    );
    HolidayRecord {
        provenance,
        ..HolidayRecord::new(date, local_name, country).with_name(name)
    }
}

/// First date after `date` not present in `taken` (and, when asked, not on
/// a weekend).
fn next_free_day(date: Date, taken: &[Date], skip_weekends: bool) -> Result<Date> {
    let mut d = date.add_days(1)?;
    while taken.contains(&d) || (skip_weekends && d.weekday().is_weekend()) {
        d = d.add_days(1)?;
    }
    Ok(d)
}
