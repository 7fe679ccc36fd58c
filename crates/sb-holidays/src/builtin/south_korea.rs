//! South Korean public holidays (공휴일) on the solar calendar.
//!
//! Seollal, Buddha's Birthday and Chuseok follow the lunar calendar and
//! are not computed here.  The list also carries the commemorative days the
//! public feed reports (Labour Day, Parents' Day, ...), untagged, so they
//! go through classification exactly like feed data.  Constitution Day was a
//! day off until 2007; those records carry an explicit tag because its name
//! is on the observance list.

use sb_core::errors::Result;
use sb_core::Country;
use sb_time::Date;

use super::{next_free_day, record};
use crate::classifier::EXCLUDED_OBSERVANCES;
use crate::record::{HolidayKind, HolidayRecord};

/// First year in which a holiday gets a substitute when it falls on a
/// weekend, or `None` if it never does.
fn substitute_since(month: u8, day: u8) -> Option<u16> {
    match (month, day) {
        (5, 5) => Some(2014),
        (3, 1) | (8, 15) | (10, 3) | (10, 9) => Some(2021),
        (12, 25) => Some(2023),
        _ => None,
    }
}

/// The holidays and observances of `year`, unsorted.
pub(super) fn holidays(year: u16) -> Result<Vec<HolidayRecord>> {
    let y = year;

    let mut public: Vec<(u8, u8, &str, &str)> = vec![
        (1, 1, "새해", "New Year's Day"),
        (3, 1, "삼일절", "Independence Movement Day"),
        (5, 5, "어린이날", "Children's Day"),
        (6, 6, "현충일", "Memorial Day"),
        (8, 15, "광복절", "Liberation Day"),
        (10, 3, "개천절", "National Foundation Day"),
    ];
    if y <= 1990 || y >= 2013 {
        public.push((10, 9, "한글날", "Hangul Day"));
    }
    public.push((12, 25, "기독탄신일", "Christmas Day"));

    let mut observances: Vec<(u8, u8, &str, &str)> = vec![
        (5, 1, "노동절", "Labour Day"),
        (5, 8, "어버이날", "Parents' Day"),
        (5, 15, "스승의날", "Teachers' Day"),
        (10, 1, "국군의날", "Armed Forces Day"),
    ];
    if y >= 2008 {
        observances.push((7, 17, "제헌절", "Constitution Day"));
    } else {
        public.push((7, 17, "제헌절", "Constitution Day"));
    }

    let mut records = Vec::with_capacity(public.len() + observances.len() + 4);
    let mut taken = Vec::with_capacity(public.len());
    for &(m, d, local, name) in &public {
        let date = Date::from_ymd(y, m, d)?;
        taken.push(date);
        let mut r = record(date, local, name, Country::Korea, true);
        if EXCLUDED_OBSERVANCES.contains(&local) {
            r = r.with_kind(HolidayKind::PublicHoliday);
        }
        records.push(r);
    }
    for &(m, d, local, name) in &observances {
        let date = Date::from_ymd(y, m, d)?;
        records.push(record(date, local, name, Country::Korea, false));
    }

    // ── Substitute holidays ───────────────────────────────────────────────────

    for &(m, d, _, _) in &public {
        let eligible = substitute_since(m, d).is_some_and(|since| y >= since);
        let date = Date::from_ymd(y, m, d)?;
        if eligible && date.weekday().is_weekend() {
            let substitute = next_free_day(date, &taken, true)?;
            taken.push(substitute);
            records.push(record(substitute, "대체공휴일", "Substitute Holiday", Country::Korea, true));
        }
    }

    Ok(records)
}
