//! `Date` type.
//!
//! Dates are stored as a serial number of days.  Serial 1 is January 1,
//! 1900 (a Monday); the supported range is 1900-01-01 to 2199-12-31.
//!
//! The textual form is always ISO 8601 (`YYYY-MM-DD`): `Display`,
//! `FromStr`, and the serde representation all use it, so a `Date` can be
//! read straight out of a holiday feed.

use std::str::FromStr;

use sb_core::errors::{Error, Result};
use sb_core::utilities::data_parsers::parse_iso_date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    pub fn parse_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::Date(format!("{s:?} is not an ISO date (YYYY-MM-DD)")))?;
        Self::from_ymd(y, m, d)
    }

    /// Today's date in the local time zone.
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        match (self.0 - 1).rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) if serial > 0 && Date(serial) <= Self::MAX => Ok(Date(serial)),
            _ => Err(Error::Date(format!("date arithmetic: {self} + {n} days out of range"))),
        }
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Monday, 2026, 1)` returns the
    /// second Monday of January 2026 (2026-01-12).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month, or if the month is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(value.year())
            .map_err(|_| Error::Date(format!("year {} out of range", value.year())))?;
        Date::from_ymd(year, value.month() as u8, value.day() as u8)
    }
}

impl From<Date> for chrono::NaiveDate {
    fn from(value: Date) -> Self {
        let (y, m, d) = ymd_from_serial(value.0);
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
            .unwrap_or(chrono::NaiveDate::MIN)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year); 1900 itself is not a leap year.
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
