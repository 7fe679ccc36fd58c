//! Business-Day Advisor.
//!
//! Classifies a single date against both countries' holiday lists.  The
//! rules are applied in order and the first match wins:
//!
//! 1. Saturday or Sunday → [`DayStatus::Holiday`], whatever the lists say;
//! 2. a real public holiday in both countries → [`DayStatus::Match`];
//! 3. in Korea only → [`DayStatus::KrOnly`];
//! 4. in Japan only → [`DayStatus::JpOnly`];
//! 5. otherwise → [`DayStatus::Work`].

use std::fmt;

use sb_core::errors::Result;
use sb_core::Lang;
use sb_holidays::HolidayRecord;
use sb_time::Date;
use serde::{Deserialize, Serialize};

use crate::messages::advice_message;

/// Classification of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    /// Normal business day in both countries.
    Work,
    /// Weekend.
    Holiday,
    /// Public holiday in both countries.
    Match,
    /// Public holiday in Korea only.
    KrOnly,
    /// Public holiday in Japan only.
    JpOnly,
}

impl DayStatus {
    /// All statuses.
    pub const ALL: [DayStatus; 5] = [
        DayStatus::Work,
        DayStatus::Holiday,
        DayStatus::Match,
        DayStatus::KrOnly,
        DayStatus::JpOnly,
    ];

    /// Wire name (`"work"`, `"holiday"`, `"match"`, `"kr-only"`, `"jp-only"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Work => "work",
            DayStatus::Holiday => "holiday",
            DayStatus::Match => "match",
            DayStatus::KrOnly => "kr-only",
            DayStatus::JpOnly => "jp-only",
        }
    }

    /// Presentation hint for this status.
    pub fn severity(&self) -> Severity {
        match self {
            DayStatus::Work => Severity::Normal,
            DayStatus::Holiday => Severity::Rest,
            DayStatus::Match => Severity::Critical,
            DayStatus::KrOnly | DayStatus::JpOnly => Severity::Caution,
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI colour hint; carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Green.
    Normal,
    /// Gray.
    Rest,
    /// Amber.
    Caution,
    /// Red.
    Critical,
}

impl Severity {
    /// Colour name.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Normal => "green",
            Severity::Rest => "gray",
            Severity::Caution => "amber",
            Severity::Critical => "red",
        }
    }
}

/// Advice for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAdvice {
    /// The analysed date.
    pub date: Date,
    /// Classification.
    pub status: DayStatus,
    /// Advisory text in the requested language.
    pub message: String,
    /// Presentation hint.
    pub severity: Severity,
    /// Names of the Korean public holidays on this date, `", "`-joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kr_holiday: Option<String>,
    /// Names of the Japanese public holidays on this date, `", "`-joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jp_holiday: Option<String>,
}

/// Distinct names of the real public holidays on `date`, or `None` if there
/// are none.
fn holiday_names(date: Date, records: &[HolidayRecord]) -> Option<String> {
    let mut names: Vec<&str> = Vec::new();
    let mut found = false;
    for r in records.iter().filter(|r| r.date == date && r.is_public_holiday()) {
        found = true;
        if !r.local_name.is_empty() && !names.contains(&r.local_name.as_str()) {
            names.push(&r.local_name);
        }
    }
    found.then(|| names.join(", "))
}

/// Classify `target` against the Korean and Japanese holiday lists.
///
/// Only records passing the classifier count; observances on `target` are
/// ignored.
pub fn analyze_business_day(
    target: Date,
    kr: &[HolidayRecord],
    jp: &[HolidayRecord],
    lang: Lang,
) -> DayAdvice {
    let kr_holiday = holiday_names(target, kr);
    let jp_holiday = holiday_names(target, jp);

    let status = if target.weekday().is_weekend() {
        DayStatus::Holiday
    } else {
        match (kr_holiday.is_some(), jp_holiday.is_some()) {
            (true, true) => DayStatus::Match,
            (true, false) => DayStatus::KrOnly,
            (false, true) => DayStatus::JpOnly,
            (false, false) => DayStatus::Work,
        }
    };

    DayAdvice {
        date: target,
        status,
        message: advice_message(status, lang).to_string(),
        severity: status.severity(),
        kr_holiday,
        jp_holiday,
    }
}

/// [`analyze_business_day`] for an ISO `YYYY-MM-DD` string.
///
/// # Errors
/// Returns [`Error::Date`](sb_core::Error::Date) if `target` is not a valid
/// ISO calendar date.
pub fn analyze_business_day_str(
    target: &str,
    kr: &[HolidayRecord],
    jp: &[HolidayRecord],
    lang: Lang,
) -> Result<DayAdvice> {
    let date = Date::parse_iso(target)?;
    Ok(analyze_business_day(date, kr, jp, lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::{Country, Error};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn kr(d: Date, name: &str) -> HolidayRecord {
        HolidayRecord::new(d, name, Country::Korea)
    }

    fn jp(d: Date, name: &str) -> HolidayRecord {
        HolidayRecord::new(d, name, Country::Japan)
    }

    #[test]
    fn weekend_wins_over_holidays() {
        // 2026-08-15 is a Saturday and Liberation Day in Korea.
        let d = date(2026, 8, 15);
        let advice = analyze_business_day(d, &[kr(d, "광복절")], &[], Lang::Ko);
        assert_eq!(advice.status, DayStatus::Holiday);
        assert_eq!(advice.severity, Severity::Rest);
        assert_eq!(advice.kr_holiday.as_deref(), Some("광복절"));
    }

    #[test]
    fn weekend_with_empty_lists() {
        assert_eq!(
            analyze_business_day(date(2026, 2, 7), &[], &[], Lang::Ja).status,
            DayStatus::Holiday
        );
    }

    #[test]
    fn both_countries() {
        let d = date(2026, 2, 11);
        let advice = analyze_business_day(d, &[kr(d, "설날")], &[jp(d, "建国記念の日")], Lang::Ko);
        assert_eq!(advice.status, DayStatus::Match);
        assert_eq!(advice.severity.color(), "red");
        assert_eq!(advice.jp_holiday.as_deref(), Some("建国記念の日"));
    }

    #[test]
    fn one_side_only() {
        let d = date(2026, 3, 20);
        let advice = analyze_business_day(d, &[], &[jp(d, "春分の日")], Lang::Ja);
        assert_eq!(advice.status, DayStatus::JpOnly);
        assert_eq!(advice.message, advice_message(DayStatus::JpOnly, Lang::Ja));

        let d = date(2026, 3, 2);
        let advice = analyze_business_day(d, &[kr(d, "대체공휴일")], &[], Lang::Ko);
        assert_eq!(advice.status, DayStatus::KrOnly);
        assert_eq!(advice.jp_holiday, None);
    }

    #[test]
    fn observances_do_not_count() {
        // 2026-05-08 is a Friday.
        let d = date(2026, 5, 8);
        let advice = analyze_business_day(d, &[kr(d, "어버이날")], &[], Lang::Ko);
        assert_eq!(advice.status, DayStatus::Work);
        assert_eq!(advice.kr_holiday, None);
    }

    #[test]
    fn duplicate_names_are_joined_once() {
        let d = date(2026, 5, 5);
        let advice = analyze_business_day(
            d,
            &[kr(d, "어린이날"), kr(d, "어린이날"), kr(d, "Buddha")],
            &[],
            Lang::Ko,
        );
        assert_eq!(advice.kr_holiday.as_deref(), Some("어린이날, Buddha"));
    }

    #[test]
    fn string_entry_point_validates() {
        let advice = analyze_business_day_str("2026-01-01", &[kr(date(2026, 1, 1), "새해")], &[], Lang::Ko)
            .unwrap();
        assert_eq!(advice.status, DayStatus::KrOnly);
        assert!(matches!(
            analyze_business_day_str("2026-1-1", &[], &[], Lang::Ko),
            Err(Error::Date(_))
        ));
    }

    #[test]
    fn serializes_wire_names() {
        let advice = analyze_business_day(date(2026, 3, 2), &[kr(date(2026, 3, 2), "대체공휴일")], &[], Lang::Ko);
        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["status"], "kr-only");
        assert_eq!(json["severity"], "caution");
        assert_eq!(json["krHoliday"], "대체공휴일");
        assert!(json.get("jpHoliday").is_none());
    }
}
