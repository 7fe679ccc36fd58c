//! Japanese national holidays (国民の祝日).
//!
//! Fixed and Happy-Monday holidays come first, then the two derived kinds:
//! a citizens' holiday (国民の休日) on any non-Sunday sandwiched between two
//! holidays, and a substitute holiday (振替休日) on the first non-holiday
//! after a holiday that falls on a Sunday.

use sb_core::errors::Result;
use sb_core::Country;
use sb_time::{Date, Weekday};

use super::{next_free_day, record};
use crate::record::HolidayRecord;

/// Approximate Vernal Equinox day-of-month for March.
///
/// Simplified formula, valid 1980–2099; the real date is proclaimed
/// annually by the Cabinet Office.
fn vernal_equinox_day(year: u16) -> u8 {
    // 20.8431 + 0.242194*(y-1980) - floor((y-1980)/4)
    let y = year as f64;
    let d = 20.8431 + 0.242194 * (y - 1980.0) - ((y - 1980.0) / 4.0).floor();
    d as u8
}

/// Approximate Autumnal Equinox day-of-month for September.
fn autumnal_equinox_day(year: u16) -> u8 {
    let y = year as f64;
    let d = 23.2488 + 0.242194 * (y - 1980.0) - ((y - 1980.0) / 4.0).floor();
    d as u8
}

/// The holidays of `year`, unsorted.
pub(super) fn holidays(year: u16) -> Result<Vec<HolidayRecord>> {
    let y = year;
    let ymd = |m: u8, d: u8| Date::from_ymd(y, m, d);
    let monday = |n: u8, m: u8| Date::nth_weekday(n, Weekday::Monday, y, m);

    let mut base: Vec<(Date, &str, &str)> = Vec::with_capacity(20);
    base.push((ymd(1, 1)?, "元日", "New Year's Day"));

    let coming_of_age = if y >= 2000 { monday(2, 1)? } else { ymd(1, 15)? };
    base.push((coming_of_age, "成人の日", "Coming of Age Day"));

    if y >= 1967 {
        base.push((ymd(2, 11)?, "建国記念の日", "Foundation Day"));
    }
    if y >= 2020 {
        base.push((ymd(2, 23)?, "天皇誕生日", "The Emperor's Birthday"));
    }
    base.push((ymd(3, vernal_equinox_day(y))?, "春分の日", "Vernal Equinox Day"));

    match y {
        ..=1988 => base.push((ymd(4, 29)?, "天皇誕生日", "The Emperor's Birthday")),
        1989..=2006 => base.push((ymd(4, 29)?, "みどりの日", "Greenery Day")),
        _ => base.push((ymd(4, 29)?, "昭和の日", "Shōwa Day")),
    }
    base.push((ymd(5, 3)?, "憲法記念日", "Constitution Memorial Day"));
    if y >= 2007 {
        base.push((ymd(5, 4)?, "みどりの日", "Greenery Day"));
    }
    base.push((ymd(5, 5)?, "こどもの日", "Children's Day"));

    // 2020 and 2021 moved three holidays around the Tokyo Olympics.
    let marine = match y {
        2020 => Some(ymd(7, 23)?),
        2021 => Some(ymd(7, 22)?),
        2003.. => Some(monday(3, 7)?),
        1996..=2002 => Some(ymd(7, 20)?),
        _ => None,
    };
    if let Some(d) = marine {
        base.push((d, "海の日", "Marine Day"));
    }
    let mountain = match y {
        2020 => Some(ymd(8, 10)?),
        2021 => Some(ymd(8, 8)?),
        2016.. => Some(ymd(8, 11)?),
        _ => None,
    };
    if let Some(d) = mountain {
        base.push((d, "山の日", "Mountain Day"));
    }

    let aged = match y {
        2003.. => Some(monday(3, 9)?),
        1966..=2002 => Some(ymd(9, 15)?),
        _ => None,
    };
    if let Some(d) = aged {
        base.push((d, "敬老の日", "Respect for the Aged Day"));
    }
    base.push((ymd(9, autumnal_equinox_day(y))?, "秋分の日", "Autumnal Equinox Day"));

    let sports = match y {
        2020 => Some(ymd(7, 24)?),
        2021 => Some(ymd(7, 23)?),
        2000.. => Some(monday(2, 10)?),
        1966..=1999 => Some(ymd(10, 10)?),
        _ => None,
    };
    if let Some(d) = sports {
        let local = if y >= 2020 { "スポーツの日" } else { "体育の日" };
        base.push((d, local, "Sports Day"));
    }

    base.push((ymd(11, 3)?, "文化の日", "Culture Day"));
    base.push((ymd(11, 23)?, "勤労感謝の日", "Labour Thanksgiving Day"));
    if (1989..=2018).contains(&y) {
        base.push((ymd(12, 23)?, "天皇誕生日", "The Emperor's Birthday"));
    }

    let mut taken: Vec<Date> = base.iter().map(|(d, _, _)| *d).collect();
    taken.sort();

    // ── Citizens' holidays ────────────────────────────────────────────────────

    let mut derived: Vec<(Date, &str, &str)> = Vec::new();
    if y >= 1986 {
        for pair in taken.windows(2) {
            if pair[1] - pair[0] == 2 {
                let between = pair[0].add_days(1)?;
                if between.weekday() != Weekday::Sunday {
                    derived.push((between, "国民の休日", "Citizens' Holiday"));
                }
            }
        }
    }
    taken.extend(derived.iter().map(|(d, _, _)| *d));

    // ── Substitute holidays ───────────────────────────────────────────────────

    if y >= 1973 {
        let sundays: Vec<Date> = base
            .iter()
            .map(|(d, _, _)| *d)
            .filter(|d| d.weekday() == Weekday::Sunday)
            .collect();
        for sunday in sundays {
            let substitute = next_free_day(sunday, &taken, false)?;
            if substitute.year() == y {
                taken.push(substitute);
                derived.push((substitute, "振替休日", "Substitute Holiday"));
            }
        }
    }

    Ok(base
        .into_iter()
        .chain(derived)
        .map(|(d, local, name)| record(d, local, name, Country::Japan, true))
        .collect())
}
