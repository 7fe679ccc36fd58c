//! Meeting-Day Recommender.
//!
//! Scans the days after a reference date and ranks those best suited for
//! cross-border collaboration.  A candidate must be Monday to Thursday, not
//! a public holiday in either country, and not the eve of a holiday or a
//! Saturday.  Survivors score [`full_score`](Settings::full_score), or
//! [`nearby_score`](Settings::nearby_score) when a holiday lies exactly
//! [`nearby_distance_days`](Settings::nearby_distance_days) away.
//!
//! Ranking is a stable sort on descending score, so equal scores keep
//! their date order.

use sb_core::{Lang, Settings};
use sb_holidays::{HolidayRecord, PublicHolidays, RecordCalendar};
use sb_time::{Calendar, Date, JointCalendar, Weekday};
use serde::{Deserialize, Serialize};

use crate::messages::{full_score_reason, nearby_holiday_reason};

/// A recommended collaboration day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedDay {
    /// Candidate date.
    pub date: Date,
    /// Score; higher is better.
    pub score: u32,
    /// Explanation in the requested language.
    pub reason: String,
}

/// Meeting-day recommender configured by [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct MeetingDayRecommender {
    settings: Settings,
}

impl MeetingDayRecommender {
    /// Create a recommender with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Every surviving candidate of the window after `today`, scored, in
    /// date order.
    ///
    /// The scan stops early if it reaches the end of the supported date
    /// range.
    pub fn candidates(
        &self,
        today: Date,
        kr: &PublicHolidays,
        jp: &PublicHolidays,
        lang: Lang,
    ) -> Vec<RecommendedDay> {
        let either = JointCalendar::new(vec![
            Box::new(RecordCalendar::from_public_holidays("South Korea", kr)) as Box<dyn Calendar>,
            Box::new(RecordCalendar::from_public_holidays("Japan", jp)),
        ]);
        let distance = self.settings.nearby_distance_days;
        let holiday_at = |d: Date, offset: i32| d.add_days(offset).is_ok_and(|x| either.is_holiday(x));

        let mut out = Vec::new();
        for offset in 1..=self.settings.window_days {
            let Ok(day) = today.add_days(offset) else { break };
            let Ok(next) = day.add_days(1) else { break };

            if day.weekday().is_weekend_adjacent() || either.is_holiday(day) {
                continue;
            }
            if either.is_holiday(next) || next.weekday() == Weekday::Saturday {
                continue;
            }

            let nearby = holiday_at(day, distance.saturating_neg()) || holiday_at(day, distance);
            let (score, reason) = if nearby {
                (self.settings.nearby_score, nearby_holiday_reason(lang))
            } else {
                (self.settings.full_score, full_score_reason(lang))
            };
            out.push(RecommendedDay {
                date: day,
                score,
                reason: reason.to_string(),
            });
        }
        out
    }

    /// The top [`max_recommendations`](Settings::max_recommendations)
    /// candidates, best first.
    pub fn recommend(
        &self,
        today: Date,
        kr: &PublicHolidays,
        jp: &PublicHolidays,
        lang: Lang,
    ) -> Vec<RecommendedDay> {
        let mut days = self.candidates(today, kr, jp, lang);
        let scanned = days.len();
        days.sort_by(|a, b| b.score.cmp(&a.score));
        days.truncate(self.settings.max_recommendations);
        tracing::debug!(%today, scanned, returned = days.len(), "recommended meeting days");
        days
    }
}

/// Recommend up to three meeting days in the two weeks after `today`.
///
/// Both lists are filtered through the classifier first; observances never
/// block a day.
pub fn recommended_meeting_days(
    today: Date,
    kr: &[HolidayRecord],
    jp: &[HolidayRecord],
    lang: Lang,
) -> Vec<RecommendedDay> {
    MeetingDayRecommender::default().recommend(
        today,
        &PublicHolidays::classify(kr),
        &PublicHolidays::classify(jp),
        lang,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::Country;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn both(d: Date) -> (Vec<HolidayRecord>, Vec<HolidayRecord>) {
        (
            vec![HolidayRecord::new(d, "워크숍", Country::Korea)],
            vec![HolidayRecord::new(d, "ワークショップ", Country::Japan)],
        )
    }

    #[test]
    fn no_holidays_gives_first_three_weekdays() {
        // 2026-03-01 is a Sunday.
        let days = recommended_meeting_days(date(2026, 3, 1), &[], &[], Lang::Ko);
        let dates: Vec<Date> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2026, 3, 2), date(2026, 3, 3), date(2026, 3, 4)]);
        assert!(days.iter().all(|d| d.score == 100));
        assert_eq!(days[0].reason, full_score_reason(Lang::Ko));
    }

    #[test]
    fn holiday_blocks_itself_and_its_eve() {
        let (kr, jp) = both(date(2026, 3, 10));
        let rec = MeetingDayRecommender::default();
        let all = rec.candidates(
            date(2026, 3, 1),
            &PublicHolidays::classify(&kr),
            &PublicHolidays::classify(&jp),
            Lang::Ja,
        );
        let find = |d: Date| all.iter().find(|c| c.date == d);
        assert!(find(date(2026, 3, 9)).is_none());
        assert!(find(date(2026, 3, 10)).is_none());
        assert_eq!(find(date(2026, 3, 12)).map(|c| c.score), Some(70));
        assert_eq!(find(date(2026, 3, 11)).map(|c| c.score), Some(100));
        assert_eq!(find(date(2026, 3, 12)).map(|c| c.reason.as_str()), Some(nearby_holiday_reason(Lang::Ja)));
    }

    #[test]
    fn downgraded_days_sort_after_full_scores() {
        // Holiday on Wed 3/4: Mon 3/2 is two days before, Tue 3/3 is its eve.
        let (kr, _) = both(date(2026, 3, 4));
        let days = recommended_meeting_days(date(2026, 3, 1), &kr, &[], Lang::Ko);
        let scores: Vec<u32> = days.iter().map(|d| d.score).collect();
        assert_eq!(scores, vec![100, 100, 100]);
        let dates: Vec<Date> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2026, 3, 5), date(2026, 3, 9), date(2026, 3, 10)]);

        let all = MeetingDayRecommender::default().candidates(
            date(2026, 3, 1),
            &PublicHolidays::classify(&kr),
            &PublicHolidays::default(),
            Lang::Ko,
        );
        assert_eq!(all[0].date, date(2026, 3, 2));
        assert_eq!(all[0].score, 70);
    }

    #[test]
    fn never_friday_or_weekend() {
        let days = MeetingDayRecommender::default().candidates(
            date(2026, 1, 1),
            &PublicHolidays::default(),
            &PublicHolidays::default(),
            Lang::Ko,
        );
        assert!(!days.is_empty());
        assert!(days.iter().all(|d| !d.date.weekday().is_weekend_adjacent()));
    }

    #[test]
    fn observances_do_not_block() {
        let kr = vec![HolidayRecord::new(date(2026, 5, 12), "어버이날", Country::Korea)];
        let days = recommended_meeting_days(date(2026, 5, 10), &kr, &[], Lang::Ko);
        assert_eq!(days[0].date, date(2026, 5, 11));
        assert_eq!(days[0].score, 100);
    }

    #[test]
    fn scan_stops_at_end_of_range() {
        let days = recommended_meeting_days(Date::MAX, &[], &[], Lang::Ko);
        assert!(days.is_empty());
    }

    #[test]
    fn settings_change_window_and_limit() {
        let rec = MeetingDayRecommender::new(Settings {
            window_days: 28,
            max_recommendations: 10,
            ..Settings::default()
        });
        let days = rec.recommend(
            date(2026, 3, 1),
            &PublicHolidays::default(),
            &PublicHolidays::default(),
            Lang::Ko,
        );
        assert_eq!(days.len(), 10);
        assert_eq!(rec.settings().window_days, 28);
    }

    #[test]
    fn extreme_distances_do_not_overflow() {
        let (kr, jp) = both(date(2026, 3, 10));
        let (kr, jp) = (PublicHolidays::classify(&kr), PublicHolidays::classify(&jp));
        for distance in [i32::MAX, i32::MIN] {
            let rec = MeetingDayRecommender::new(Settings {
                nearby_distance_days: distance,
                ..Settings::default()
            });
            let days = rec.candidates(date(2026, 3, 1), &kr, &jp, Lang::Ko);
            assert!(!days.is_empty());
            assert!(days.iter().all(|d| d.score == 100));
        }
    }
}
