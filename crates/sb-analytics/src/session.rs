//! `ScheduleSession`: the resolved holiday context of one user.
//!
//! A session owns everything the analytics need (settings, a reference
//! date, both countries' holiday lists, and the user's events) and is
//! immutable once built.  Callers that want caching keep sessions around;
//! nothing here is global.
//!
//! ```
//! use sb_analytics::{DayStatus, SessionBuilder};
//! use sb_core::Country;
//! use sb_holidays::BuiltinSource;
//! use sb_time::Date;
//!
//! let session = SessionBuilder::new()
//!     .reference_date(Date::from_ymd(2026, 5, 1).unwrap())
//!     .fetch_from(&BuiltinSource, 2026..=2026)
//!     .build()
//!     .unwrap();
//! let advice = session.advice(Date::from_ymd(2026, 5, 6).unwrap());
//! assert_eq!(advice.status, DayStatus::JpOnly);
//! assert!(!session.vacation_blocks(Country::Japan).is_empty());
//! ```

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use sb_core::errors::Result;
use sb_core::{Country, Lang, Settings};
use sb_holidays::{
    fetch_or_empty, ingest, merge_user_events, ClassificationTable, HolidayRecord, HolidaySource,
    PublicHolidays, UserEvent,
};
use sb_time::Date;

use crate::advisor::{analyze_business_day, DayAdvice};
use crate::blocks::{vacation_blocks_within, VacationBlock};
use crate::markers::{conflict_markers, ConflictKind};
use crate::recommender::{MeetingDayRecommender, RecommendedDay};

/// Holiday context for one user or request.
#[derive(Debug, Clone)]
pub struct ScheduleSession {
    settings: Settings,
    reference_date: Date,
    kr: Vec<HolidayRecord>,
    jp: Vec<HolidayRecord>,
    events: Vec<UserEvent>,
}

impl ScheduleSession {
    /// Start building a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The date treated as "today".
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// The ingested holiday records of `country`, before classification.
    pub fn holidays(&self, country: Country) -> &[HolidayRecord] {
        match country {
            Country::Korea => &self.kr,
            Country::Japan => &self.jp,
        }
    }

    /// The real public holidays of `country`.
    pub fn public_holidays(&self, country: Country) -> PublicHolidays {
        PublicHolidays::classify(self.holidays(country))
    }

    /// The user's events.
    pub fn events(&self) -> &[UserEvent] {
        &self.events
    }

    /// The holidays of `country` with the user's events folded in, under the
    /// session's blocking policy.
    pub fn merged_holidays(&self, country: Country) -> Vec<HolidayRecord> {
        merge_user_events(
            self.holidays(country),
            &self.events,
            country,
            self.settings.event_blocking,
        )
    }

    // ── Analytics ─────────────────────────────────────────────────────────────

    /// Advice for `date` in the session language.
    pub fn advice(&self, date: Date) -> DayAdvice {
        self.advice_in(date, self.settings.language)
    }

    /// Advice for `date` in `lang`.
    pub fn advice_in(&self, date: Date, lang: Lang) -> DayAdvice {
        analyze_business_day(date, &self.kr, &self.jp, lang)
    }

    /// Advice for the reference date.
    pub fn today_advice(&self) -> DayAdvice {
        self.advice(self.reference_date)
    }

    /// Recommended meeting days after the reference date, with user events
    /// blocking days according to the session policy.
    pub fn recommended_days(&self) -> Vec<RecommendedDay> {
        let kr = PublicHolidays::from_records(self.merged_holidays(Country::Korea));
        let jp = PublicHolidays::from_records(self.merged_holidays(Country::Japan));
        MeetingDayRecommender::new(self.settings.clone()).recommend(
            self.reference_date,
            &kr,
            &jp,
            self.settings.language,
        )
    }

    /// Vacation blocks of `country`'s public holidays.
    pub fn vacation_blocks(&self, country: Country) -> Vec<VacationBlock> {
        vacation_blocks_within(&self.public_holidays(country), self.settings.block_gap_days)
    }

    /// Conflict markers over both countries' public holidays.
    pub fn conflict_markers(&self) -> BTreeMap<Date, ConflictKind> {
        conflict_markers(
            &self.public_holidays(Country::Korea),
            &self.public_holidays(Country::Japan),
        )
    }
}

/// Builder for [`ScheduleSession`].
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    settings: Settings,
    reference_date: Option<Date>,
    table: ClassificationTable,
    kr: Vec<HolidayRecord>,
    jp: Vec<HolidayRecord>,
    events: Vec<UserEvent>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            reference_date: None,
            table: ClassificationTable::builtin(),
            kr: Vec::new(),
            jp: Vec::new(),
            events: Vec::new(),
        }
    }
}

impl SessionBuilder {
    /// A builder with default settings and the built-in classification
    /// table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `settings`.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Treat `date` as "today" (defaults to the local date at build time).
    pub fn reference_date(mut self, date: Date) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Replace the classification table applied at build time.
    pub fn classification_table(mut self, table: ClassificationTable) -> Self {
        self.table = table;
        self
    }

    /// Add holiday records for `country`.
    pub fn holidays(mut self, country: Country, records: impl IntoIterator<Item = HolidayRecord>) -> Self {
        match country {
            Country::Korea => self.kr.extend(records),
            Country::Japan => self.jp.extend(records),
        }
        self
    }

    /// Fetch both countries' holidays for every year in `years`.
    ///
    /// Failed fetches contribute nothing; the session stays usable.
    pub fn fetch_from(mut self, source: &dyn HolidaySource, years: RangeInclusive<u16>) -> Self {
        for year in years {
            self.kr.extend(fetch_or_empty(source, Country::Korea, year));
            self.jp.extend(fetch_or_empty(source, Country::Japan, year));
        }
        self
    }

    /// Add user events.
    pub fn events(mut self, events: impl IntoIterator<Item = UserEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Validate the settings, ingest the lists, and build the session.
    ///
    /// # Errors
    /// Returns an error if the settings are inconsistent, or if no reference
    /// date was given and the local date is outside the supported range.
    pub fn build(self) -> Result<ScheduleSession> {
        self.settings.validate()?;
        let reference_date = match self.reference_date {
            Some(d) => d,
            None => Date::today()?,
        };
        let kr = ingest(self.kr, &self.table);
        let jp = ingest(self.jp, &self.table);
        tracing::debug!(
            %reference_date,
            kr = kr.len(),
            jp = jp.len(),
            events = self.events.len(),
            "built schedule session"
        );
        Ok(ScheduleSession {
            settings: self.settings,
            reference_date,
            kr,
            jp,
            events: self.events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::DayStatus;
    use sb_core::{EventBlocking, EventScope};
    use sb_holidays::{BuiltinSource, EventType, HolidayKind, MemorySource};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn event(d: Date, t: EventType, scope: EventScope) -> UserEvent {
        UserEvent {
            id: format!("{d}"),
            date: d,
            title: "Offsite".into(),
            event_type: t,
            country_code: scope,
        }
    }

    #[test]
    fn build_ingests_with_table() {
        let session = SessionBuilder::new()
            .reference_date(date(2026, 5, 1))
            .holidays(
                Country::Korea,
                vec![
                    HolidayRecord::new(date(2026, 5, 8), "어버이 날", Country::Korea).with_name("Parents' Day"),
                    HolidayRecord::new(date(2026, 5, 5), "어린이날", Country::Korea),
                ],
            )
            .build()
            .unwrap();
        let kr = session.holidays(Country::Korea);
        assert_eq!(kr[0].date, date(2026, 5, 5));
        assert_eq!(kr[1].kind, Some(HolidayKind::Observance));
        assert_eq!(session.public_holidays(Country::Korea).len(), 1);
        assert!(session.holidays(Country::Japan).is_empty());
    }

    #[test]
    fn events_block_recommendations_only() {
        let session = SessionBuilder::new()
            .reference_date(date(2026, 3, 1))
            .events(vec![event(date(2026, 3, 3), EventType::Holiday, EventScope::Both)])
            .build()
            .unwrap();
        let days: Vec<Date> = session.recommended_days().iter().map(|d| d.date).collect();
        assert!(!days.contains(&date(2026, 3, 2)));
        assert!(!days.contains(&date(2026, 3, 3)));
        // Advice and markers reflect public holidays only.
        assert_eq!(session.advice(date(2026, 3, 3)).status, DayStatus::Work);
        assert!(session.conflict_markers().is_empty());
        assert_eq!(session.merged_holidays(Country::Japan).len(), 1);
    }

    #[test]
    fn meeting_events_respect_policy() {
        let events = vec![event(date(2026, 3, 3), EventType::Meeting, EventScope::Korea)];
        let blocking = SessionBuilder::new()
            .reference_date(date(2026, 3, 1))
            .events(events.clone())
            .build()
            .unwrap();
        assert!(!blocking.recommended_days().iter().any(|d| d.date == date(2026, 3, 3)));

        let lenient = SessionBuilder::new()
            .reference_date(date(2026, 3, 1))
            .settings(Settings {
                event_blocking: EventBlocking::HolidayLikeOnly,
                ..Settings::default()
            })
            .events(events)
            .build()
            .unwrap();
        assert!(lenient.recommended_days().iter().any(|d| d.date == date(2026, 3, 3)));
    }

    #[test]
    fn source_failures_leave_empty_lists() {
        let source = MemorySource::new().with_list(
            Country::Japan,
            2026,
            vec![HolidayRecord::new(date(2026, 2, 11), "建国記念の日", Country::Japan)],
        );
        let session = SessionBuilder::new()
            .reference_date(date(2026, 2, 11))
            .fetch_from(&source, 2026..=2026)
            .build()
            .unwrap();
        assert!(session.holidays(Country::Korea).is_empty());
        assert_eq!(session.today_advice().status, DayStatus::JpOnly);
    }

    #[test]
    fn builtin_source_session() {
        let session = SessionBuilder::new()
            .reference_date(date(2026, 9, 18))
            .settings(Settings {
                language: Lang::Ja,
                ..Settings::default()
            })
            .fetch_from(&BuiltinSource, 2026..=2026)
            .build()
            .unwrap();
        // Silver Week: Sep 19-20 weekend, 21-23 holidays.
        let blocks = session.vacation_blocks(Country::Japan);
        let silver = blocks.iter().find(|b| b.covers(date(2026, 9, 22))).unwrap();
        assert_eq!((silver.start, silver.end), (date(2026, 9, 21), date(2026, 9, 23)));
        assert_eq!(session.conflict_markers()[&date(2026, 5, 5)], ConflictKind::Both);
        assert_eq!(session.advice(date(2026, 9, 22)).message, crate::messages::advice_message(DayStatus::JpOnly, Lang::Ja));
    }

    #[test]
    fn invalid_settings_fail_the_build() {
        let err = SessionBuilder::new()
            .settings(Settings {
                window_days: 0,
                ..Settings::default()
            })
            .build();
        assert!(err.is_err());
    }
}
