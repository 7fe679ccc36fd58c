//! End-to-end scenarios over 2026 data.

use sb_analytics::{
    analyze_business_day, analyze_business_day_str, conflict_markers, recommended_meeting_days,
    vacation_blocks, ConflictKind, DayStatus, SessionBuilder,
};
use sb_core::{Country, EventBlocking, EventScope, Lang, Settings};
use sb_holidays::{
    fetch_or_empty, merge_user_events, parse_feed, BuiltinSource, EventType, HolidayRecord,
    PublicHolidays, UserEvent,
};
use sb_time::Date;

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
fn february_eleventh_is_a_match() {
    let d = date(2026, 2, 11);
    let advice = analyze_business_day(d, &[kr(d, "설날")], &[jp(d, "建国記念の日")], Lang::Ko);
    assert_eq!(advice.status, DayStatus::Match);
}

#[test]
fn childrens_day_naming() {
    let d = date(2026, 5, 5);
    // Japanese local name has no "Day" substring: real.
    let advice = analyze_business_day(d, &[], &[jp(d, "こどもの日")], Lang::Ja);
    assert_eq!(advice.status, DayStatus::JpOnly);
    // An English local name trips the substring rule.
    let advice = analyze_business_day(d, &[], &[jp(d, "Children's Day")], Lang::Ja);
    assert_eq!(advice.status, DayStatus::Work);
    // "Memorial" and "Replacement" rescue a "Day" name.
    let advice = analyze_business_day(
        d,
        &[kr(d, "Memorial Day")],
        &[jp(d, "Replacement Holiday Day")],
        Lang::Ko,
    );
    assert_eq!(advice.status, DayStatus::Match);
}

#[test]
fn both_scope_holiday_event_on_march_tenth() {
    let event = UserEvent {
        id: "e-0310".into(),
        date: date(2026, 3, 10),
        title: "창립기념일".into(),
        event_type: EventType::Holiday,
        country_code: EventScope::Both,
    };
    let events = [event];
    let kr_list = merge_user_events(&[], &events, Country::Korea, EventBlocking::AllTypes);
    let jp_list = merge_user_events(&[], &events, Country::Japan, EventBlocking::AllTypes);

    let days = recommended_meeting_days(date(2026, 3, 1), &kr_list, &jp_list, Lang::Ko);
    let dates: Vec<Date> = days.iter().map(|d| d.date).collect();
    assert_eq!(dates, vec![date(2026, 3, 2), date(2026, 3, 3), date(2026, 3, 4)]);

    // Past the first week the event shapes the ranking.
    let days = recommended_meeting_days(date(2026, 3, 7), &kr_list, &jp_list, Lang::Ko);
    let picked: Vec<(Date, u32)> = days.iter().map(|d| (d.date, d.score)).collect();
    assert_eq!(
        picked,
        vec![
            (date(2026, 3, 11), 100),
            (date(2026, 3, 16), 100),
            (date(2026, 3, 17), 100),
        ]
    );

    let session = SessionBuilder::new()
        .reference_date(date(2026, 3, 7))
        .events(events.to_vec())
        .build()
        .unwrap();
    assert_eq!(session.recommended_days(), days);
    let all = sb_analytics::MeetingDayRecommender::default().candidates(
        date(2026, 3, 7),
        &PublicHolidays::from_records(kr_list),
        &PublicHolidays::from_records(jp_list),
        Lang::Ko,
    );
    assert!(all.iter().all(|c| c.date != date(2026, 3, 9) && c.date != date(2026, 3, 10)));
    assert_eq!(all.iter().find(|c| c.date == date(2026, 3, 12)).map(|c| c.score), Some(70));
}

#[test]
fn feed_payload_through_the_advisor() {
    let feed = r#"[
        {"date":"2026-05-01","localName":"노동절","name":"Labour Day","countryCode":"KR","types":["Public"]},
        {"date":"2026-05-05","localName":"어린이날","name":"Children's Day","countryCode":"KR","types":["Public"]}
    ]"#;
    let kr_list = parse_feed(feed).unwrap();
    let jp_list = fetch_or_empty(&BuiltinSource, Country::Japan, 2026);

    let may1 = analyze_business_day_str("2026-05-01", &kr_list, &jp_list, Lang::Ko).unwrap();
    assert_eq!(may1.status, DayStatus::Work);
    let may5 = analyze_business_day_str("2026-05-05", &kr_list, &jp_list, Lang::Ko).unwrap();
    assert_eq!(may5.status, DayStatus::Match);
    assert_eq!(may5.kr_holiday.as_deref(), Some("어린이날"));
    assert_eq!(may5.jp_holiday.as_deref(), Some("こどもの日"));
    let may6 = analyze_business_day_str("2026-05-06", &kr_list, &jp_list, Lang::Ko).unwrap();
    assert_eq!(may6.status, DayStatus::JpOnly);
}

#[test]
fn golden_week_blocks_and_markers() {
    let kr_list = PublicHolidays::from_records(fetch_or_empty(&BuiltinSource, Country::Korea, 2026));
    let jp_list = PublicHolidays::from_records(fetch_or_empty(&BuiltinSource, Country::Japan, 2026));

    let jp_blocks = vacation_blocks(&jp_list);
    let gw = jp_blocks
        .iter()
        .find(|b| b.start == date(2026, 5, 3))
        .unwrap();
    assert_eq!(gw.end, date(2026, 5, 6));
    assert_eq!(gw.count, 4);

    let markers = conflict_markers(&kr_list, &jp_list);
    assert_eq!(markers[&date(2026, 1, 1)], ConflictKind::Both);
    assert_eq!(markers[&date(2026, 3, 2)], ConflictKind::Kr);
    assert_eq!(markers[&date(2026, 3, 20)], ConflictKind::Jp);
    assert!(!markers.contains_key(&date(2026, 5, 1)));
}

#[test]
fn korean_substitute_bridges_the_weekend() {
    let kr_list = PublicHolidays::from_records(fetch_or_empty(&BuiltinSource, Country::Korea, 2026));
    let blocks = vacation_blocks(&kr_list);
    let liberation = blocks.iter().find(|b| b.covers(date(2026, 8, 15))).unwrap();
    assert_eq!(liberation.end, date(2026, 8, 17));
    assert_eq!(liberation.count, 3);
    assert_eq!(liberation.display_names, "광복절, 대체공휴일");
}

#[test]
fn settings_from_lookup_drive_a_session() {
    let settings = Settings::from_lookup(|key| match key {
        "SB_LANGUAGE" => Some("ja-JP".into()),
        "SB_MAX_RECOMMENDATIONS" => Some("5".into()),
        _ => None,
    })
    .unwrap();
    let session = SessionBuilder::new()
        .settings(settings)
        .reference_date(date(2026, 6, 1))
        .build()
        .unwrap();
    let days = session.recommended_days();
    assert_eq!(days.len(), 5);
    assert_eq!(session.today_advice().message, "両国とも通常営業日です。協業に最適な日です。");
}

#[test]
fn oversized_distance_is_rejected_before_the_session_exists() {
    let settings = Settings {
        nearby_distance_days: i32::MAX,
        ..Settings::default()
    };
    let err = SessionBuilder::new()
        .settings(settings)
        .reference_date(date(2026, 3, 1))
        .fetch_from(&BuiltinSource, 2026..=2026)
        .build()
        .unwrap_err();
    assert!(matches!(err, sb_core::Error::Precondition(_)));

    let lookup = Settings::from_lookup(|key| {
        (key == "SB_NEARBY_DISTANCE_DAYS").then(|| i32::MAX.to_string())
    });
    assert!(lookup.is_err());
}
