//! Static business-email templates.
//!
//! Three templates cover the days on which at least one side is off: a
//! Japanese holiday (be considerate of the partner), a Korean holiday
//! (announce our closure), and a shared holiday (agree on the schedule).
//! Each exists in Korean and Japanese.  Working days and weekends have no
//! template.

use sb_analytics::{DayAdvice, DayStatus};
use sb_core::Lang;
use sb_time::Date;
use serde::{Deserialize, Serialize};

/// Which template to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateType {
    /// Holiday in Japan only.
    JpHoliday,
    /// Holiday in Korea only.
    KrHoliday,
    /// Holiday in both countries.
    BothHoliday,
}

/// Where a draft's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftOrigin {
    /// A static template.
    Template,
    /// The drafting service.
    Ai,
}

/// A rendered email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDraft {
    /// Short label for the draft.
    pub title: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub body: String,
    /// Origin of the text.
    pub origin: DraftOrigin,
}

/// Template for a day status; `None` for working days and weekends.
pub fn template_for(status: DayStatus) -> Option<TemplateType> {
    match status {
        DayStatus::JpOnly => Some(TemplateType::JpHoliday),
        DayStatus::KrOnly => Some(TemplateType::KrHoliday),
        DayStatus::Match => Some(TemplateType::BothHoliday),
        DayStatus::Work | DayStatus::Holiday => None,
    }
}

/// Placeholder used when the holiday name is unknown.
pub fn default_holiday_name(lang: Lang) -> &'static str {
    match lang {
        Lang::Ko => "공휴일",
        Lang::Ja => "祝日",
    }
}

/// Render `template` in `lang` for the holiday `holiday_name` on `date`.
pub fn render(template: TemplateType, lang: Lang, date: Date, holiday_name: &str) -> EmailDraft {
    let (title, subject, body) = match (lang, template) {
        (Lang::Ko, TemplateType::JpHoliday) => (
            "일본 공휴일 배려 (JP Holiday)",
            format!("【ご確認】{date} 日本の祝日（{holiday_name}）에 따른 업무 일정 확인의 건"),
            format!(
                "いつも大変お世話になっております。(항상 신세를 지고 있습니다.)\n\n\
                 {date}일은 일본의 공휴일인 [{holiday_name}]으로 알고 있습니다.\n\
                 귀사의 연휴 기간 동안은 업무 대응이 어려우실 것으로 생각되어, 급한 건은 연휴 전까지 마무리하고 나머지는 연휴 이후에 확인해 주셔도 괜찮습니다.\n\n\
                 즐거운 연휴 보내시길 바라며, 항상 협력해 주셔서 감사합니다.\n\n\
                 何卒、よろしくお願い申し上げます。(아무쪼록 잘 부탁드립니다.)"
            ),
        ),
        (Lang::Ko, TemplateType::KrHoliday) => (
            "한국 공휴일 알림 (KR Holiday)",
            format!("【お知らせ】韓国の祝日（{holiday_name}）에 따른 휴무 안내의 건"),
            format!(
                "いつもお世話になっております。(언제나 신세를 지고 있습니다.)\n\n\
                 誠に勝手ながら(무례를 무릅쓰고), 한국의 공휴일인 [{holiday_name}]로 인해 다음과 같이 저희 쪽 업무가 중단됨을 안내드립니다.\n\n\
                 ■ 휴무 일자: {date}\n\
                 해당 기간 접수된 문의는 업무 복귀 후 순차적으로 답변 드리겠습니다.\n\n\
                 너른 양해 부탁드리며, 업무에 참고해 주시기 바랍니다.\n\n\
                 引き続き、よろしくお願いいたします。(앞으로도 잘 부탁드립니다.)"
            ),
        ),
        (Lang::Ko, TemplateType::BothHoliday) => (
            "양국 공휴일 공통 (Joint Holiday)",
            format!("【ご連絡】{date} 韓日 공통 공휴일로 인한 일정 조정 안내"),
            format!(
                "いつも大変お世話になっております。(항상 신세를 지고 있습니다.)\n\n\
                 오는 {date}일은 한국과 일본 모두 공휴일인 날입니다.\n\
                 양사 모두 휴무인 관계로, 진행 중인 프로젝트 일정에 차질이 없도록 사전에 일정을 조율하고자 합니다.\n\n\
                 추가적인 논의가 필요하시면 말씀 부탁드리며, 편안한 연휴 되시길 바랍니다.\n\n\
                 今後ともよろしくお願い申し上げます。(앞으로도 잘 부탁드립니다.)"
            ),
        ),
        (Lang::Ja, TemplateType::JpHoliday) => (
            "日本の祝日への配慮 (JP Holiday)",
            format!("【ご確認】{date} 日本の祝日（{holiday_name}）に伴う進行スケジュール調整の件"),
            format!(
                "いつも大変お世話になっております。\n\n\
                 {date}は日本の祝日（{holiday_name}）にあたると存じております。\n\
                 連休期間中は業務へのご対応が難しいかと存じますので、急ぎの案件は連休前までに進め、その他は連休明けにご確認いただければ幸いです。\n\n\
                 充実した連休をお過ごしください。いつも多大なるご協力をいただき、誠にありがとうございます。\n\n\
                 何卒、よろしくお願い申し上げます。"
            ),
        ),
        (Lang::Ja, TemplateType::KrHoliday) => (
            "韓国の祝日による休業 (KR Holiday)",
            format!("【お知らせ】韓国の祝日（{holiday_name}）に伴う休業のご案内"),
            format!(
                "いつもお世話になっております。\n\n\
                 誠に勝手ながら、韓国の祝日である [{holiday_name}] に伴い、下記の通り弊社の業務を一時休止させていただきます。\n\n\
                 ■ 休業日: {date}\n\
                 休業期間中にいただいたお問い合わせにつきましては、業務再開後、順次対応させていただきます。\n\n\
                 ご不便をおかけいたしますが、何卒ご了承くださいますようお願い申し上げます。\n\n\
                 引き続き、よろしくお願いいたします。"
            ),
        ),
        (Lang::Ja, TemplateType::BothHoliday) => (
            "両国共通の祝日による調整 (Joint Holiday)",
            format!("【ご連絡】{date} 韓日共通の祝日に伴う日程調整のお願い"),
            format!(
                "いつも大変お世話になっております。\n\n\
                 来る {date} は韓国と日本の両国において祝日となります。\n\
                 貴社・弊社ともに休業となりますため、進行中のプロジェクトに支障が出ないよう、事前にスケジュールを調整させていただきたく存じます。\n\n\
                 追加のご相談がございましたら、いつでもお申し付けください。穏やかな休日をお過ごしください。\n\n\
                 今後ともよろしくお願い申し上げます。"
            ),
        ),
    };
    EmailDraft {
        title: title.to_string(),
        subject,
        body,
        origin: DraftOrigin::Template,
    }
}

/// Render the template matching `advice`, if its status has one.
///
/// The holiday name comes from the side that is off (Japan first for a
/// shared holiday), or the placeholder when the advice carries none.
pub fn draft_for_advice(advice: &DayAdvice, lang: Lang) -> Option<EmailDraft> {
    let template = template_for(advice.status)?;
    let name = match template {
        TemplateType::JpHoliday => advice.jp_holiday.as_deref(),
        TemplateType::KrHoliday => advice.kr_holiday.as_deref(),
        TemplateType::BothHoliday => advice.jp_holiday.as_deref().or(advice.kr_holiday.as_deref()),
    }
    .filter(|n| !n.is_empty())
    .unwrap_or(default_holiday_name(lang));
    Some(render(template, lang, advice.date, name))
}
