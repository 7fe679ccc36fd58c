//! Prompts for the drafting service.
//!
//! Two prompts are built: a monthly strategy briefing over both holiday
//! lists and the user's events, and a per-day business email for a given
//! tone.  Holiday and event data are embedded as JSON so the model sees
//! exactly what the analytics saw.

use sb_analytics::DayAdvice;
use sb_core::errors::{Error, Result};
use sb_core::{ensure, Lang};
use sb_holidays::{HolidayRecord, UserEvent};
use serde::Serialize;

use crate::tone::Tone;

/// Builds prompts in one output language.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder {
    lang: Lang,
}

impl PromptBuilder {
    /// A builder producing `lang` output.
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Output language.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Strategy-briefing prompt for `year`-`month`.
    ///
    /// Only the holidays and events falling in that month are embedded.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] if `month` is not in `1..=12`.
    pub fn briefing(
        &self,
        year: u16,
        month: u8,
        kr: &[HolidayRecord],
        jp: &[HolidayRecord],
        events: &[UserEvent],
    ) -> Result<String> {
        ensure!((1..=12).contains(&month), "month must be in 1..=12, got {month}");
        let in_month = |d: sb_time::Date| d.year() == year && d.month() == month;
        let kr: Vec<&HolidayRecord> = kr.iter().filter(|r| in_month(r.date)).collect();
        let jp: Vec<&HolidayRecord> = jp.iter().filter(|r| in_month(r.date)).collect();
        let events: Vec<&UserEvent> = events.iter().filter(|e| in_month(e.date)).collect();
        let (kr, jp, events) = (to_json(&kr)?, to_json(&jp)?, to_json(&events)?);
        let current = format!("{year}-{month:02}");

        Ok(match self.lang {
            Lang::Ko => format!(
                "너는 한국과 일본의 IT 비즈니스 협업을 최적화하는 '스마트 스케줄 전략가'야.\n\
                 {current}의 한·일 공휴일 데이터와 사용자의 개인 일정을 분석해서 \
                 비즈니스 효율을 극대화할 수 있는 전략 브리핑을 작성해줘.\n\n\
                 [제공된 데이터]\n\
                 - 한국 공휴일: {kr}\n\
                 - 일본 공휴일: {jp}\n\
                 - 사용자 개인 일정(User Events): {events}\n\n\
                 [작성 가이드라인]\n\
                 1. **Communication Gap**: 양국의 휴일 차이로 인해 업무 회신이 늦어질 수 있는 위험 날짜를 경고해줘.\n\
                 2. **Golden Work Week**: 사용자의 휴무와 공휴일을 피해서 업무 집중도가 가장 높을 것으로 예상되는 주간을 추천해줘.\n\
                 3. **Japan Business Tip**: 일본 파트너사와 협업할 때 이 달의 일정과 관련하여 유의해야 할 일본 특유의 비즈니스 매너나 문화적 팁을 하나 알려줘.\n\n\
                 답변은 3~4개의 핵심 포인트로 나누어, 신뢰감 있고 친절한 한국어로 작성해줘."
            ),
            Lang::Ja => format!(
                "あなたは韓国と日本のITビジネス協業を最適化する「スマートスケジュール戦略家」です。\n\
                 {current}の日韓の祝日データとユーザーの個人予定を分析し、\
                 ビジネス効率を最大化するための戦略ブリーフィングを作成してください。\n\n\
                 [提供データ]\n\
                 - 韓国の祝日: {kr}\n\
                 - 日本の祝日: {jp}\n\
                 - ユーザーの個人予定(User Events): {events}\n\n\
                 [作成ガイドライン]\n\
                 1. **Communication Gap**: 両国の休日の違いにより返信が遅れる恐れのある日付を警告してください。\n\
                 2. **Golden Work Week**: ユーザーの休みと祝日を避け、業務の集中度が最も高いと見込まれる週を推薦してください。\n\
                 3. **Japan Business Tip**: 今月の日程に関連して、日本のパートナー企業と協業する際に注意すべき日本特有のビジネスマナーや文化的なヒントを一つ教えてください。\n\n\
                 回答は3〜4つの要点に分け、信頼感のある丁寧な日本語で作成してください。"
            ),
        })
    }

    /// Email prompt for the day described by `advice`.
    pub fn email(&self, advice: &DayAdvice, tone: Tone) -> String {
        let kr = advice.kr_holiday.as_deref().unwrap_or("-");
        let jp = advice.jp_holiday.as_deref().unwrap_or("-");
        let date = advice.date;
        let status = advice.status;
        let instruction = tone.instruction(self.lang);
        match self.lang {
            Lang::Ko => format!(
                "너는 한·일 비즈니스 메일 작성 전문가야.\n\
                 아래 상황에 맞는 일본 파트너사 앞 비즈니스 메일 초안을 작성해줘.\n\n\
                 - 날짜: {date}\n\
                 - 상황: {status}\n\
                 - 한국 공휴일: {kr}\n\
                 - 일본 공휴일: {jp}\n\n\
                 {instruction}\n\
                 제목과 본문을 포함하고, 한국어로 작성해줘."
            ),
            Lang::Ja => format!(
                "あなたは日韓ビジネスメール作成の専門家です。\n\
                 以下の状況に合わせて、韓国のパートナー企業宛てのビジネスメールの下書きを作成してください。\n\n\
                 - 日付: {date}\n\
                 - 状況: {status}\n\
                 - 韓国の祝日: {kr}\n\
                 - 日本の祝日: {jp}\n\n\
                 {instruction}\n\
                 件名と本文を含め、日本語で作成してください。"
            ),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Runtime(format!("prompt data: {e}")))
}
