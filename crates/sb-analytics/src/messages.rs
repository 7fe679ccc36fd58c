//! Korean and Japanese text for advice and recommendations.

use sb_core::Lang;

use crate::advisor::DayStatus;

/// Advisory message for a day status.
pub fn advice_message(status: DayStatus, lang: Lang) -> &'static str {
    match (lang, status) {
        (Lang::Ko, DayStatus::Holiday) => "주말입니다. 양국 모두 업무를 쉬는 날입니다.",
        (Lang::Ko, DayStatus::Match) => {
            "양국 모두 공휴일입니다. 긴급한 업무만 진행하는 것을 권장합니다."
        }
        (Lang::Ko, DayStatus::KrOnly) => {
            "한국만 공휴일입니다. 일본은 정상 근무하지만 한국 측 회신이 늦어질 수 있습니다."
        }
        (Lang::Ko, DayStatus::JpOnly) => {
            "일본만 공휴일입니다. 한국은 정상 근무하지만 일본 측 회신이 늦어질 수 있습니다."
        }
        (Lang::Ko, DayStatus::Work) => "양국 모두 정상 근무일입니다. 협업하기에 최적의 날입니다.",
        (Lang::Ja, DayStatus::Holiday) => "週末です。両国とも業務はお休みです。",
        (Lang::Ja, DayStatus::Match) => {
            "両国とも祝日です。緊急の業務のみ対応することをお勧めします。"
        }
        (Lang::Ja, DayStatus::KrOnly) => {
            "韓国のみ祝日です。日本は通常営業ですが、韓国側の返信が遅れる可能性があります。"
        }
        (Lang::Ja, DayStatus::JpOnly) => {
            "日本のみ祝日です。韓国は通常営業ですが、日本側の返信が遅れる可能性があります。"
        }
        (Lang::Ja, DayStatus::Work) => "両国とも通常営業日です。協業に最適な日です。",
    }
}

/// Reason attached to a recommendation with no holiday nearby.
pub fn full_score_reason(lang: Lang) -> &'static str {
    match lang {
        Lang::Ko => "양국 모두 정상 근무일로, 협업 효율을 극대화할 수 있습니다.",
        Lang::Ja => "両国とも通常営業日で、協業の効率を最大化できます。",
    }
}

/// Reason attached to a recommendation downgraded by a nearby holiday.
pub fn nearby_holiday_reason(lang: Lang) -> &'static str {
    match lang {
        Lang::Ko => "근처에 공휴일이 있어 집중도가 다소 떨어질 수 있습니다.",
        Lang::Ja => "近くに祝日があるため、集中力がやや落ちる可能性があります。",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_text_in_both_languages() {
        for status in DayStatus::ALL {
            for lang in [Lang::Ko, Lang::Ja] {
                assert!(!advice_message(status, lang).is_empty());
            }
            assert_ne!(advice_message(status, Lang::Ko), advice_message(status, Lang::Ja));
        }
    }
}
