//! Writing tones for AI drafts.

use std::fmt;
use std::str::FromStr;

use sb_core::errors::{Error, Result};
use sb_core::Lang;
use serde::{Deserialize, Serialize};

/// Tone requested from the drafting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Plain business tone.
    #[default]
    Basic,
    /// Extra polite.
    Formal,
    /// Time-critical request.
    Urgent,
    /// Apology for a delay or inconvenience.
    Apology,
}

impl Tone {
    /// All tones.
    pub const ALL: [Tone; 4] = [Tone::Basic, Tone::Formal, Tone::Urgent, Tone::Apology];

    /// Identifier (`"basic"`, `"formal"`, `"urgent"`, `"apology"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Basic => "basic",
            Tone::Formal => "formal",
            Tone::Urgent => "urgent",
            Tone::Apology => "apology",
        }
    }

    /// Short button label.
    pub fn label(&self, lang: Lang) -> &'static str {
        match (lang, self) {
            (Lang::Ko, Tone::Basic) => "기본",
            (Lang::Ko, Tone::Formal) => "정중",
            (Lang::Ko, Tone::Urgent) => "긴급",
            (Lang::Ko, Tone::Apology) => "사과",
            (Lang::Ja, Tone::Basic) => "基本",
            (Lang::Ja, Tone::Formal) => "丁寧",
            (Lang::Ja, Tone::Urgent) => "緊急",
            (Lang::Ja, Tone::Apology) => "お詫び",
        }
    }

    /// Instruction sentence inserted into the email prompt.
    pub fn instruction(&self, lang: Lang) -> &'static str {
        match (lang, self) {
            (Lang::Ko, Tone::Basic) => "일반적인 비즈니스 메일 톤으로 작성해줘.",
            (Lang::Ko, Tone::Formal) => "최대한 정중하고 격식 있는 표현으로 작성해줘.",
            (Lang::Ko, Tone::Urgent) => {
                "긴급한 요청임을 분명히 하되, 예의를 잃지 않는 표현으로 작성해줘."
            }
            (Lang::Ko, Tone::Apology) => {
                "일정 지연이나 불편에 대해 진심으로 사과하는 톤으로 작성해줘."
            }
            (Lang::Ja, Tone::Basic) => "一般的なビジネスメールのトーンで作成してください。",
            (Lang::Ja, Tone::Formal) => "できる限り丁寧で格式のある表現で作成してください。",
            (Lang::Ja, Tone::Urgent) => {
                "緊急の依頼であることを明確にしつつ、礼儀を失わない表現で作成してください。"
            }
            (Lang::Ja, Tone::Apology) => {
                "日程の遅れやご不便について心からお詫びするトーンで作成してください。"
            }
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown tone {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrip() {
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>().unwrap(), tone);
        }
        assert_eq!(" Urgent ".parse::<Tone>().unwrap(), Tone::Urgent);
        assert!("casual".parse::<Tone>().is_err());
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(Tone::Formal.label(Lang::Ko), "정중");
        assert_eq!(Tone::Apology.label(Lang::Ja), "お詫び");
    }
}
