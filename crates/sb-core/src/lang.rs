//! `Lang`: language of generated advisory and template text.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Korean.
    #[default]
    Ko,
    /// Japanese.
    Ja,
}

impl Lang {
    /// BCP 47 primary tag (`"ko"` / `"ja"`).
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::Ko => "ko",
            Lang::Ja => "ja",
        }
    }

    /// Parse a language tag; region subtags are ignored (`"ja-JP"` → `Ja`).
    pub fn from_tag(tag: &str) -> Result<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ko" => Ok(Lang::Ko),
            "ja" => Ok(Lang::Ja),
            _ => Err(Error::InvalidArgument(format!("unsupported language {tag:?}"))),
        }
    }

    /// Name of the language, written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Ko => "한국어",
            Lang::Ja => "日本語",
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
