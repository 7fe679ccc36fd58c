//! `Country` and `EventScope`.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One of the two countries whose calendars are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    /// South Korea (`KR`).
    #[serde(rename = "KR")]
    Korea,
    /// Japan (`JP`).
    #[serde(rename = "JP")]
    Japan,
}

impl Country {
    /// Both countries, Korea first.
    pub const ALL: [Country; 2] = [Country::Korea, Country::Japan];

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Korea => "KR",
            Country::Japan => "JP",
        }
    }

    /// Parse an alpha-2 code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "KR" => Ok(Country::Korea),
            "JP" => Ok(Country::Japan),
            other => Err(Error::InvalidArgument(format!(
                "unsupported country code {other:?}"
            ))),
        }
    }

    /// The other country of the pair.
    pub fn counterpart(&self) -> Self {
        match self {
            Country::Korea => Country::Japan,
            Country::Japan => Country::Korea,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Country::Korea => "South Korea",
            Country::Japan => "Japan",
        };
        write!(f, "{name}")
    }
}

/// Which country's computation a user event is merged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventScope {
    /// Korea-side only.
    #[serde(rename = "KR")]
    Korea,
    /// Japan-side only.
    #[serde(rename = "JP")]
    Japan,
    /// Both countries.
    Both,
}

impl EventScope {
    /// Return `true` if an event with this scope applies to `country`.
    pub fn includes(&self, country: Country) -> bool {
        matches!(
            (self, country),
            (EventScope::Both, _)
                | (EventScope::Korea, Country::Korea)
                | (EventScope::Japan, Country::Japan)
        )
    }
}
