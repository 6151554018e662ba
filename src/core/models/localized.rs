//! Bilingual labels and the fallback helpers used when resolving them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages carried by every curriculum label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic, the language the curriculum dataset is authored in
    #[default]
    Ar,
    /// English
    En,
}

impl Language {
    /// The other language of the pair
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Short code used in config files (`ar` / `en`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Ar),
            "en" | "english" => Ok(Self::En),
            _ => Err(format!("Unknown language: '{s}' (expected 'ar' or 'en')")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A label with an Arabic and an English form
///
/// Either side may be empty in partially populated datasets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Arabic label
    #[serde(default)]
    pub ar: String,

    /// English label
    #[serde(default)]
    pub en: String,
}

impl LocalizedText {
    /// Create a label from both forms
    #[must_use]
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// The label in exactly `lang`, with no fallback (may be empty)
    #[must_use]
    pub fn exact(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    /// The label in `lang`, or `None` when that side is blank
    #[must_use]
    pub fn get(&self, lang: Language) -> Option<&str> {
        non_blank(Some(self.exact(lang)))
    }

    /// The label in `lang`, falling back to the other language when blank
    #[must_use]
    pub fn resolve(&self, lang: Language) -> Option<&str> {
        self.get(lang).or_else(|| self.get(lang.other()))
    }

    /// Returns true when both sides are blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resolve(Language::Ar).is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve an ordered fallback chain: the first non-blank candidate wins.
///
/// This is the single place that decides label precedence for the deriver, e.g.
/// `name → label → title → placeholder` for level and semester labels.
#[must_use]
pub fn first_non_blank<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().find_map(non_blank)
}
