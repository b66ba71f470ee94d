//! Supported languages and the source/target pair rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the translator can be asked to read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Auto,
    En,
    Id,
    Fr,
    De,
    Es,
    It,
    Pt,
    Zh,
    Ja,
    Ko,
    Ar,
    Hi,
    Ru,
    Nl,
    Sv,
    Pl,
    Th,
    Vi,
    Ms,
}

impl Language {
    /// Every language, in selector order
    pub const ALL: [Language; 20] = [
        Language::Auto,
        Language::En,
        Language::Id,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Pt,
        Language::Zh,
        Language::Ja,
        Language::Ko,
        Language::Ar,
        Language::Hi,
        Language::Ru,
        Language::Nl,
        Language::Sv,
        Language::Pl,
        Language::Th,
        Language::Vi,
        Language::Ms,
    ];

    /// Short code (`"en"`, `"auto"`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::En => "en",
            Language::Id => "id",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Ar => "ar",
            Language::Hi => "hi",
            Language::Ru => "ru",
            Language::Nl => "nl",
            Language::Sv => "sv",
            Language::Pl => "pl",
            Language::Th => "th",
            Language::Vi => "vi",
            Language::Ms => "ms",
        }
    }

    /// Human-readable name, as it appears in prompts
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Auto => "Auto Detect",
            Language::En => "English",
            Language::Id => "Indonesian",
            Language::Fr => "French",
            Language::De => "German",
            Language::Es => "Spanish",
            Language::It => "Italian",
            Language::Pt => "Portuguese",
            Language::Zh => "Chinese (Simplified)",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
            Language::Ar => "Arabic",
            Language::Hi => "Hindi",
            Language::Ru => "Russian",
            Language::Nl => "Dutch",
            Language::Sv => "Swedish",
            Language::Pl => "Polish",
            Language::Th => "Thai",
            Language::Vi => "Vietnamese",
            Language::Ms => "Malay",
        }
    }

    /// Parse a language code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }

    /// Whether this language may be used as a translation target
    pub fn is_target(&self) -> bool {
        *self != Language::Auto
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|l| l == self).unwrap_or(0)
    }

    /// Next language in selector order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous language in selector order, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Next target language, skipping `Auto`
    pub fn next_target(&self) -> Self {
        let next = self.next();
        if next.is_target() {
            next
        } else {
            next.next()
        }
    }

    /// Previous target language, skipping `Auto`
    pub fn prev_target(&self) -> Self {
        let prev = self.prev();
        if prev.is_target() {
            prev
        } else {
            prev.prev()
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Exchange source and target. Auto-detect cannot become a target, so
/// the pair is left untouched when the source is `Auto`.
pub fn swap(source: &mut Language, target: &mut Language) -> bool {
    if *source == Language::Auto {
        return false;
    }
    std::mem::swap(source, target);
    true
}
