use crate::utils::error::TranslatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Latin,
    ClassicalChinese,
}

impl Language {
    pub const ALL: [Language; 3] = [
        Language::English,
        Language::Latin,
        Language::ClassicalChinese,
    ];

    /// Name used in prompts and panel headers.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Latin => "Latin",
            Language::ClassicalChinese => "Classical Chinese",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Latin => "la",
            Language::ClassicalChinese => "lzh",
        }
    }

    /// The two languages a round from `self` translates into, in display order.
    pub fn targets(self) -> [Language; 2] {
        match self {
            Language::English => [Language::Latin, Language::ClassicalChinese],
            Language::Latin => [Language::English, Language::ClassicalChinese],
            Language::ClassicalChinese => [Language::English, Language::Latin],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = TranslatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "la" | "lat" | "latin" => Ok(Language::Latin),
            "lzh" | "zh" | "chinese" | "classical chinese" => Ok(Language::ClassicalChinese),
            _ => Err(TranslatorError::UnknownLanguage {
                input: s.to_string(),
            }),
        }
    }
}

/// Everything one session can edit. Owned by the controller and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub english_text: String,
    pub latin_text: String,
    pub chinese_text: String,
    pub active_language: Option<Language>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english_text,
            Language::Latin => &self.latin_text,
            Language::ClassicalChinese => &self.chinese_text,
        }
    }

    pub fn set_text(&mut self, language: Language, text: impl Into<String>) {
        let slot = match language {
            Language::English => &mut self.english_text,
            Language::Latin => &mut self.latin_text,
            Language::ClassicalChinese => &mut self.chinese_text,
        };
        *slot = text.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Translating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStatus {
    Success,
    PartialFailure { failed: Vec<Language> },
    Failure,
    NothingToTranslate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub source: Language,
    pub status: RoundStatus,
    /// Target fields that were overwritten this round.
    pub updated: Vec<Language>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_never_include_source() {
        for language in Language::ALL {
            let targets = language.targets();
            assert!(!targets.contains(&language));
            assert_ne!(targets[0], targets[1]);
        }
    }

    #[test]
    fn test_parse_language_aliases() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("latin".parse::<Language>().unwrap(), Language::Latin);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::ClassicalChinese);
        assert_eq!(
            "Classical Chinese".parse::<Language>().unwrap(),
            Language::ClassicalChinese
        );
        assert_eq!(
            "classical_chinese".parse::<Language>().unwrap(),
            Language::ClassicalChinese
        );
        assert!("greek".parse::<Language>().is_err());
    }

    #[test]
    fn test_form_state_starts_empty() {
        let state = FormState::new();
        for language in Language::ALL {
            assert_eq!(state.text(language), "");
        }
        assert_eq!(state.active_language, None);
    }

    #[test]
    fn test_set_text_targets_one_field() {
        let mut state = FormState::new();
        state.set_text(Language::Latin, "Salve");
        assert_eq!(state.latin_text, "Salve");
        assert_eq!(state.english_text, "");
        assert_eq!(state.chinese_text, "");
    }
}
