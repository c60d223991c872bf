use crate::config::Overrides;
use crate::domain::model::Language;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "trilingual-translator")]
#[command(about = "Translate between English, Latin and Classical Chinese with an LLM")]
pub struct CliConfig {
    /// Path to a TOML settings file (defaults to ./translator.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Model name, overrides the settings file
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature, overrides the settings file
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Base URL of an OpenAI-compatible API, overrides the settings file
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Run a single round from this language and exit
    #[arg(long, requires = "text")]
    pub from: Option<Language>,

    /// Source text for a single round
    #[arg(long, requires = "from")]
    pub text: Option<String>,

    /// Width of each panel in characters
    #[arg(long, default_value = "28")]
    pub width: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            model: self.model.clone(),
            temperature: self.temperature,
            endpoint: self.endpoint.clone(),
        }
    }

    pub fn single_round(&self) -> Option<(Language, &str)> {
        match (self.from, self.text.as_deref()) {
            (Some(language), Some(text)) => Some((language, text)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_interactive() {
        let config = CliConfig::try_parse_from(["trilingual-translator"]).unwrap();
        assert!(config.single_round().is_none());
        assert_eq!(config.width, 28);
        assert!(config.overrides().model.is_none());
    }

    #[test]
    fn test_single_round_flags() {
        let config = CliConfig::try_parse_from([
            "trilingual-translator",
            "--from",
            "la",
            "--text",
            "Carpe diem",
            "--model",
            "gpt-4o",
        ])
        .unwrap();

        assert_eq!(config.single_round(), Some((Language::Latin, "Carpe diem")));
        assert_eq!(config.overrides().model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_from_requires_text() {
        assert!(CliConfig::try_parse_from(["trilingual-translator", "--from", "en"]).is_err());
        assert!(CliConfig::try_parse_from(["trilingual-translator", "--from", "x", "--text", "a"])
            .is_err());
    }
}
