use crate::utils::error::{Result, TranslatorError};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SETTINGS_PATH: &str = "translator.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub endpoint: Option<String>,
}

impl SettingsFile {
    /// Loads the settings file.
    ///
    /// The default path may be absent, in which case `Ok(None)` is returned.
    /// A path given explicitly must exist.
    pub fn load(explicit_path: Option<&str>) -> Result<Option<Self>> {
        match explicit_path {
            Some(path) => Self::from_file(path).map(Some),
            None if Path::new(DEFAULT_SETTINGS_PATH).exists() => {
                Self::from_file(DEFAULT_SETTINGS_PATH).map(Some)
            }
            None => {
                tracing::debug!("No {} found, using environment and defaults", DEFAULT_SETTINGS_PATH);
                Ok(None)
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| TranslatorError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        tracing::debug!("Loaded settings from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed = substitute_env_vars(content, lookup)?;

        toml::from_str(&processed).map_err(|e| TranslatorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replaces `${VAR}` references. Unknown variables are left in place.
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = env_reference()?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

/// True for a value that is still an unresolved `${VAR}` reference.
pub fn is_unresolved_reference(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("${") && value.ends_with('}') && !value[2..value.len() - 1].contains('}')
}

fn env_reference() -> Result<Regex> {
    Regex::new(r"\$\{([^}]+)\}").map_err(|e| TranslatorError::ConfigError {
        message: format!("invalid substitution pattern: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_settings() {
        let content = r#"
[openai]
api_key = "sk-test"
model = "gpt-4o"
temperature = 0.5
endpoint = "https://example.com/v1"
"#;

        let settings = SettingsFile::from_toml_str_with(content, |_| None).unwrap();

        assert_eq!(settings.openai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(settings.openai.model.as_deref(), Some("gpt-4o"));
        assert_eq!(settings.openai.temperature, Some(0.5));
        assert_eq!(settings.openai.endpoint.as_deref(), Some("https://example.com/v1"));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let settings = SettingsFile::from_toml_str_with("", |_| None).unwrap();
        assert!(settings.openai.api_key.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        let content = r#"
[openai]
api_key = "${MY_KEY}"
"#;

        let settings = SettingsFile::from_toml_str_with(content, |name| {
            (name == "MY_KEY").then(|| "sk-from-env".to_string())
        })
        .unwrap();

        assert_eq!(settings.openai.api_key.as_deref(), Some("sk-from-env"));
    }

    #[test]
    fn test_unknown_variable_is_left_in_place() {
        let content = r#"
[openai]
api_key = "${NOT_SET_ANYWHERE}"
"#;

        let settings = SettingsFile::from_toml_str_with(content, |_| None).unwrap();
        let key = settings.openai.api_key.unwrap();

        assert_eq!(key, "${NOT_SET_ANYWHERE}");
        assert!(is_unresolved_reference(&key));
        assert!(!is_unresolved_reference("sk-real"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SettingsFile::from_toml_str_with("[openai\nmodel = 1", |_| None).unwrap_err();
        assert!(matches!(err, TranslatorError::ConfigError { .. }));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[openai]\nmodel = \"gpt-4o-mini\"\n")
            .unwrap();

        let settings = SettingsFile::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.openai.model.as_deref(), Some("gpt-4o-mini"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(SettingsFile::load(missing.to_str()).is_err());
    }
}
