#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

use crate::adapters::openai::{API_KEY_VAR, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use settings::{is_unresolved_reference, SettingsFile};

/// Values given on the command line; each one beats the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub endpoint: Option<String>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub endpoint: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn usable(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !is_unresolved_reference(v))
}

impl AppConfig {
    /// Loads `.env`, the settings file and the process environment, then applies `overrides`.
    pub fn load(config_path: Option<&str>, overrides: &Overrides) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => tracing::debug!("No .env file found"),
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        let settings = SettingsFile::load(config_path)?;
        Ok(Self::resolve(settings.as_ref(), overrides, |name| {
            std::env::var(name).ok()
        }))
    }

    /// Precedence: environment key over file key; CLI overrides over file values over defaults.
    pub fn resolve<F>(settings: Option<&SettingsFile>, overrides: &Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = settings.map(|s| s.openai.clone()).unwrap_or_default();

        let api_key = usable(env(API_KEY_VAR)).or_else(|| usable(file.api_key));

        Self {
            api_key,
            model: overrides
                .model
                .clone()
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: overrides
                .temperature
                .or(file.temperature)
                .unwrap_or(DEFAULT_TEMPERATURE),
            endpoint: overrides
                .endpoint
                .clone()
                .or(file.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

impl ConfigProvider for AppConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("openai.endpoint", &self.endpoint)?;
        validate_non_empty_string("openai.model", &self.model)?;
        validate_range("openai.temperature", self.temperature, 0.0, 2.0)?;
        Ok(())
    }
}
