pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::openai::OpenAiBackend;
pub use crate::adapters::terminal::{BusyIndicator, TerminalForm};
pub use crate::config::{AppConfig, Overrides};
pub use crate::core::{controller::FormController, translator::Translator};
pub use crate::domain::model::{FormState, Language, RoundOutcome, RoundStatus};
pub use crate::utils::error::{Result, TranslatorError};
