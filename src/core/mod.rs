pub mod controller;
pub mod prompt;
pub mod translator;

pub use crate::domain::model::{
    CompletionRequest, FormState, Language, Notice, NoticeLevel, Phase, RoundOutcome, RoundStatus,
};
pub use crate::domain::ports::{CompletionBackend, ConfigProvider, NoopListener, StateListener};
pub use crate::utils::error::Result;
