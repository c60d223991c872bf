use crate::domain::model::{CompletionRequest, FormState, Phase};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn temperature(&self) -> f32;
    fn endpoint(&self) -> &str;
}

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends one single-turn request and returns the first choice's content as received.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;

    /// Fails when no call could possibly succeed, without touching the network.
    fn check_credential(&self) -> Result<()> {
        Ok(())
    }
}

pub trait StateListener: Send + Sync {
    fn state_changed(&self, state: &FormState, phase: Phase);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl StateListener for NoopListener {
    fn state_changed(&self, _state: &FormState, _phase: Phase) {}
}
