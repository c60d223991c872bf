use crate::core::prompt::build_request;
use crate::domain::model::{Language, Notice};
use crate::domain::ports::CompletionBackend;
use crate::utils::error::Result;

pub struct Translator<B: CompletionBackend> {
    backend: B,
}

impl<B: CompletionBackend> Translator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn check_ready(&self) -> Result<()> {
        self.backend.check_credential()
    }

    /// Returns the trimmed translation, or an empty string when none is available.
    ///
    /// Failures are pushed onto `notices` instead of being returned, so callers
    /// must read an empty string as "unavailable" rather than as a real translation.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
        notices: &mut Vec<Notice>,
    ) -> String {
        if text.is_empty() {
            return String::new();
        }

        let request = build_request(text, source, target);
        tracing::debug!("Requesting {} -> {} ({} chars)", source, target, text.chars().count());

        match self.backend.complete(&request).await {
            Ok(content) => {
                let translation = content.trim().to_string();
                if translation.is_empty() {
                    tracing::warn!("Empty reply for {} -> {}", source, target);
                    notices.push(Notice::warning(format!(
                        "The model returned an empty {} translation",
                        target
                    )));
                }
                translation
            }
            Err(e) => {
                tracing::error!(
                    "❌ Translation {} -> {} failed: {} (Category: {:?}, Severity: {:?})",
                    source,
                    target,
                    e,
                    e.category(),
                    e.severity()
                );
                notices.push(Notice::error(format!("Translation error: {}", e)));
                String::new()
            }
        }
    }
}
