use crate::domain::model::{CompletionRequest, Language};

pub const SYSTEM_PROMPT: &str = "You are a professional translator. Provide only the requested \
     translation without any additional text, explanations, or commentary.";

pub fn build_instruction(text: &str, source: Language, target: Language) -> String {
    format!(
        "Translate the following {} text to {}. Return ONLY the translated text with no \
         additional commentary, introduction, or notes: {}",
        source.name(),
        target.name(),
        text
    )
}

pub fn build_request(text: &str, source: Language, target: Language) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        user: build_instruction(text, source, target),
    }
}
