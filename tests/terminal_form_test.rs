use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use trilingual_translator::core::{CompletionBackend, CompletionRequest};
use trilingual_translator::{FormController, Language, Result, TerminalForm, Translator};

/// Replies with a canned translation chosen by the target named in the instruction.
#[derive(Clone, Default)]
struct CannedBackend {
    prompts: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl CompletionBackend for CannedBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.prompts.lock().unwrap().push(request.user.clone());
        let reply = if request.user.contains("to Latin.") {
            "Salve"
        } else if request.user.contains("to Classical Chinese.") {
            "你好"
        } else {
            "Hello"
        };
        Ok(reply.to_string())
    }
}

async fn run_session(script: &str) -> (String, CannedBackend, FormController<CannedBackend>) {
    let backend = CannedBackend::default();
    let mut controller = FormController::new(Translator::new(backend.clone()));
    let mut form = TerminalForm::new(20);
    let mut output = Vec::new();

    form.run(&mut controller, script.as_bytes(), &mut output)
        .await
        .unwrap();

    (String::from_utf8(output).unwrap(), backend, controller)
}

#[tokio::test]
async fn test_edit_then_translate_updates_other_panels() {
    let (output, backend, controller) = run_session("edit en Hello\ntranslate en\nquit\n").await;

    assert_eq!(controller.state().latin_text, "Salve");
    assert_eq!(controller.state().chinese_text, "你好");
    assert_eq!(controller.state().active_language, Some(Language::English));
    assert_eq!(backend.prompts.lock().unwrap().len(), 2);
    assert!(output.contains("English (edited)"));
    assert!(output.contains("✅ Translated from English into Latin and Classical Chinese."));
}

#[tokio::test]
async fn test_translate_with_inline_text() {
    let (_, backend, controller) = run_session("translate la Salve\n").await;

    assert_eq!(controller.state().english_text, "Hello");
    assert_eq!(controller.state().chinese_text, "你好");
    let prompts = backend.prompts.lock().unwrap();
    assert!(prompts[0].contains("Latin text to English."));
    assert!(prompts[1].contains("Latin text to Classical Chinese."));
}

#[tokio::test]
async fn test_empty_panel_submission_makes_no_calls() {
    let (output, backend, _) = run_session("translate lzh\n").await;

    assert!(backend.prompts.lock().unwrap().is_empty());
    assert!(output.contains("nothing was translated"));
}

#[tokio::test]
async fn test_bad_commands_are_reported_and_ignored() {
    let (output, backend, controller) = run_session("fly away\nedit greek hi\nshow\n").await;

    assert!(output.contains("Unknown command 'fly'"));
    assert!(output.contains("'greek' is not one of"));
    assert!(backend.prompts.lock().unwrap().is_empty());
    assert_eq!(controller.state().english_text, "");
}

#[tokio::test]
async fn test_clear_empties_the_session() {
    let (_, _, controller) = run_session("translate en Hello\nclear\n").await;

    assert_eq!(controller.state().english_text, "");
    assert_eq!(controller.state().latin_text, "");
    assert_eq!(controller.state().active_language, None);
}
