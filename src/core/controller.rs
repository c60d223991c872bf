use crate::core::translator::Translator;
use crate::domain::model::{FormState, Language, Notice, Phase, RoundOutcome, RoundStatus};
use crate::domain::ports::{CompletionBackend, NoopListener, StateListener};

/// Owns one session's form state and runs translation rounds against it.
pub struct FormController<B: CompletionBackend, L: StateListener = NoopListener> {
    translator: Translator<B>,
    state: FormState,
    phase: Phase,
    listener: L,
}

impl<B: CompletionBackend> FormController<B, NoopListener> {
    pub fn new(translator: Translator<B>) -> Self {
        Self {
            translator,
            state: FormState::new(),
            phase: Phase::Idle,
            listener: NoopListener,
        }
    }
}

impl<B: CompletionBackend, L: StateListener> FormController<B, L> {
    pub fn with_listener<N: StateListener>(self, listener: N) -> FormController<B, N> {
        FormController {
            translator: self.translator,
            state: self.state,
            phase: self.phase,
            listener,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Translating
    }

    pub fn translator(&self) -> &Translator<B> {
        &self.translator
    }

    pub fn reset(&mut self) {
        self.state = FormState::new();
        self.listener.state_changed(&self.state, self.phase);
    }

    /// Runs one round: stores `input` as the `source` field, then translates it
    /// into the two other languages, one call after the other.
    pub async fn submit(&mut self, source: Language, input: &str) -> RoundOutcome {
        self.state.set_text(source, input);
        self.state.active_language = Some(source);

        let mut notices = Vec::new();

        if input.is_empty() {
            notices.push(Notice::info(format!("Nothing to translate: the {} panel is empty", source)));
            self.listener.state_changed(&self.state, self.phase);
            return RoundOutcome {
                source,
                status: RoundStatus::NothingToTranslate,
                updated: Vec::new(),
                notices,
            };
        }

        if let Err(e) = self.translator.check_ready() {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            notices.push(Notice::error(format!("Translation error: {}", e)));
            self.listener.state_changed(&self.state, self.phase);
            return RoundOutcome {
                source,
                status: RoundStatus::Failure,
                updated: Vec::new(),
                notices,
            };
        }

        self.phase = Phase::Translating;
        self.listener.state_changed(&self.state, self.phase);
        tracing::info!("Translating from {}", source);

        let mut updated = Vec::new();
        let mut failed = Vec::new();

        for target in source.targets() {
            let translation = self
                .translator
                .translate(input, source, target, &mut notices)
                .await;

            if translation.is_empty() {
                failed.push(target);
            } else {
                self.state.set_text(target, translation);
                updated.push(target);
            }
        }

        let status = match (updated.len(), failed.len()) {
            (_, 0) => RoundStatus::Success,
            (0, _) => RoundStatus::Failure,
            _ => {
                let missing: Vec<&str> = failed.iter().map(|l| l.name()).collect();
                notices.push(Notice::warning(format!(
                    "Incomplete translation: no {} result; the previous text was kept",
                    missing.join(" or ")
                )));
                RoundStatus::PartialFailure { failed }
            }
        };

        match &status {
            RoundStatus::Success => tracing::info!("✅ Round from {} completed", source),
            RoundStatus::PartialFailure { failed } => {
                tracing::warn!("⚠️ Round from {} incomplete: {:?} failed", source, failed)
            }
            _ => tracing::warn!("❌ Round from {} failed", source),
        }

        self.phase = Phase::Idle;
        self.listener.state_changed(&self.state, self.phase);

        RoundOutcome {
            source,
            status,
            updated,
            notices,
        }
    }
}
