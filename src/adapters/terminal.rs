//! Terminal rendition of the three-panel form.
//!
//! Each panel has a draft the user edits with `edit`, and a `translate`
//! action that submits the draft to the [`FormController`]. The form is
//! rendered once per command, from the state the controller hands back.

use crate::core::controller::FormController;
use crate::domain::model::{FormState, Language, NoticeLevel, Phase, RoundOutcome, RoundStatus};
use crate::domain::ports::{CompletionBackend, StateListener};
use crate::utils::error::{Result, TranslatorError};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const TITLE: &str = "Trilingual Translator - English, Latin, Classical Chinese";
pub const SUBTITLE: &str = "Enter text in any of the three languages and translate to the others.";
pub const DEFAULT_PANEL_WIDTH: usize = 28;

pub const HELP: &str = "\
Commands:
  edit <lang> <text>         replace the draft in a panel
  translate <lang> [text]    translate a panel into the other two languages
  show                       redraw the form
  clear                      empty all panels
  help                       show this list
  quit                       leave
Languages: en (English), la (Latin), lzh (Classical Chinese). Use \\n for a line break.";

pub const SETUP_INSTRUCTIONS: &str = "\
Setup Instructions
  1. Create a file named .env in the working directory
  2. Add your OpenAI API key to it in this format: OPENAI_API_KEY=your_api_key_here
     (or set api_key under [openai] in translator.toml)
  3. Start the translator again";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Edit { language: Language, text: String },
    Translate { language: Language, text: Option<String> },
    Show,
    Clear,
    Help,
    Quit,
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn split_language(rest: &str, command: &str) -> Result<(Language, Option<String>)> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(TranslatorError::InvalidCommand {
            message: format!("'{}' needs a language: en, la or lzh", command),
        });
    }
    let (token, text) = match rest.split_once(char::is_whitespace) {
        Some((token, text)) => (token, Some(unescape(text))),
        None => (rest, None),
    };
    Ok((token.parse()?, text))
}

pub fn parse_command(line: &str) -> Result<FormCommand> {
    let line = line.trim();
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match command.to_lowercase().as_str() {
        "" | "show" | "s" => Ok(FormCommand::Show),
        "edit" | "e" => {
            let (language, text) = split_language(rest, "edit")?;
            Ok(FormCommand::Edit {
                language,
                text: text.unwrap_or_default(),
            })
        }
        "translate" | "t" => {
            let (language, text) = split_language(rest, "translate")?;
            Ok(FormCommand::Translate { language, text })
        }
        "clear" => Ok(FormCommand::Clear),
        "help" | "h" | "?" => Ok(FormCommand::Help),
        "quit" | "exit" | "q" => Ok(FormCommand::Quit),
        other => Err(TranslatorError::InvalidCommand {
            message: format!("Unknown command '{}'", other),
        }),
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let chars: Vec<char> = raw.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        for chunk in chars.chunks(width) {
            lines.push(chunk.iter().collect());
        }
    }
    lines
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn status_banner(outcome: &RoundOutcome) -> String {
    let targets: Vec<&str> = outcome.source.targets().iter().map(|l| l.name()).collect();
    match &outcome.status {
        RoundStatus::Success => format!(
            "✅ Translated from {} into {}.",
            outcome.source,
            targets.join(" and ")
        ),
        RoundStatus::PartialFailure { failed } => {
            let failed: Vec<&str> = failed.iter().map(|l| l.name()).collect();
            format!(
                "⚠️ Incomplete translation from {}: {} unavailable.",
                outcome.source,
                failed.join(" and ")
            )
        }
        RoundStatus::Failure => format!("❌ Translation from {} failed.", outcome.source),
        RoundStatus::NothingToTranslate => {
            format!("ℹ️ The {} panel is empty; nothing was translated.", outcome.source)
        }
    }
}

/// Lays out the three panels side by side, then the action row and the last round's status.
pub fn render(
    state: &FormState,
    drafts: &FormState,
    phase: Phase,
    last: Option<&RoundOutcome>,
    width: usize,
) -> String {
    let width = width.max(8);
    let separator = " │ ";
    let mut out = String::new();

    out.push_str(TITLE);
    out.push('\n');
    out.push_str(SUBTITLE);
    out.push('\n');
    out.push('\n');

    let headers: Vec<String> = Language::ALL
        .iter()
        .map(|&language| {
            let mut header = language.name().to_string();
            if state.active_language == Some(language) {
                header.push_str(" *");
            }
            if drafts.text(language) != state.text(language) {
                header.push_str(" (edited)");
            }
            pad(&header, width)
        })
        .collect();
    out.push_str(headers.join(separator).trim_end());
    out.push('\n');
    let rule = "─".repeat(width);
    out.push_str(&[rule.as_str(), rule.as_str(), rule.as_str()].join("─┼─"));
    out.push('\n');

    let columns: Vec<Vec<String>> = Language::ALL
        .iter()
        .map(|&language| wrap(drafts.text(language), width))
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(1).max(3);
    for row in 0..rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| pad(column.get(row).map(String::as_str).unwrap_or(""), width))
            .collect();
        out.push_str(cells.join(separator).trim_end());
        out.push('\n');
    }
    out.push('\n');

    let actions: Vec<String> = Language::ALL
        .iter()
        .map(|language| match phase {
            Phase::Idle => pad(&format!("[translate {}]", language.code()), width),
            Phase::Translating => pad("(translating...)", width),
        })
        .collect();
    out.push_str(actions.join(separator).trim_end());
    out.push('\n');

    if let Some(outcome) = last {
        out.push('\n');
        out.push_str(&status_banner(outcome));
        out.push('\n');
        for notice in &outcome.notices {
            let marker = match notice.level {
                NoticeLevel::Info => "ℹ️",
                NoticeLevel::Warning => "⚠️",
                NoticeLevel::Error => "❌",
            };
            out.push_str(&format!("{} {}\n", marker, notice.message));
        }
    }

    out
}

/// Prints a busy line while a round is running.
#[derive(Debug, Clone, Copy, Default)]
pub struct BusyIndicator;

impl StateListener for BusyIndicator {
    fn state_changed(&self, state: &FormState, phase: Phase) {
        if phase == Phase::Translating {
            if let Some(source) = state.active_language {
                eprintln!("⏳ Translating from {}... (translate actions disabled)", source);
            }
        }
    }
}

pub struct TerminalForm {
    drafts: FormState,
    last: Option<RoundOutcome>,
    width: usize,
}

impl Default for TerminalForm {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_WIDTH)
    }
}

impl TerminalForm {
    pub fn new(width: usize) -> Self {
        Self {
            drafts: FormState::new(),
            last: None,
            width,
        }
    }

    pub fn drafts(&self) -> &FormState {
        &self.drafts
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last.as_ref()
    }

    fn draw<B, L, W>(&self, controller: &FormController<B, L>, output: &mut W) -> Result<()>
    where
        B: CompletionBackend,
        L: StateListener,
        W: Write,
    {
        write!(
            output,
            "{}",
            render(
                controller.state(),
                &self.drafts,
                controller.phase(),
                self.last.as_ref(),
                self.width,
            )
        )?;
        Ok(())
    }

    /// Reads commands until `quit` or end of input.
    pub async fn run<B, L, R, W>(
        &mut self,
        controller: &mut FormController<B, L>,
        input: R,
        output: &mut W,
    ) -> Result<()>
    where
        B: CompletionBackend,
        L: StateListener,
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        self.drafts = controller.state().clone();
        self.draw(controller, output)?;

        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(output)?;
                break;
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", line, e);
                    writeln!(output, "❌ {}", e.user_friendly_message())?;
                    writeln!(output, "💡 {}", e.recovery_suggestion())?;
                    continue;
                }
            };

            match command {
                FormCommand::Quit => break,
                FormCommand::Help => {
                    writeln!(output, "{}", HELP)?;
                }
                FormCommand::Show => self.draw(controller, output)?,
                FormCommand::Clear => {
                    controller.reset();
                    self.drafts = FormState::new();
                    self.last = None;
                    self.draw(controller, output)?;
                }
                FormCommand::Edit { language, text } => {
                    self.drafts.set_text(language, text);
                    self.draw(controller, output)?;
                }
                FormCommand::Translate { language, text } => {
                    if let Some(text) = text {
                        self.drafts.set_text(language, text);
                    }
                    let input = self.drafts.text(language).to_string();
                    let outcome = controller.submit(language, &input).await;
                    self.drafts = controller.state().clone();
                    self.last = Some(outcome);
                    self.draw(controller, output)?;
                }
            }
        }

        Ok(())
    }
}
