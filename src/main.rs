use clap::Parser;
use std::io::Write;
use trilingual_translator::adapters::terminal::{render, SETUP_INSTRUCTIONS};
use trilingual_translator::core::Phase;
use trilingual_translator::utils::{logger, validation::Validate};
use trilingual_translator::{
    AppConfig, BusyIndicator, CliConfig, FormController, OpenAiBackend, RoundStatus, TerminalForm,
    Translator,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting trilingual-translator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::load(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }
    tracing::debug!("Resolved config: {:?}", config);

    if !config.has_credential() {
        tracing::warn!("⚠️ No API key configured; every translation will fail until one is set");
        eprintln!("{}\n", SETUP_INSTRUCTIONS);
    }

    let backend = OpenAiBackend::new(&config);
    let mut controller =
        FormController::new(Translator::new(backend)).with_listener(BusyIndicator);

    if let Some((language, text)) = cli.single_round() {
        let outcome = controller.submit(language, text).await;
        let state = controller.state();
        print!(
            "{}",
            render(state, state, Phase::Idle, Some(&outcome), cli.width)
        );
        std::io::stdout().flush()?;

        let exit_code = match outcome.status {
            RoundStatus::Success | RoundStatus::NothingToTranslate => 0,
            RoundStatus::PartialFailure { .. } => 2,
            RoundStatus::Failure => 1,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
        return Ok(());
    }

    let mut form = TerminalForm::new(cli.width);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    if let Err(e) = form.run(&mut controller, stdin, &mut stdout).await {
        tracing::error!(
            "❌ Form loop stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("Session ended");
    Ok(())
}
