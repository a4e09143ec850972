//! Intradesk binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing (stderr, so stdout stays machine-readable)
//! 3. Run the requested subcommand

mod cli;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use intradesk_chat::{source_icon, PromptSet, PromptTemplate};
use intradesk_core::config::IntradeskConfig;
use intradesk_core::error::IntradeskError;
use intradesk_core::types::AnswerMode;
use intradesk_roster::{FormatterOptions, RosterFormatter};

use cli::{CliArgs, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first so its log level can seed the subscriber.
    let config_file = args.resolve_config_path();
    let loaded = IntradeskConfig::load(&config_file);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Tracing.
    let log_level = args.resolve_log_level(&config);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    match &loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load config. Using defaults."
        ),
    }

    match args.command {
        Command::Documents {
            csv,
            spotlight,
            strict,
        } => run_documents(&config, csv, spotlight, strict)?,
        Command::Icon { source } => println!("{}", source_icon(&source)),
        Command::Prompts { mode } => run_prompts(mode.unwrap_or(config.chat.mode))?,
    }

    Ok(())
}

fn run_documents(
    config: &IntradeskConfig,
    csv: Option<PathBuf>,
    spotlight: Option<String>,
    strict: bool,
) -> Result<(), IntradeskError> {
    let path = csv.unwrap_or_else(|| PathBuf::from(&config.roster.csv_path));
    let mut options = FormatterOptions::from(&config.roster);
    if spotlight.is_some() {
        options.spotlight_department = spotlight;
    }
    let formatter = RosterFormatter::new(options);

    let documents = if strict {
        formatter.try_format(&path)?
    } else {
        formatter.format_file(&path)
    };
    tracing::info!(
        path = %path.display(),
        documents = documents.len(),
        "Roster documents ready"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &documents)?;
    writeln!(out)?;
    Ok(())
}

fn run_prompts(mode: AnswerMode) -> Result<(), IntradeskError> {
    let prompts = PromptSet::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "# Mode: {} ({})", mode.label(), mode)?;
    write_template(&mut out, "Standalone question", &prompts.standalone_question)?;
    write_template(&mut out, "Answer", prompts.answer_for(mode))?;
    Ok(())
}

fn write_template(
    out: &mut impl Write,
    title: &str,
    template: &PromptTemplate,
) -> Result<(), IntradeskError> {
    writeln!(out, "\n## {title}")?;
    writeln!(out, "variables: {}", template.variables().join(", "))?;
    writeln!(out, "{}", serde_json::to_string_pretty(template.messages())?)?;
    Ok(())
}
