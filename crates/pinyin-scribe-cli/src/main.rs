//! pinyin-scribe CLI entry point

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinyin_scribe::config::LogLevel;
use pinyin_scribe_cli::Cli;
use pinyin_scribe_cli::commands::execute;
use pinyin_scribe_cli::config::{ConfigOverrides, ENV_LOG_FILTER, load_config};

fn main() -> anyhow::Result<ExitCode> {
  let cli = Cli::parse();

  let config = load_config(cli.overrides().or(ConfigOverrides::from_env()));
  let level = config.as_ref().map_or(LogLevel::Info, |c| c.log_level());

  // Logging initialization (stderr, so stdout stays pure JSON)
  let filter =
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(level.as_str()));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let outcome = config.and_then(|config| {
    tracing::debug!(command = ?cli.command, "Running command");
    execute(&cli.command, &config)
  });

  let (body, exit_code) = match outcome {
    Ok(value) => (value, ExitCode::SUCCESS),
    Err(err) => {
      tracing::error!(code = err.code(), error = %err, "Command failed");
      (err.to_body(), ExitCode::from(err.kind().exit_code()))
    }
  };

  let rendered = serde_json::to_string_pretty(&body).context("failed to render output")?;
  writeln!(io::stdout().lock(), "{rendered}").context("failed to write output")?;

  Ok(exit_code)
}
