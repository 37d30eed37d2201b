//! # Nebula CLI
//!
//! Terminal front end for the Nebula blog: public listing and post views,
//! plus the password-gated admin area.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use nebula_infra::GeminiAssistant;

mod cli;
mod commands;
mod config;
mod error;
mod render;
mod state;
mod telemetry;

use cli::Cli;
use commands::Terminal;
use config::AppConfig;
use error::AppError;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            err.downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(ExitCode::FAILURE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let state = if cli.ephemeral {
        tracing::info!("Using in-memory storage; nothing will be saved");
        AppState::in_memory(
            &config.admin_password,
            Arc::new(GeminiAssistant::new(config.gemini.clone())),
        )?
    } else {
        AppState::new(&config)?
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    let mut term = Terminal {
        input: &mut input,
        output: &mut output,
        json: cli.json,
    };

    commands::run(cli.command, &state, &mut term).await?;
    Ok(())
}
