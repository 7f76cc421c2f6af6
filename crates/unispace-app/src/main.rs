// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unispace — Unicode whitespace substitution for pasted and PDF text
//
// Entry point. Loads settings, initialises logging and backend services, and
// dispatches the command.

mod cli;
mod services;
mod state;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use unispace_core::AppConfig;
use unispace_core::human_errors::humanize_error;

use cli::Cli;
use services::app_services::AppServices;
use services::data_dir;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(data_dir::config_path);
    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            return ExitCode::from(2);
        }
    };

    init_logging(&config.log_filter, cli.verbose);
    tracing::info!(config = %config_path.display(), "Unispace starting");

    let services = AppServices::init(config);
    tracing::debug!(
        max_upload_bytes = services.config().max_upload_bytes,
        timeout_secs = services.config().extraction_timeout_secs,
        "limits"
    );
    match cli::run(cli.command, &services).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            let human = humanize_error(&err);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the transformed text.
fn init_logging(default_filter: &str, verbose: u8) {
    let directive = match verbose {
        0 => default_filter,
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .init();
}
