//! hc - HackConnect community client
//!
//! Talks to the HackConnect REST API and keeps the signed-in session in the
//! config directory between invocations.
//!
//! # Examples
//!
//! ```bash
//! # Sign in and check the session
//! hc login --email ada@example.com --password hunter22
//! hc whoami --pretty
//!
//! # Look at another member and send a request
//! hc peer card 42
//! hc peer connect 42
//! ```

use hc_auth::FileStorage;
use hc_cli::cli::Cli;
use hc_cli::{CliError, CliResult, Client, SessionStore, app, logger};
use hc_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli.command, cli.server).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            debug!("Command failed at {}", e.location());
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: hc_cli::commands::Commands,
    server: Option<String>,
) -> CliResult<serde_json::Value> {
    let config = Config::load()?;
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();
    config.validate()?;

    // Explicit flag > configured environment
    let base_url = match server {
        Some(url) if !url.trim().is_empty() => url,
        Some(_) => return Err(CliError::validation("--server cannot be empty")),
        None => config.api.base_url()?,
    };

    let storage = FileStorage::open(config.session_path()?)?;
    let mut store = SessionStore::new(Client::new(&base_url, None), storage);

    app::run(command, &mut store).await
}
