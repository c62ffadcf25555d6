//! ua - usage-analytics admin dashboard companion
//!
//! # Examples
//!
//! ```bash
//! # Deployment-wide overview
//! ua overview --pretty
//!
//! # Per-user detail
//! ua user abc123
//!
//! # Filtered analytics
//! ua analytics --start-date 2024-01-01 --feature export
//! ```

mod cli;
mod commands;
mod error;
mod logger;

use crate::{cli::Cli, commands::Commands, error::Result as CliResult};

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use serde_json::Value;
use ua_client::{UsageClient, mock};
use ua_config::Config;
use ua_core::AnalyticsQuery;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    logger::initialize(&config.logging, &Config::config_dir()?)?;
    if config.logging.file.is_some() {
        config.log_summary();
    }

    let payload = fetch(&config, cli.command).await?;
    print_json(&payload, cli.pretty)?;

    Ok(())
}

async fn fetch(config: &Config, command: Commands) -> CliResult<Value> {
    if config.api.mock_enabled {
        debug!("Mock mode enabled, serving fixture payloads");
        let value = match command {
            Commands::Overview => serde_json::to_value(mock::overview())?,
            Commands::User { user_id } => serde_json::to_value(mock::user_details(&user_id))?,
            Commands::Analytics {
                start_date,
                end_date,
                feature,
            } => serde_json::to_value(mock::analytics(&AnalyticsQuery {
                start_date,
                end_date,
                feature,
            }))?,
        };
        return Ok(value);
    }

    let client = UsageClient::from_config(&config.api);
    debug!("Querying {}", client.usage_base);

    let value = match command {
        Commands::Overview => serde_json::to_value(client.get_usage_overview().await?)?,
        Commands::User { user_id } => {
            serde_json::to_value(client.get_user_usage_details(&user_id).await?)?
        }
        Commands::Analytics {
            start_date,
            end_date,
            feature,
        } => {
            let query = AnalyticsQuery {
                start_date,
                end_date,
                feature,
            };
            serde_json::to_value(client.get_usage_analytics(&query).await?)?
        }
    };

    Ok(value)
}

fn print_json(payload: &Value, pretty: bool) -> CliResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{rendered}");
    Ok(())
}
