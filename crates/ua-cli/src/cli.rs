use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ua")]
#[command(about = "Usage-analytics admin dashboard companion")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend base URL (overrides the configured api.base_url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
