use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hc")]
#[command(about = "HackConnect community client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides the configured API environment)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
