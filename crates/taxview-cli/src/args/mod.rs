mod commands;

pub use commands::*;

use clap::Parser;

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "taxview")]
#[command(about = "View tax parameter schedules as a chart and a table", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Path to the parameter CSV (overrides the config file)"
    )]
    pub data_file: Option<String>,

    #[arg(long, default_value = "taxview.toml", global = true)]
    pub config: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
