use std::path::PathBuf;

use anyhow::Result;
use is_terminal::IsTerminal;
use taxview_core::ParamDataset;

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;

/// Data file used when neither the flag nor the config names one.
const DEFAULT_DATA_FILE: &str = "data/tax_parameters.csv";

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from(&PathBuf::from(&cli.config))?;
    let data_file = resolve_data_file(&cli, &config);

    let Some(command) = cli.command else {
        if std::io::stdout().is_terminal() {
            let dataset = ParamDataset::load(&data_file)?;
            return handlers::view::handle(&dataset, &config);
        }
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::View => {
            let dataset = ParamDataset::load(&data_file)?;
            handlers::view::handle(&dataset, &config)
        }

        Commands::Params => {
            let dataset = ParamDataset::load(&data_file)?;
            handlers::params::handle(&dataset, cli.format)
        }

        Commands::Show { parameter } => {
            let dataset = ParamDataset::load(&data_file)?;
            handlers::show::handle(&dataset, &parameter, cli.format, &config)
        }

        Commands::Check => handlers::check::handle(&data_file, cli.format),
    }
}

/// Flag beats config beats the built-in default.
fn resolve_data_file(cli: &Cli, config: &Config) -> PathBuf {
    if let Some(path) = &cli.data_file {
        return PathBuf::from(path);
    }
    if let Some(path) = &config.data_file {
        return path.clone();
    }
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn show_guidance() {
    println!("taxview - Tax parameter schedule viewer\n");
    println!("Quick commands:");
    println!("  taxview view                      # Interactive chart + table");
    println!("  taxview params                    # List selectable parameters");
    println!("  taxview show <PARAMETER>          # Print one parameter's values");
    println!("  taxview check                     # Validate the data file\n");
    println!("For more commands:");
    println!("  taxview --help");
}
