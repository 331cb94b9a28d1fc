use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use taxview_core::ParamDataset;
use taxview_types::Year;

use crate::types::OutputFormat;

#[derive(Serialize)]
struct CheckReport {
    data_file: String,
    parameters: usize,
    years: usize,
    first_year: Option<Year>,
    last_year: Option<Year>,
    missing_cells: usize,
}

/// Validate the data file and report its shape. Any load error propagates
/// and fails the command.
pub fn handle(data_file: &Path, format: OutputFormat) -> Result<()> {
    let dataset = ParamDataset::load(data_file)?;

    let years = dataset.years();
    let report = CheckReport {
        data_file: data_file.display().to_string(),
        parameters: dataset.parameters().len(),
        years: years.len(),
        first_year: years.first().copied(),
        last_year: years.last().copied(),
        missing_cells: dataset.missing_cell_count(),
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "✓".green(), report.data_file);
    println!(
        "  {} parameters, {} year columns ({}-{})",
        report.parameters,
        report.years,
        report.first_year.unwrap_or_default(),
        report.last_year.unwrap_or_default()
    );
    if report.missing_cells > 0 {
        println!(
            "  {} {} missing value cells",
            "!".yellow(),
            report.missing_cells
        );
    } else {
        println!("  no missing value cells");
    }
    Ok(())
}
