use anyhow::Result;
use owo_colors::OwoColorize;
use taxview_core::ParamDataset;

use crate::config::Config;
use crate::presentation::formatters::table::SeriesTableView;
use crate::presentation::presenters::series::build_series_view;
use crate::types::OutputFormat;

/// Non-interactive rendition of one parameter: the raw rows plus the
/// missing-values warning, or the points as JSON.
pub fn handle(
    dataset: &ParamDataset,
    parameter: &str,
    format: OutputFormat,
    config: &Config,
) -> Result<()> {
    let view = build_series_view(dataset, parameter, config.currency_symbol());

    if view.table_rows.is_empty() {
        anyhow::bail!(
            "unknown parameter '{}'. Available: {}",
            parameter,
            dataset.parameters().join(", ")
        );
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view.table_rows)?);
        return Ok(());
    }

    println!("{}", view.parameter.bold());
    print!(
        "{}",
        SeriesTableView::new(&view.table_rows, config.currency_symbol())
    );
    if view.has_missing {
        println!(
            "{}",
            "Some years have missing values. These are excluded from the chart.".yellow()
        );
    }
    Ok(())
}
