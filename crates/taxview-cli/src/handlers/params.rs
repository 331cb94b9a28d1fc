use anyhow::Result;
use taxview_core::ParamDataset;

use crate::types::OutputFormat;

/// Print the selectable parameter names, first-occurrence order.
pub fn handle(dataset: &ParamDataset, format: OutputFormat) -> Result<()> {
    let parameters = dataset.parameters();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&parameters)?);
        return Ok(());
    }

    for name in &parameters {
        println!("{}", name);
    }
    Ok(())
}
