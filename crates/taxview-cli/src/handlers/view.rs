use anyhow::Result;
use is_terminal::IsTerminal;
use taxview_core::ParamDataset;

use crate::config::Config;
use crate::presentation::renderers::tui;

/// Launch the interactive viewer for an already-loaded dataset.
pub fn handle(dataset: &ParamDataset, config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("the interactive viewer requires a terminal; try 'taxview show <PARAMETER>'");
    }
    if dataset.parameters().is_empty() {
        anyhow::bail!("data file has no parameter rows");
    }

    tui::run(dataset, config.currency_symbol())
}
