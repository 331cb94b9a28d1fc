use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive viewer (chart + table)")]
    View,

    #[command(about = "List the selectable parameter names")]
    Params,

    #[command(about = "Print one parameter's yearly values")]
    Show {
        #[arg(help = "Parameter name, exactly as listed by 'params'")]
        parameter: String,
    },

    #[command(about = "Validate the data file and report its shape")]
    Check,
}
