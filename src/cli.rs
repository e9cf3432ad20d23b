use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "logo-history-wiki",
    version,
    about = "University logo history wiki: browsing server and static page generator"
)]
pub struct CliArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        default_value = "config/wiki",
        help = "Configuration file (extension optional); WIKI_* variables override it."
    )]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the searchable university grid
    Serve,
    /// Write universities/{id}.html for the given ids (all catalog ids when none are given)
    Generate {
        #[arg(value_name = "ID")]
        ids: Vec<String>,
    },
    /// Assign ids from names and rebuild index.json (filesystem data source only)
    Reindex,
}
