use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ccdict - build, persist and search a derived index over a chemical component dictionary store.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update the persistent component store.
    Store(StoreArgs),
    /// Build the component index or the parent/child index from the store.
    Index(IndexArgs),
    /// Find components whose element counts are close to a target formula.
    Search(SearchArgs),
    /// Print the indexed summary of one component.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommands,
}

#[derive(Subcommand, Debug)]
pub enum StoreCommands {
    /// Load component definitions written as TOML into the store.
    Import {
        /// Component definition files.
        #[arg(required = true, value_name = "TOML")]
        files: Vec<PathBuf>,

        /// Override the store file.
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,

        /// Merge into the existing store instead of replacing it.
        #[arg(long)]
        update: bool,
    },
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    #[command(subcommand)]
    pub command: IndexCommands,
}

#[derive(Subcommand, Debug)]
pub enum IndexCommands {
    /// Scan the store and write the component index.
    Build {
        /// Override the store file.
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,

        /// Override the component index file.
        #[arg(long, value_name = "PATH")]
        index: Option<PathBuf>,
    },
    /// Scan the store and write the parent/child index.
    Parents {
        /// Override the store file.
        #[arg(long, value_name = "PATH")]
        store: Option<PathBuf>,

        /// Override the parent index file.
        #[arg(long, value_name = "PATH")]
        parent_index: Option<PathBuf>,
    },
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// A named target formula, e.g. 'flavone=C15 H10 O2'. Can be repeated.
    #[arg(short, long = "target", required = true, value_name = "ID=FORMULA")]
    pub targets: Vec<String>,

    /// Override how far below the target count a match may be.
    #[arg(long, value_name = "INT")]
    pub lower: Option<u32>,

    /// Override how far above the target count a match may be.
    #[arg(long, value_name = "INT")]
    pub upper: Option<u32>,

    /// Override the component index file.
    #[arg(long, value_name = "PATH")]
    pub index: Option<PathBuf>,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Component identifier, e.g. 'ATP'.
    #[arg(required = true, value_name = "CCID")]
    pub cc_id: String,

    /// Override the component index file.
    #[arg(long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Override the parent index file.
    #[arg(long, value_name = "PATH")]
    pub parent_index: Option<PathBuf>,
}
