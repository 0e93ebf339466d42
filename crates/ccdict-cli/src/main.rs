mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::PartialConfig;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("ccdict CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let file_config = PartialConfig::load(cli.config.as_deref())?;

    let command_result = match cli.command {
        Commands::Store(args) => {
            info!("Dispatching to 'store' command.");
            commands::store::run(args, &file_config)
        }
        Commands::Index(args) => {
            info!("Dispatching to 'index' command.");
            commands::index::run(args, &file_config)
        }
        Commands::Search(args) => {
            info!("Dispatching to 'search' command.");
            commands::search::run(args, &file_config)
        }
        Commands::Show(args) => {
            info!("Dispatching to 'show' command.");
            commands::show::run(args, &file_config)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
