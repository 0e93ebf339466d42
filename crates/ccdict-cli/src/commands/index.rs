use crate::cli::{IndexArgs, IndexCommands};
use crate::config::{CliOverrides, PartialConfig};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use ccdict::engine::progress::ProgressReporter;
use ccdict::workflows;
use tracing::info;

pub fn run(args: IndexArgs, file_config: &PartialConfig) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    match args.command {
        IndexCommands::Build { store, index } => {
            let config = file_config.merge_with_cli(CliOverrides {
                store,
                index,
                ..Default::default()
            })?;

            println!("Building component index...");
            info!("Invoking the component index workflow...");
            let index = workflows::index::run_build(&config, &reporter)?;

            if index.is_empty() {
                println!("Warning: the store holds no components; the index is empty.");
            }
            println!(
                "Indexed {} component(s) into {}.",
                index.len(),
                config.index_path.display()
            );
        }
        IndexCommands::Parents {
            store,
            parent_index,
        } => {
            let config = file_config.merge_with_cli(CliOverrides {
                store,
                parent_index,
                ..Default::default()
            })?;

            println!("Building parent/child index...");
            info!("Invoking the parent index workflow...");
            let parents = workflows::index::run_parent_build(&config, &reporter)?;

            println!(
                "Recorded {} parent(s) and {} child(ren) in {}.",
                parents.parent_map.len(),
                parents.child_map.len(),
                config.parent_index_path.display()
            );
        }
    }

    match progress_handler.notes() {
        0 => {}
        1 => println!("1 note was reported during the build; see above."),
        n => println!("{} notes were reported during the build; see above.", n),
    }
    Ok(())
}
