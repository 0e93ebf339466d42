use crate::cli::{StoreArgs, StoreCommands};
use crate::config::{CliOverrides, PartialConfig};
use crate::error::Result;
use ccdict::core::store::import::read_containers;
use ccdict::core::store::persistent::{DEFAULT_MIN_STORE_SIZE, PersistentStore};
use tracing::{info, warn};

pub fn run(args: StoreArgs, file_config: &PartialConfig) -> Result<()> {
    match args.command {
        StoreCommands::Import {
            files,
            store,
            update,
        } => {
            let config = file_config.merge_with_cli(CliOverrides {
                store,
                ..Default::default()
            })?;

            info!("Reading {} component definition file(s)...", files.len());
            let containers = read_containers(&files)?;
            let count = containers.len();

            if update {
                PersistentStore::update_container_list(&config.store_path, containers)?;
                println!(
                    "Updated {} component(s) in {}.",
                    count,
                    config.store_path.display()
                );
            } else if PersistentStore::create(&config.store_path, containers, DEFAULT_MIN_STORE_SIZE)? {
                println!(
                    "Created store {} with {} component(s).",
                    config.store_path.display(),
                    count
                );
            } else {
                warn!("New store was too small; the existing store was kept.");
                println!(
                    "Warning: store {} was not replaced.",
                    config.store_path.display()
                );
            }
            Ok(())
        }
    }
}
