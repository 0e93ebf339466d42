use crate::core::store::persistent::PersistentStore;
use crate::engine::builder;
use crate::engine::config::IndexConfig;
use crate::engine::error::IndexError;
use crate::engine::parents::{self, ParentIndex};
use crate::engine::persist;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::summary::ComponentIndex;
use std::path::Path;
use tracing::{error, info, instrument};

fn scan_components(
    config: &IndexConfig,
    reporter: &ProgressReporter,
) -> Result<ComponentIndex, IndexError> {
    reporter.report(Progress::PhaseStart {
        name: "Component Scan",
    });
    let store = PersistentStore::open(&config.store_path)?;
    let index = builder::build(&store, reporter)?;
    store.close();
    reporter.report(Progress::PhaseFinish);
    Ok(index)
}

fn scan_parents(
    config: &IndexConfig,
    reporter: &ProgressReporter,
) -> Result<ParentIndex, IndexError> {
    reporter.report(Progress::PhaseStart {
        name: "Parent Scan",
    });
    let store = PersistentStore::open(&config.store_path)?;
    let index = parents::build_parents(&store, reporter)?;
    store.close();
    reporter.report(Progress::PhaseFinish);
    Ok(index)
}

/// Builds the component index from the configured store and saves it.
#[instrument(skip_all, name = "index_workflow")]
pub fn run_build(
    config: &IndexConfig,
    reporter: &ProgressReporter,
) -> Result<ComponentIndex, IndexError> {
    info!("Building component index from store {:?}.", config.store_path);
    let index = scan_components(config, reporter)?;

    reporter.report(Progress::PhaseStart { name: "Save" });
    persist::write_index(&index, &config.index_path)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Component index with {} entries written to {:?}.",
        index.len(),
        config.index_path
    );
    Ok(index)
}

#[instrument(skip_all, name = "parent_index_workflow")]
pub fn run_parent_build(
    config: &IndexConfig,
    reporter: &ProgressReporter,
) -> Result<ParentIndex, IndexError> {
    info!("Building parent index from store {:?}.", config.store_path);
    let index = scan_parents(config, reporter)?;

    reporter.report(Progress::PhaseStart { name: "Save" });
    persist::write_parent_index(&index, &config.parent_index_path)?;
    reporter.report(Progress::PhaseFinish);

    info!("Parent index written to {:?}.", config.parent_index_path);
    Ok(index)
}

fn report_unsaved(reporter: &ProgressReporter, what: &str, path: &Path) {
    reporter.report(Progress::Message(format!(
        "{} index was built but could not be saved to {}",
        what,
        path.display()
    )));
}

/// Builds and saves the component index without surfacing errors.
///
/// A failed build returns an empty index and leaves any existing index file
/// untouched. A failed save is logged, reported as a [`Progress::Message`],
/// and the built index is still returned.
pub fn make_index(config: &IndexConfig, reporter: &ProgressReporter) -> ComponentIndex {
    match scan_components(config, reporter) {
        Ok(index) => {
            reporter.report(Progress::PhaseStart { name: "Save" });
            if !persist::save_index(&index, &config.index_path) {
                report_unsaved(reporter, "Component", &config.index_path);
            }
            reporter.report(Progress::PhaseFinish);
            index
        }
        Err(e) => {
            error!("Component index creation failed: {}", e);
            ComponentIndex::new()
        }
    }
}

pub fn make_parent_index(config: &IndexConfig, reporter: &ProgressReporter) -> ParentIndex {
    match scan_parents(config, reporter) {
        Ok(index) => {
            reporter.report(Progress::PhaseStart { name: "Save" });
            if !persist::save_parent_index(&index, &config.parent_index_path) {
                report_unsaved(reporter, "Parent", &config.parent_index_path);
            }
            reporter.report(Progress::PhaseFinish);
            index
        }
        Err(e) => {
            error!("Parent index creation failed: {}", e);
            ParentIndex::new()
        }
    }
}

/// Reads the saved component index; empty if it is missing or unreadable.
pub fn open_index(config: &IndexConfig) -> ComponentIndex {
    persist::load_index(&config.index_path)
}

pub fn open_parent_index(config: &IndexConfig) -> ParentIndex {
    persist::load_parent_index(&config.parent_index_path)
}
