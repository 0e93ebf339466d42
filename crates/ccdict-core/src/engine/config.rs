use super::persist::{DEFAULT_INDEX_FILE, DEFAULT_PARENT_INDEX_FILE};
use super::search::SearchTolerance;
use crate::core::store::persistent::DEFAULT_STORE_FILE;
use std::path::PathBuf;

/// File locations and search settings used by the index workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub store_path: PathBuf,
    pub index_path: PathBuf,
    pub parent_index_path: PathBuf,
    pub tolerance: SearchTolerance,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            index_path: PathBuf::from(DEFAULT_INDEX_FILE),
            parent_index_path: PathBuf::from(DEFAULT_PARENT_INDEX_FILE),
            tolerance: SearchTolerance::default(),
        }
    }
}

/// Builds an [`IndexConfig`]; unset fields take the default file names and
/// tolerances.
#[derive(Debug, Default)]
pub struct IndexConfigBuilder {
    store_path: Option<PathBuf>,
    index_path: Option<PathBuf>,
    parent_index_path: Option<PathBuf>,
    lower_tolerance: Option<u32>,
    upper_tolerance: Option<u32>,
}

impl IndexConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_path(mut self, path: PathBuf) -> Self {
        self.store_path = Some(path);
        self
    }
    pub fn index_path(mut self, path: PathBuf) -> Self {
        self.index_path = Some(path);
        self
    }
    pub fn parent_index_path(mut self, path: PathBuf) -> Self {
        self.parent_index_path = Some(path);
        self
    }
    pub fn lower_tolerance(mut self, lower: u32) -> Self {
        self.lower_tolerance = Some(lower);
        self
    }
    pub fn upper_tolerance(mut self, upper: u32) -> Self {
        self.upper_tolerance = Some(upper);
        self
    }

    pub fn build(self) -> IndexConfig {
        let defaults = IndexConfig::default();
        let tolerance = SearchTolerance::new(
            self.lower_tolerance.unwrap_or(defaults.tolerance.lower),
            self.upper_tolerance.unwrap_or(defaults.tolerance.upper),
        );
        IndexConfig {
            store_path: self.store_path.unwrap_or(defaults.store_path),
            index_path: self.index_path.unwrap_or(defaults.index_path),
            parent_index_path: self.parent_index_path.unwrap_or(defaults.parent_index_path),
            tolerance,
        }
    }
}
