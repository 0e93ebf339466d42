use crate::error::{CliError, Result};
use ccdict::engine::config::{IndexConfig, IndexConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialPathsConfig {
    store: Option<PathBuf>,
    index: Option<PathBuf>,
    #[serde(rename = "parent-index")]
    parent_index: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialSearchConfig {
    #[serde(rename = "lower-tolerance")]
    lower_tolerance: Option<u32>,
    #[serde(rename = "upper-tolerance")]
    upper_tolerance: Option<u32>,
}

/// Values read from the optional configuration file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    paths: Option<PartialPathsConfig>,
    search: Option<PartialSearchConfig>,
}

/// Per-command values given on the command line; these win over the file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub store: Option<PathBuf>,
    pub index: Option<PathBuf>,
    pub parent_index: Option<PathBuf>,
    pub lower_tolerance: Option<u32>,
    pub upper_tolerance: Option<u32>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` when given, otherwise starts from built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(&self, overrides: CliOverrides) -> Result<IndexConfig> {
        let paths = self.paths.clone().unwrap_or_default();
        let search = self.search.clone().unwrap_or_default();

        let mut builder = IndexConfigBuilder::new();
        if let Some(store) = overrides.store.or(paths.store) {
            builder = builder.store_path(store);
        }
        if let Some(index) = overrides.index.or(paths.index) {
            builder = builder.index_path(index);
        }
        if let Some(parent_index) = overrides.parent_index.or(paths.parent_index) {
            builder = builder.parent_index_path(parent_index);
        }
        if let Some(lower) = overrides.lower_tolerance.or(search.lower_tolerance) {
            builder = builder.lower_tolerance(lower);
        }
        if let Some(upper) = overrides.upper_tolerance.or(search.upper_tolerance) {
            builder = builder.upper_tolerance(upper);
        }

        let config = builder.build();
        for (name, path) in [
            ("store", &config.store_path),
            ("index", &config.index_path),
            ("parent-index", &config.parent_index_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(CliError::Config(format!("'{}' path cannot be empty.", name)));
            }
        }
        debug!("Resolved configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccdict::engine::search::SearchTolerance;
    use std::fs;
    use tempfile::tempdir;

    fn write_config_file(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("ccdict.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_config_file_option_yields_defaults() {
        let config = PartialConfig::load(None)
            .unwrap()
            .merge_with_cli(CliOverrides::default())
            .unwrap();
        assert_eq!(config, IndexConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            dir.path(),
            r#"
            [paths]
            store = "/data/chemcomp.db"
            parent-index = "/data/parents.pic"

            [search]
            lower-tolerance = 1
            "#,
        );

        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(CliOverrides::default())
            .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/data/chemcomp.db"));
        assert_eq!(config.index_path, PathBuf::from("chemcomp-index.pic"));
        assert_eq!(config.parent_index_path, PathBuf::from("/data/parents.pic"));
        assert_eq!(config.tolerance, SearchTolerance::new(1, 2));
    }

    #[test]
    fn cli_values_override_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            dir.path(),
            r#"
            [paths]
            index = "/data/index.pic"

            [search]
            upper-tolerance = 4
            "#,
        );

        let overrides = CliOverrides {
            index: Some(PathBuf::from("local-index.pic")),
            upper_tolerance: Some(0),
            ..Default::default()
        };
        let config = PartialConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(overrides)
            .unwrap();
        assert_eq!(config.index_path, PathBuf::from("local-index.pic"));
        assert_eq!(config.tolerance, SearchTolerance::new(2, 0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(dir.path(), "[paths]\ndatabase = \"x.db\"\n");
        assert!(matches!(
            PartialConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn empty_path_is_a_config_error() {
        let overrides = CliOverrides {
            store: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(matches!(
            PartialConfig::default().merge_with_cli(overrides),
            Err(CliError::Config(_))
        ));
    }
}
