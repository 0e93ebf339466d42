use super::error::StoreError;
use crate::core::models::category::{Category, Container};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContainerFile {
    name: String,
    #[serde(default, rename = "category")]
    categories: Vec<CategoryFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryFile {
    name: String,
    attributes: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

/// Parses one component definition written as TOML.
///
/// ```toml
/// name = "ETH"
///
/// [[category]]
/// name = "chem_comp"
/// attributes = ["id", "name", "formula"]
/// rows = [["ETH", "ETHANOL", "C2 H6 O"]]
/// ```
///
/// Rows must have exactly one value per attribute.
pub fn parse_container(content: &str, origin: &str) -> Result<Container, StoreError> {
    let raw: ContainerFile = toml::from_str(content).map_err(|source| StoreError::Toml {
        path: origin.to_string(),
        source,
    })?;

    let mut container = Container::new(&raw.name);
    for category in raw.categories {
        let width = category.attributes.len();
        if let Some(bad) = category.rows.iter().position(|r| r.len() != width) {
            return Err(StoreError::InvalidContainer {
                path: origin.to_string(),
                message: format!(
                    "row {} of category '{}' has {} value(s) but {} attribute(s) are declared",
                    bad,
                    category.name,
                    category.rows[bad].len(),
                    width
                ),
            });
        }
        container.set_category(Category {
            name: category.name,
            attributes: category.attributes,
            rows: category.rows,
        });
    }
    Ok(container)
}

pub fn read_container(path: &Path) -> Result<Container, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    parse_container(&content, &path.to_string_lossy())
}

pub fn read_containers<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Container>, StoreError> {
    paths.iter().map(|p| read_container(p.as_ref())).collect()
}
