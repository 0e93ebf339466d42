use serde::{Deserialize, Serialize};

pub const CHEM_COMP: &str = "chem_comp";
pub const CHEM_COMP_ATOM: &str = "chem_comp_atom";
pub const CHEM_COMP_BOND: &str = "chem_comp_bond";
pub const CHEM_COMP_DESCRIPTOR: &str = "pdbx_chem_comp_descriptor";
pub const CHEM_COMP_IDENTIFIER: &str = "pdbx_chem_comp_identifier";
pub const CHEM_COMP_AUDIT: &str = "pdbx_chem_comp_audit";

/// True for empty values and the `?` (unknown) and `.` (inapplicable) markers.
///
/// The comparison is exact; a padded marker such as `" ? "` is a value.
pub fn is_null_value(value: &str) -> bool {
    matches!(value, "" | "?" | ".")
}

/// A named, row-oriented data table from one component definition.
///
/// Values are kept exactly as they appear in the dictionary, including the
/// `?` and `.` placeholders; interpretation is left to the row accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub attributes: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Category {
    pub fn new(name: &str, attributes: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, values: &[&str]) -> Self {
        self.push_row(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn push_row(&mut self, values: Vec<String>) {
        self.rows.push(values);
    }

    pub fn attribute_list(&self) -> &[String] {
        &self.attributes
    }

    pub fn row_list(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Looks up a single value by attribute name and row index.
    pub fn value(&self, attribute: &str, row: usize) -> Option<&str> {
        let column = self.attributes.iter().position(|a| a == attribute)?;
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map(String::as_str)
    }
}

/// All categories belonging to one component, keyed by the component id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub categories: Vec<Category>,
}

impl Container {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            categories: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.set_category(category);
        self
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Replaces the same-named category, or appends it if absent.
    pub fn set_category(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_category() -> Category {
        Category::new(CHEM_COMP_ATOM, &["comp_id", "atom_id", "type_symbol"])
            .with_row(&["ETH", "C1", "C"])
            .with_row(&["ETH", "O1", "O"])
    }

    #[test]
    fn value_returns_cell_by_attribute_and_row() {
        let category = atom_category();
        assert_eq!(category.value("atom_id", 1), Some("O1"));
        assert_eq!(category.value("type_symbol", 0), Some("C"));
    }

    #[test]
    fn value_is_none_for_unknown_attribute_or_row() {
        let category = atom_category();
        assert_eq!(category.value("charge", 0), None);
        assert_eq!(category.value("atom_id", 5), None);
    }

    #[test]
    fn null_markers_are_recognized() {
        assert!(is_null_value("?"));
        assert!(is_null_value("."));
        assert!(!is_null_value(" . "));
        assert!(!is_null_value(" ? "));
        assert!(is_null_value(""));
        assert!(!is_null_value("ALA"));
    }

    #[test]
    fn set_category_replaces_existing_and_appends_new() {
        let mut container = Container::new("ETH").with_category(atom_category());
        container.set_category(Category::new(CHEM_COMP_ATOM, &["atom_id"]));
        container.set_category(Category::new(CHEM_COMP, &["id"]));

        assert_eq!(container.categories.len(), 2);
        assert_eq!(container.category(CHEM_COMP_ATOM).unwrap().row_count(), 0);
        assert_eq!(
            container.category_names().collect::<Vec<_>>(),
            vec![CHEM_COMP_ATOM, CHEM_COMP]
        );
    }
}
