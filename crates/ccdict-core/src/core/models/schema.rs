use super::category::Category;
use std::collections::HashMap;

/// Attribute-name to column-position lookup, built once per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSchema {
    positions: HashMap<String, usize>,
}

impl AttributeSchema {
    pub fn new<S: AsRef<str>>(attributes: &[S]) -> Self {
        let mut positions = HashMap::with_capacity(attributes.len());
        for (index, name) in attributes.iter().enumerate() {
            // The first occurrence wins if a name is repeated.
            positions.entry(name.as_ref().to_string()).or_insert(index);
        }
        Self { positions }
    }

    pub fn for_category(category: &Category) -> Self {
        Self::new(category.attribute_list())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One row of positional values viewed through its category schema.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    schema: &'a AttributeSchema,
    values: &'a [String],
}

impl<'a> Row<'a> {
    pub fn new(schema: &'a AttributeSchema, values: &'a [String]) -> Self {
        Self { schema, values }
    }

    /// Returns the value of `name`, or `None` when the attribute is not part of
    /// the schema or the row is too short to hold it.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let position = self.schema.position(name)?;
        self.values.get(position).map(String::as_str)
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn schema_maps_names_to_positions() {
        let schema = AttributeSchema::new(&["id", "name", "type"]);
        assert_eq!(schema.position("id"), Some(0));
        assert_eq!(schema.position("type"), Some(2));
        assert_eq!(schema.position("formula"), None);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn schema_keeps_first_position_of_duplicate_names() {
        let schema = AttributeSchema::new(&["id", "name", "id"]);
        assert_eq!(schema.position("id"), Some(0));
    }

    #[test]
    fn row_get_returns_value_for_known_attribute() {
        let schema = AttributeSchema::new(&["id", "name"]);
        let data = values(&["ATP", "ADENOSINE-5'-TRIPHOSPHATE"]);
        let row = Row::new(&schema, &data);
        assert_eq!(row.get("name"), Some("ADENOSINE-5'-TRIPHOSPHATE"));
    }

    #[test]
    fn row_get_is_none_for_missing_attribute_or_short_row() {
        let schema = AttributeSchema::new(&["id", "name", "formula"]);
        let data = values(&["ATP"]);
        let row = Row::new(&schema, &data);
        assert_eq!(row.get("synonyms"), None);
        assert_eq!(row.get("formula"), None);
    }
}
