use crate::core::formula::ElementCounts;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Compact per-component record held in the search index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub cc_id: String,

    pub name: Option<String>,
    pub comp_type: Option<String>,
    pub formula: Option<String>,
    pub formula_weight: Option<String>,
    pub release_status: Option<String>,
    pub subcomponent_list: Option<String>,
    pub ambiguous_flag: Option<String>,
    pub synonyms: Option<String>,

    /// Primary name, then synonyms, then systematic identifiers.
    pub name_list: Vec<String>,
    /// Atom count per uppercased type symbol.
    pub type_counts: ElementCounts,

    pub inchi: Option<String>,
    pub inchi_key: Option<String>,
    /// First 14 characters (the connectivity block) of `inchi_key`.
    pub inchi_key14: Option<String>,
    pub smiles: Option<String>,
    pub smiles_stereo: Option<String>,
    pub smiles_list: Vec<String>,
}

impl ComponentSummary {
    pub fn new(cc_id: &str) -> Self {
        Self {
            cc_id: cc_id.to_string(),
            ..Default::default()
        }
    }

    pub fn atom_count(&self) -> u32 {
        self.type_counts.values().sum()
    }

    /// Sets the InChIKey together with its 14-character connectivity block.
    pub fn set_inchi_key(&mut self, key: &str) {
        self.inchi_key = Some(key.to_string());
        self.inchi_key14 = Some(key.chars().take(14).collect());
    }
}

/// Component summaries keyed by component id, in build order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentIndex {
    summaries: Vec<ComponentSummary>,
    id_map: HashMap<String, usize>,
}

impl ComponentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_summaries(summaries: Vec<ComponentSummary>) -> Self {
        summaries.into_iter().collect()
    }

    /// Adds a summary. A summary with an id already present replaces the old
    /// one in its original position.
    pub fn insert(&mut self, summary: ComponentSummary) {
        match self.id_map.get(&summary.cc_id) {
            Some(&index) => self.summaries[index] = summary,
            None => {
                self.id_map
                    .insert(summary.cc_id.clone(), self.summaries.len());
                self.summaries.push(summary);
            }
        }
    }

    pub fn get(&self, cc_id: &str) -> Option<&ComponentSummary> {
        self.id_map.get(cc_id).map(|&index| &self.summaries[index])
    }

    pub fn contains(&self, cc_id: &str) -> bool {
        self.id_map.contains_key(cc_id)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentSummary> {
        self.summaries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.summaries.iter().map(|s| s.cc_id.as_str())
    }

    pub fn summaries(&self) -> &[ComponentSummary] {
        &self.summaries
    }

    pub fn into_summaries(self) -> Vec<ComponentSummary> {
        self.summaries
    }

    /// Finds components by InChIKey.
    ///
    /// A 14-character key is treated as a connectivity block and compared with
    /// `inchi_key14`; anything else must equal the full `inchi_key`.
    pub fn find_by_inchikey(&self, key: &str) -> Vec<&ComponentSummary> {
        let key = key.trim();
        if key.chars().count() == 14 {
            self.iter()
                .filter(|s| s.inchi_key14.as_deref() == Some(key))
                .collect()
        } else {
            self.iter()
                .filter(|s| s.inchi_key.as_deref() == Some(key))
                .collect()
        }
    }
}

impl FromIterator<ComponentSummary> for ComponentIndex {
    fn from_iter<I: IntoIterator<Item = ComponentSummary>>(iter: I) -> Self {
        let mut index = Self::new();
        for summary in iter {
            index.insert(summary);
        }
        index
    }
}

impl<'a> IntoIterator for &'a ComponentIndex {
    type Item = &'a ComponentSummary;
    type IntoIter = std::slice::Iter<'a, ComponentSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.iter()
    }
}
