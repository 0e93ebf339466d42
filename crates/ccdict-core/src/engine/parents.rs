use super::error::IndexError;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::category::{CHEM_COMP, is_null_value};
use crate::core::models::iter::CategoryIter;
use crate::core::models::rows::ChemCompRow;
use crate::core::store::traits::ObjectStore;
use std::collections::BTreeMap;
use tracing::{error, info, instrument, warn};

/// Longest parent id accepted as a component identifier.
const MAX_PARENT_ID_LEN: usize = 3;

pub type RelationMap = BTreeMap<String, Vec<String>>;

/// Modified-residue relationships between components.
///
/// `parent_map` lists the children of each parent; `child_map` lists the
/// parents of each child. Only single-parent records populate both sides.
/// A record naming several comma-separated parents only fills `child_map`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentIndex {
    pub parent_map: RelationMap,
    pub child_map: RelationMap,
}

impl ParentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_maps(parent_map: RelationMap, child_map: RelationMap) -> Self {
        Self {
            parent_map,
            child_map,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parent_map.is_empty() && self.child_map.is_empty()
    }

    pub fn parents_of(&self, cc_id: &str) -> &[String] {
        self.child_map.get(cc_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn children_of(&self, cc_id: &str) -> &[String] {
        self.parent_map.get(cc_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records the relationship(s) declared by one component's parent-id field.
    ///
    /// Comma lists are split verbatim, keeping whitespace and empty segments.
    /// Returns `false` when a single parent id is too long to be a component
    /// identifier and was skipped.
    fn record(&mut self, cc_id: &str, parent_field: &str) -> bool {
        if is_null_value(parent_field) {
            return true;
        }

        if parent_field.contains(',') {
            let parents = parent_field.split(',').map(str::to_string).collect();
            self.child_map.insert(cc_id.to_string(), parents);
            return true;
        }

        if parent_field.chars().count() > MAX_PARENT_ID_LEN {
            return false;
        }

        self.parent_map
            .entry(parent_field.to_string())
            .or_default()
            .push(cc_id.to_string());
        self.child_map
            .insert(cc_id.to_string(), vec![parent_field.to_string()]);
        true
    }
}

#[instrument(skip_all, name = "parent_index_build")]
pub fn build_parents(
    store: &(impl ObjectStore + ?Sized),
    reporter: &ProgressReporter,
) -> Result<ParentIndex, IndexError> {
    let container_ids = store.container_index()?;
    info!(
        "Building parent index over {} container(s).",
        container_ids.len()
    );

    reporter.report(Progress::ScanStart {
        total_components: container_ids.len() as u64,
    });
    let mut index = ParentIndex::new();
    for container_id in &container_ids {
        let category = store
            .fetch_object(container_id, CHEM_COMP)
            .map_err(|source| IndexError::Component {
                cc_id: container_id.clone(),
                source,
            })?;
        if let Some(category) = category {
            let rows = CategoryIter::<ChemCompRow>::new(&category);
            for row in rows.forward() {
                let cc_id = row.id().unwrap_or(container_id.as_str());
                let Some(parent_field) = row.nstd_parent_id() else {
                    continue;
                };
                if !index.record(cc_id, parent_field) {
                    warn!(
                        "Skipping malformed parent id '{}' for component '{}'.",
                        parent_field, cc_id
                    );
                    reporter.report(Progress::Message(format!(
                        "Skipped parent id '{}' of {}: longer than {} characters",
                        parent_field, cc_id, MAX_PARENT_ID_LEN
                    )));
                }
            }
        }
        reporter.report(Progress::ComponentScanned);
    }
    reporter.report(Progress::ScanFinish);

    info!(
        "Parent index built: {} parent(s), {} child(ren).",
        index.parent_map.len(),
        index.child_map.len()
    );
    Ok(index)
}

/// Like [`build_parents`], but logs a failure and returns empty maps instead.
pub fn build_parent_index(store: &(impl ObjectStore + ?Sized)) -> ParentIndex {
    build_parents(store, &ProgressReporter::new()).unwrap_or_else(|e| {
        error!("Parent index creation failed: {}", e);
        ParentIndex::new()
    })
}
