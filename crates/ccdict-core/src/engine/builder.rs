use super::error::IndexError;
use super::progress::{Progress, ProgressReporter};
use super::summary::{ComponentIndex, ComponentSummary};
use crate::core::models::category::{
    CHEM_COMP, CHEM_COMP_ATOM, CHEM_COMP_DESCRIPTOR, CHEM_COMP_IDENTIFIER, Category,
};
use crate::core::models::iter::CategoryIter;
use crate::core::models::rows::{AtomRow, ChemCompRow, DescriptorRow, IdentifierRow};
use crate::core::store::error::StoreError;
use crate::core::store::traits::ObjectStore;
use tracing::{debug, error, info, instrument};

const OPENEYE_PROGRAM: &str = "OpenEye";
const INCHI_PROGRAM: &str = "InChI";
const SYSTEMATIC_IDENTIFIER: &str = "SYSTEMATIC";

/// Scans every container of `store` and builds the component search index.
///
/// The scan is a single sequential pass in the store's own container order.
/// Any store failure aborts the whole build; no partial index is returned.
#[instrument(skip_all, name = "index_build")]
pub fn build(
    store: &(impl ObjectStore + ?Sized),
    reporter: &ProgressReporter,
) -> Result<ComponentIndex, IndexError> {
    let container_ids = store.container_index()?;
    info!(
        "Building component index over {} container(s).",
        container_ids.len()
    );

    reporter.report(Progress::ScanStart {
        total_components: container_ids.len() as u64,
    });
    let mut index = ComponentIndex::new();
    for cc_id in &container_ids {
        let summary =
            summarize_component(store, cc_id).map_err(|source| IndexError::Component {
                cc_id: cc_id.clone(),
                source,
            })?;
        index.insert(summary);
        reporter.report(Progress::ComponentScanned);
    }
    reporter.report(Progress::ScanFinish);

    info!("Component index built with {} entries.", index.len());
    Ok(index)
}

/// Like [`build`], but logs a failure and returns an empty index instead.
pub fn build_index(store: &(impl ObjectStore + ?Sized)) -> ComponentIndex {
    build(store, &ProgressReporter::new()).unwrap_or_else(|e| {
        error!("Component index creation failed: {}", e);
        ComponentIndex::new()
    })
}

/// Derives the summary of one component from its stored categories.
pub fn summarize_component(
    store: &(impl ObjectStore + ?Sized),
    cc_id: &str,
) -> Result<ComponentSummary, StoreError> {
    let mut summary = ComponentSummary::new(cc_id);

    if let Some(category) = store.fetch_object(cc_id, CHEM_COMP)? {
        apply_chem_comp(&mut summary, &category);
    }
    if let Some(category) = store.fetch_object(cc_id, CHEM_COMP_ATOM)? {
        count_atom_types(&mut summary, &category);
    }
    if let Some(category) = store.fetch_object(cc_id, CHEM_COMP_DESCRIPTOR)? {
        apply_descriptors(&mut summary, &category);
    }
    if let Some(category) = store.fetch_object(cc_id, CHEM_COMP_IDENTIFIER)? {
        apply_identifiers(&mut summary, &category);
    }

    debug!(
        "Indexed '{}': {} atom(s), {} name(s), {} SMILES.",
        cc_id,
        summary.atom_count(),
        summary.name_list.len(),
        summary.smiles_list.len()
    );
    Ok(summary)
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

/// Copies scalar metadata and seeds the name list with the primary name and
/// synonyms. With several rows the last one wins.
fn apply_chem_comp(summary: &mut ComponentSummary, category: &Category) {
    let rows = CategoryIter::<ChemCompRow>::new(category);
    let mut name = None;
    let mut synonyms = None;

    for row in rows.forward() {
        name = row.name();
        synonyms = row.synonyms();
        summary.name = owned(name);
        summary.synonyms = owned(synonyms);
        summary.comp_type = owned(row.comp_type());
        summary.formula = owned(row.formula());
        summary.formula_weight = owned(row.formula_weight());
        summary.release_status = owned(row.release_status());
        summary.subcomponent_list = owned(row.subcomponent_list());
        summary.ambiguous_flag = owned(row.ambiguous_flag());
    }

    if let Some(name) = name {
        summary.name_list.push(name.to_string());
    }
    match synonyms {
        Some(s) if s.contains(';') => {
            summary
                .name_list
                .extend(s.split(';').map(str::to_string));
        }
        Some(s) => summary.name_list.push(s.to_string()),
        None => {}
    }
}

/// Adds one count per atom row under the uppercased type symbol.
///
/// Rows without a type symbol are counted under an empty key so the counts
/// always sum to the number of atom rows.
fn count_atom_types(summary: &mut ComponentSummary, category: &Category) {
    let rows = CategoryIter::<AtomRow>::new(category);
    for atom in rows.forward() {
        let symbol = atom.type_symbol().unwrap_or_default().to_ascii_uppercase();
        *summary.type_counts.entry(symbol).or_insert(0) += 1;
    }
}

fn apply_descriptors(summary: &mut ComponentSummary, category: &Category) {
    let rows = CategoryIter::<DescriptorRow>::new(category);
    for row in rows.forward() {
        let Some(descriptor) = row.descriptor() else {
            continue;
        };
        let descriptor_type = row.descriptor_type().unwrap_or_default();
        let program = row.program().unwrap_or_default();

        if descriptor_type.starts_with("SMILES") {
            summary.smiles_list.push(descriptor.to_string());
        }

        if program.contains(OPENEYE_PROGRAM) {
            // The dictionary spells the canonical type "SMILES_CANNONICAL".
            if descriptor_type == "SMILES_CANNONICAL" {
                summary.smiles_stereo = Some(descriptor.to_string());
            } else if descriptor_type == "SMILES" {
                summary.smiles = Some(descriptor.to_string());
            }
        } else if program.contains(INCHI_PROGRAM) {
            if descriptor_type == "InChI" {
                summary.inchi = Some(descriptor.to_string());
            } else if descriptor_type == "InChIKey" {
                summary.set_inchi_key(descriptor);
            }
        }
    }
}

fn apply_identifiers(summary: &mut ComponentSummary, category: &Category) {
    let rows = CategoryIter::<IdentifierRow>::new(category);
    for row in rows.forward() {
        let is_systematic = row
            .identifier_type()
            .is_some_and(|t| t.contains(SYSTEMATIC_IDENTIFIER));
        if let (true, Some(identifier)) = (is_systematic, row.identifier()) {
            summary.name_list.push(identifier.to_string());
        }
    }
}
