use crate::cli::ShowArgs;
use crate::config::{CliOverrides, PartialConfig};
use crate::error::{CliError, Result};
use ccdict::engine::persist;
use ccdict::engine::summary::ComponentSummary;
use ccdict::workflows;

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {:<16} {}", label, value);
    }
}

fn print_summary(summary: &ComponentSummary) {
    println!("{}", summary.cc_id);
    print_field("name", summary.name.as_deref());
    print_field("type", summary.comp_type.as_deref());
    print_field("formula", summary.formula.as_deref());
    print_field("formula weight", summary.formula_weight.as_deref());
    print_field("release status", summary.release_status.as_deref());
    print_field("subcomponents", summary.subcomponent_list.as_deref());
    print_field("SMILES", summary.smiles.as_deref());
    print_field("SMILES (stereo)", summary.smiles_stereo.as_deref());
    print_field("InChI", summary.inchi.as_deref());
    print_field("InChIKey", summary.inchi_key.as_deref());

    if !summary.type_counts.is_empty() {
        let counts: Vec<String> = summary
            .type_counts
            .iter()
            .map(|(symbol, count)| format!("{}{}", symbol, count))
            .collect();
        println!("  {:<16} {}", "atom types", counts.join(" "));
    }
    for name in &summary.name_list {
        println!("  {:<16} {}", "known as", name);
    }
}

pub fn run(args: ShowArgs, file_config: &PartialConfig) -> Result<()> {
    let config = file_config.merge_with_cli(CliOverrides {
        index: args.index,
        parent_index: args.parent_index,
        ..Default::default()
    })?;

    let index = persist::read_index(&config.index_path)?;
    let cc_id = args.cc_id.trim().to_ascii_uppercase();
    let summary = index
        .get(&cc_id)
        .ok_or_else(|| CliError::UnknownComponent(cc_id.clone()))?;
    print_summary(summary);

    let parents = workflows::index::open_parent_index(&config);
    let parent_ids = parents.parents_of(&cc_id);
    if !parent_ids.is_empty() {
        println!("  {:<16} {}", "parents", parent_ids.join(" "));
    }
    let child_ids = parents.children_of(&cc_id);
    if !child_ids.is_empty() {
        println!("  {:<16} {}", "children", child_ids.join(" "));
    }
    Ok(())
}
