use crate::cli::SearchArgs;
use crate::config::{CliOverrides, PartialConfig};
use crate::error::{CliError, Result};
use crate::utils::parser::parse_targets;
use ccdict::engine::persist;
use ccdict::engine::search::FormulaSearch;
use tracing::info;

pub fn run(args: SearchArgs, file_config: &PartialConfig) -> Result<()> {
    let config = file_config.merge_with_cli(CliOverrides {
        index: args.index,
        lower_tolerance: args.lower,
        upper_tolerance: args.upper,
        ..Default::default()
    })?;

    let targets =
        parse_targets(&args.targets).map_err(|e| CliError::Argument(e.to_string()))?;

    info!("Loading component index from {:?}", config.index_path);
    let index = persist::read_index(&config.index_path)?;

    let search = FormulaSearch::new(config.tolerance);
    let results = search.search(&index, &targets);
    info!(
        "Searched {} component(s) with tolerance -{}/+{}.",
        index.len(),
        config.tolerance.lower,
        config.tolerance.upper
    );

    for target in &targets {
        let hits = results.get(&target.id).map(Vec::as_slice).unwrap_or(&[]);
        println!("{}: {} match(es)", target.id, hits.len());
        if !hits.is_empty() {
            println!("  {}", hits.join(" "));
        }
    }
    Ok(())
}
