//! Generate command handler.

use anyhow::Context;
use datom_populate_csv::{
    CSVPopulateArgs, CSVPopulator, GenerateMetrics, DEFAULT_ROWS_PER_ENTITY, DEFAULT_ROW_COUNT,
};

/// Write a flat file of random datoms.
///
/// Returns `None` in dry-run mode.
pub fn run_generate(args: CSVPopulateArgs) -> anyhow::Result<Option<GenerateMetrics>> {
    let density = args
        .common
        .density(DEFAULT_ROW_COUNT, DEFAULT_ROWS_PER_ENTITY)
        .context("Invalid entity density")?;

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Would write {} datoms over {} entities to {:?} (seed={:?})",
            density.total_rows(),
            density.entity_count(),
            args.output,
            args.common.seed
        );
        return Ok(None);
    }

    tracing::info!("Generating csv.");
    let mut populator = CSVPopulator::new(density, args.common.seed);
    let metrics = populator
        .populate(&args.output)
        .with_context(|| format!("Failed to write datoms to {:?}", args.output))?;

    Ok(Some(metrics))
}
