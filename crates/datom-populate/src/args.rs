//! Common CLI argument definitions shared by all populators.

use clap::Args;
use datom_core::{DensityError, EntityDensity};

/// Common arguments shared by all populators.
///
/// Row count and density defaults differ between commands, so they are
/// optional here and resolved through [`CommonPopulateArgs::density`].
#[derive(Args, Clone, Debug, Default)]
pub struct CommonPopulateArgs {
    /// Number of datoms to generate
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Datoms per entity; larger values model fewer entities with more edit history
    #[arg(long)]
    pub rows_per_entity: Option<u64>,

    /// Random seed for reproducible generation (omit for a fresh random run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dry-run mode: validate configuration and log the plan without doing any work
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonPopulateArgs {
    /// Resolve the entity density, falling back to the command's defaults.
    pub fn density(
        &self,
        default_row_count: u64,
        default_rows_per_entity: u64,
    ) -> Result<EntityDensity, DensityError> {
        EntityDensity::new(
            self.row_count.unwrap_or(default_row_count),
            self.rows_per_entity.unwrap_or(default_rows_per_entity),
        )
    }
}
