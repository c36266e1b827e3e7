//! CLI argument definitions for the flat-file generator.

use clap::Args;
use std::path::PathBuf;

pub use datom_populate::CommonPopulateArgs;

/// Row count used when `--row-count` is not given.
pub const DEFAULT_ROW_COUNT: u64 = 10_000_000;

/// Rows per entity used when `--rows-per-entity` is not given.
pub const DEFAULT_ROWS_PER_ENTITY: u64 = 1_000;

/// Flat-file generator arguments.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output file; overwritten if it exists
    #[arg(long, short = 'o', default_value = "data.csv")]
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}
