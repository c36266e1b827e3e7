//! PostgreSQL side of the datom indexing benchmark.
//!
//! - [`PostgreSQLPopulator::setup`] creates the `datoms` table if needed
//! - [`PostgreSQLPopulator::seed`] inserts generated rows in sequential batches
//! - [`PostgreSQLPopulator::build_indexes`] drops and recreates the four
//!   covering indexes
//! - [`PostgreSQLPopulator::query_latest`] times the latest-value-per-attribute
//!   query for one entity
//! - [`PostgreSQLPopulator::verify_latest`] cross-checks that query against a
//!   plain scan of the entity's rows
//!
//! All statements go over one connection and run strictly in order.

pub mod args;
mod error;
pub mod index;
pub mod insert;
mod populator;
pub mod query;

pub use args::{
    CommonPopulateArgs, OutputFormat, PostgreSQLRunArgs, DEFAULT_BATCH_SIZE, DEFAULT_ENTITY,
    DEFAULT_ROWS_PER_ENTITY, DEFAULT_ROW_COUNT,
};
pub use error::PostgreSQLPopulatorError;
pub use index::{DatomIndex, IndexMetrics};
pub use populator::{PostgreSQLPopulator, SeedMetrics};
pub use query::{LatencySummary, QueryOutcome, VerificationReport};
