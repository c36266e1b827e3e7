//! Error types for the PostgreSQL populator.

use thiserror::Error;

/// Errors that can occur while seeding, indexing or querying PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLPopulatorError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Invalid entity density.
    #[error("Density error: {0}")]
    Density(#[from] datom_core::DensityError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Benchmark query disagreed with the reference scan.
    #[error(
        "Verification failed for entity {entity}: {missing} missing, {mismatched} mismatched, {unexpected} unexpected"
    )]
    Verification {
        entity: i64,
        missing: usize,
        mismatched: usize,
        unexpected: usize,
    },
}
