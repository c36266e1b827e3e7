//! Flat-file datom generator.
//!
//! Writes generated datoms to a file, one `e,a,v` record per line without a
//! header. Values are quoted by the CSV writer when they need it.
//!
//! # Example
//!
//! ```ignore
//! use datom_core::EntityDensity;
//! use datom_populate_csv::CSVPopulator;
//!
//! let density = EntityDensity::new(10_000_000, 1_000)?;
//! let mut populator = CSVPopulator::new(density, None);
//! let metrics = populator.populate("data.csv")?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CSVPopulateArgs, CommonPopulateArgs, DEFAULT_ROWS_PER_ENTITY, DEFAULT_ROW_COUNT};
pub use error::CSVPopulatorError;
pub use populator::{CSVPopulator, GenerateMetrics, DEFAULT_BUFFER_SIZE};
