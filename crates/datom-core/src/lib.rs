//! Core types for the datom indexing benchmark.
//!
//! A datom is one entity-attribute-value fact. Rows are append-only: an
//! attribute is "updated" by inserting a new row with the same `(e, a)` and a
//! later `id`, so the current value of an attribute is the row with the
//! highest `id` for that pair.
//!
//! ```text
//! datom-core (this crate)
//!    │
//!    ├─── datom-generator            (random NewDatom rows)
//!    ├─── datom-populate-csv         (flat-file writer)
//!    └─── datom-populate-postgresql  (seed, index, query, verify)
//! ```
//!
//! # Example
//!
//! ```rust
//! use datom_core::{latest_per_attribute, Datom};
//!
//! let rows = vec![
//!     Datom::new(1, 1, "person/name", "old"),
//!     Datom::new(2, 1, "person/name", "new"),
//! ];
//! let latest = latest_per_attribute(&rows, 1);
//! assert_eq!(latest.len(), 1);
//! assert_eq!(latest[0].v, "new");
//! ```

pub mod attribute;
pub mod datom;
pub mod density;
pub mod latest;

pub use attribute::{Attribute, AttributeParseError, EntityType, Field};
pub use datom::{Datom, NewDatom};
pub use density::{DensityError, EntityDensity};
pub use latest::latest_per_attribute;

/// Name of the benchmark table.
pub const DATOMS_TABLE: &str = "datoms";
