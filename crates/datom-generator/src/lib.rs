//! Random datom generator.
//!
//! Produces [`NewDatom`](datom_core::NewDatom) rows whose entity ids are
//! drawn uniformly from the population fixed by an
//! [`EntityDensity`](datom_core::EntityDensity), whose attributes come from
//! the six-entry catalog, and whose values are three lorem words.
//!
//! ```text
//! EntityDensity + seed
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - density      │
//! │  - rng (StdRng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    NewDatom { e, a, v }
//! ```
//!
//! # Example
//!
//! ```rust
//! use datom_core::EntityDensity;
//! use datom_generator::DataGenerator;
//!
//! let density = EntityDensity::new(1_000, 100).unwrap();
//! let mut generator = DataGenerator::new(density, Some(42));
//! let row = generator.next_row();
//! assert!((1..=10).contains(&row.e));
//! ```

pub mod generator;
pub mod words;

pub use generator::{DataGenerator, DatomIterator};
pub use words::{lorem_words, WORDS};
