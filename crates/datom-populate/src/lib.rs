//! Common types and utilities for datom populators.
//!
//! This crate provides the argument types shared by the flat-file and the
//! PostgreSQL populators.

pub mod args;

pub use args::CommonPopulateArgs;
