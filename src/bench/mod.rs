//! Benchmark command handlers.
//!
//! This module contains handlers for the generate and run commands.

pub mod generate;
pub mod logging;
pub mod report;
pub mod run;

pub use generate::run_generate;
pub use logging::{init_tracing, mask_connection_password};
pub use report::{render_rows, render_table};
pub use run::run_benchmark;
