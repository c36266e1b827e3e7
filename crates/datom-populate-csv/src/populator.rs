//! Flat-file populator.

use crate::error::CSVPopulatorError;
use csv::WriterBuilder;
use datom_core::EntityDensity;
use datom_generator::DataGenerator;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Metrics from a generate operation.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated datoms to a flat file.
pub struct CSVPopulator {
    generator: DataGenerator,
}

impl CSVPopulator {
    /// Create a populator for the given density.
    ///
    /// `seed` fixes the output; `None` gives a different file every run.
    pub fn new(density: EntityDensity, seed: Option<u64>) -> Self {
        Self {
            generator: DataGenerator::new(density, seed),
        }
    }

    /// Write `total_rows` datoms to `output_path`, replacing its contents.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
    ) -> Result<GenerateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = GenerateMetrics::default();
        let output_path = output_path.as_ref();
        let count = self.generator.density().total_rows();

        info!(
            "Generating '{}' with {} datoms ({} entities)",
            output_path.display(),
            count,
            self.generator.density().entity_count()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(buf_writer);

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let row = self.generator.next_row();
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record(row.to_record())?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;
            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Csv took {} milliseconds to generate: {} rows, {} bytes ({:.2} rows/sec)",
            metrics.total_duration.as_millis(),
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
