//! Seed-index-query command handler.

use anyhow::Context;
use datom_generator::DataGenerator;
use datom_populate_postgresql::{
    LatencySummary, PostgreSQLPopulator, PostgreSQLRunArgs, QueryOutcome,
    DEFAULT_ROWS_PER_ENTITY, DEFAULT_ROW_COUNT,
};

use super::{mask_connection_password, render_rows};

/// Run setup, the optional seed and index steps, then the timed query.
///
/// Returns the last query outcome, or `None` in dry-run mode.
pub async fn run_benchmark(args: PostgreSQLRunArgs) -> anyhow::Result<Option<QueryOutcome>> {
    let density = args
        .common
        .density(DEFAULT_ROW_COUNT, DEFAULT_ROWS_PER_ENTITY)
        .context("Invalid entity density")?;

    if args.repeat == 0 {
        anyhow::bail!("--repeat must be at least 1");
    }

    if args.common.dry_run {
        tracing::info!(
            "[DRY-RUN] Connection: {}",
            mask_connection_password(&args.postgresql_connection_string)
        );
        tracing::info!(
            "[DRY-RUN] fresh={} populate={} index={} verify={}",
            args.fresh,
            args.populate,
            args.index,
            args.verify
        );
        if args.populate {
            datom_populate_postgresql::insert::validate_batch_size(args.batch_size)?;
            tracing::info!(
                "[DRY-RUN] Would insert {} datoms over {} entities in batches of {} (seed={:?})",
                density.total_rows(),
                density.entity_count(),
                args.batch_size,
                args.common.seed
            );
        }
        tracing::info!(
            "[DRY-RUN] Would query entity {} {} time(s)",
            args.entity,
            args.repeat
        );
        return Ok(None);
    }

    tracing::info!(
        "Connecting to {}",
        mask_connection_password(&args.postgresql_connection_string)
    );
    let populator = PostgreSQLPopulator::connect(&args.postgresql_connection_string)
        .await
        .context("Failed to connect to PostgreSQL")?
        .with_batch_size(args.batch_size);

    if args.fresh {
        populator
            .drop_table()
            .await
            .context("Failed to drop datoms table")?;
    }

    populator
        .setup()
        .await
        .context("Failed to create datoms table")?;

    if args.populate {
        let mut generator = DataGenerator::new(density, args.common.seed);
        populator
            .seed(&mut generator)
            .await
            .context("Failed to seed datoms")?;
    }

    if args.index {
        populator
            .build_indexes()
            .await
            .context("Failed to build indexes")?;
    }

    tracing::info!("Starting query.");
    let mut durations = Vec::with_capacity(args.repeat as usize);
    let mut outcome = None;
    for _ in 0..args.repeat {
        let run = populator
            .query_latest(args.entity)
            .await
            .with_context(|| format!("Failed to query entity {}", args.entity))?;
        durations.push(run.duration);
        outcome = Some(run);
    }
    let outcome = outcome.context("query did not run")?;

    println!("{}", render_rows(&outcome.rows, args.format)?);
    tracing::info!(
        "Query took {:.3} milliseconds to run.",
        outcome.duration.as_secs_f64() * 1000.0
    );

    if let Some(summary) = LatencySummary::from_durations(&durations) {
        if summary.runs > 1 {
            tracing::info!(
                "Query latency over {} runs: min {:.3} ms, mean {:.3} ms, max {:.3} ms",
                summary.runs,
                summary.min.as_secs_f64() * 1000.0,
                summary.mean.as_secs_f64() * 1000.0,
                summary.max.as_secs_f64() * 1000.0
            );
        }
    }

    if args.verify {
        populator
            .verify_latest(args.entity, &outcome)
            .await
            .context("Query result verification failed")?;
    }

    Ok(Some(outcome))
}
