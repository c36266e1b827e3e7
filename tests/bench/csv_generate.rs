//! Flat-file generator integration tests.

use datom_bench::bench::run_generate;
use datom_core::Attribute;
use datom_populate_csv::{CSVPopulateArgs, CommonPopulateArgs};
use std::collections::HashSet;

fn args(output: std::path::PathBuf, row_count: u64, rows_per_entity: u64) -> CSVPopulateArgs {
    CSVPopulateArgs {
        output,
        common: CommonPopulateArgs {
            row_count: Some(row_count),
            rows_per_entity: Some(rows_per_entity),
            seed: Some(42),
            dry_run: false,
        },
    }
}

#[test]
fn test_generate_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data.csv");

    let metrics = run_generate(args(output.clone(), 10_000, 1_000))
        .unwrap()
        .expect("not a dry run");
    assert_eq!(metrics.rows_written, 10_000);

    let catalog: HashSet<String> = Attribute::catalog().map(|a| a.to_string()).collect();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&output)
        .unwrap();

    let mut count = 0;
    for record in reader.records() {
        let record = record.unwrap();
        let e: i64 = record[0].parse().unwrap();
        assert!((1..=10).contains(&e), "entity {e} out of range");
        assert!(catalog.contains(&record[1]), "unknown attribute {}", &record[1]);
        assert_eq!(record[2].split(' ').count(), 3);
        count += 1;
    }
    assert_eq!(count, 10_000);
    assert_eq!(
        std::fs::metadata(&output).unwrap().len(),
        metrics.file_size_bytes
    );
}

#[test]
fn test_generate_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data.csv");

    let mut dry = args(output.clone(), 100, 10);
    dry.common.dry_run = true;

    assert!(run_generate(dry).unwrap().is_none());
    assert!(!output.exists());
}

#[test]
fn test_generate_rejects_zero_density() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_generate(args(dir.path().join("data.csv"), 100, 0));
    assert!(result.is_err());
}
