//! The benchmark query and its reference check.

use datom_core::Datom;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio_postgres::Row;

/// Latest row per attribute for the entity bound to `$1`.
///
/// The inner aggregation finds `MAX(id)` per attribute; the join recovers the
/// full row.
pub fn generate_latest_query(table_name: &str) -> String {
    format!(
        "SELECT d1.\"id\", d1.\"e\", d1.\"a\", d1.\"v\" \
         FROM \"{table_name}\" d1 \
         INNER JOIN (\
         SELECT \"a\", MAX(\"id\") AS latest_id \
         FROM \"{table_name}\" \
         WHERE \"e\" = $1 \
         GROUP BY \"a\"\
         ) d2 ON d1.\"a\" = d2.\"a\" AND d1.\"id\" = d2.latest_id \
         ORDER BY d1.\"a\""
    )
}

/// Every row of the entity bound to `$1`, oldest first.
pub fn generate_entity_scan(table_name: &str) -> String {
    format!(
        "SELECT \"id\", \"e\", \"a\", \"v\" FROM \"{table_name}\" WHERE \"e\" = $1 ORDER BY \"id\""
    )
}

pub(crate) fn row_to_datom(row: &Row) -> Result<Datom, tokio_postgres::Error> {
    Ok(Datom {
        id: row.try_get("id")?,
        e: row.try_get("e")?,
        a: row.try_get("a")?,
        v: row.try_get("v")?,
    })
}

/// Result set and latency of one query run.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub rows: Vec<Datom>,
    pub duration: Duration,
}

/// Min / mean / max over repeated query runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    pub runs: usize,
    pub min: Duration,
    pub mean: Duration,
    pub max: Duration,
}

impl LatencySummary {
    pub fn from_durations(durations: &[Duration]) -> Option<Self> {
        let min = *durations.iter().min()?;
        let max = *durations.iter().max()?;
        let total: Duration = durations.iter().sum();
        Some(Self {
            runs: durations.len(),
            min,
            mean: total / durations.len() as u32,
            max,
        })
    }
}

/// Comparison of the benchmark query against the expected rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Attributes whose row matched exactly.
    pub matched: usize,
    /// Expected attributes the query did not return.
    pub missing: usize,
    /// Attributes returned with a different row.
    pub mismatched: usize,
    /// Attributes returned that were not expected.
    pub unexpected: usize,
}

impl VerificationReport {
    /// Compare rows keyed by attribute.
    pub fn compare(expected: &[Datom], actual: &[Datom]) -> Self {
        let expected: BTreeMap<&str, &Datom> = expected.iter().map(|d| (d.a.as_str(), d)).collect();
        let mut report = Self::default();
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();

        for row in actual {
            let count = seen.entry(row.a.as_str()).or_insert(0);
            *count += 1;
            if *count > 1 {
                // A second row for the same attribute is never correct
                report.unexpected += 1;
                continue;
            }
            match expected.get(row.a.as_str()) {
                Some(want) if *want == row => report.matched += 1,
                Some(_) => report.mismatched += 1,
                None => report.unexpected += 1,
            }
        }

        report.missing = expected
            .keys()
            .filter(|a| !seen.contains_key(*a))
            .count();
        report
    }

    pub fn is_success(&self) -> bool {
        self.missing == 0 && self.mismatched == 0 && self.unexpected == 0
    }
}
