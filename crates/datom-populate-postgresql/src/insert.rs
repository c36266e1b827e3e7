//! Table DDL and batched INSERT logic.

use crate::error::PostgreSQLPopulatorError;
use datom_core::NewDatom;
use tokio_postgres::types::ToSql;
use tokio_postgres::Client;

/// PostgreSQL limit on bind parameters per statement.
pub const MAX_BIND_PARAMETERS: usize = u16::MAX as usize;

/// Bind parameters per row: `e`, `a`, `v`.
const PARAMS_PER_ROW: usize = 3;

/// Generate the idempotent CREATE TABLE statement.
pub fn generate_create_table(table_name: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS \"{table_name}\" (\
         \"id\" SERIAL PRIMARY KEY, \
         \"e\" BIGINT, \
         \"a\" TEXT, \
         \"v\" TEXT)"
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS \"{table_name}\" CASCADE")
}

/// Generate a multi-row INSERT for `row_count` rows.
pub fn generate_insert(table_name: &str, row_count: usize) -> String {
    let placeholders: Vec<String> = (0..row_count)
        .map(|row| {
            let base = row * PARAMS_PER_ROW;
            format!("(${}, ${}, ${})", base + 1, base + 2, base + 3)
        })
        .collect();

    format!(
        "INSERT INTO \"{table_name}\" (\"e\", \"a\", \"v\") VALUES {}",
        placeholders.join(", ")
    )
}

/// Check that a batch fits in one statement.
pub fn validate_batch_size(batch_size: usize) -> Result<(), PostgreSQLPopulatorError> {
    if batch_size == 0 {
        return Err(PostgreSQLPopulatorError::Config(
            "batch size must be greater than 0".to_string(),
        ));
    }
    match batch_size.checked_mul(PARAMS_PER_ROW) {
        Some(params) if params <= MAX_BIND_PARAMETERS => Ok(()),
        _ => Err(PostgreSQLPopulatorError::Config(format!(
            "batch size {batch_size} exceeds the PostgreSQL limit of {MAX_BIND_PARAMETERS} bind parameters ({} rows)",
            MAX_BIND_PARAMETERS / PARAMS_PER_ROW
        ))),
    }
}

/// Insert a batch of rows with one statement.
pub async fn insert_batch(
    client: &Client,
    table_name: &str,
    rows: &[NewDatom],
) -> Result<u64, PostgreSQLPopulatorError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let sql = generate_insert(table_name, rows.len());

    let attributes: Vec<String> = rows.iter().map(|r| r.a.to_string()).collect();
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(rows.len() * PARAMS_PER_ROW);
    for (row, attribute) in rows.iter().zip(&attributes) {
        params.push(&row.e);
        params.push(attribute);
        params.push(&row.v);
    }

    let inserted = client.execute(&sql, &params).await?;
    Ok(inserted)
}
