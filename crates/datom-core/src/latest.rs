//! In-memory "latest value per attribute" computation.
//!
//! Mirrors the benchmark query: for one entity, group rows by attribute and
//! keep the row holding `MAX(id)`.

use crate::datom::Datom;
use std::collections::BTreeMap;

/// Return the most recent row for every attribute of `entity`, ordered by
/// attribute.
pub fn latest_per_attribute(rows: &[Datom], entity: i64) -> Vec<Datom> {
    let mut latest: BTreeMap<&str, &Datom> = BTreeMap::new();

    for row in rows.iter().filter(|r| r.e == entity) {
        latest
            .entry(row.a.as_str())
            .and_modify(|current| {
                if row.id > current.id {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    latest.into_values().cloned().collect()
}
