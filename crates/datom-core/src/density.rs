//! Entity density: how many rows accumulate per entity.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DensityError {
    #[error("rows per entity must be greater than 0")]
    ZeroRowsPerEntity,

    #[error("{0} entities do not fit in a BIGINT entity id")]
    TooManyEntities(u64),
}

/// Total row count and the rows-per-entity ratio that fixes the entity
/// population.
///
/// A larger ratio models fewer entities with a longer edit history each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDensity {
    total_rows: u64,
    rows_per_entity: u64,
    entity_count: i64,
}

impl EntityDensity {
    pub fn new(total_rows: u64, rows_per_entity: u64) -> Result<Self, DensityError> {
        if rows_per_entity == 0 {
            return Err(DensityError::ZeroRowsPerEntity);
        }
        let entities = (total_rows / rows_per_entity).max(1);
        let entity_count =
            i64::try_from(entities).map_err(|_| DensityError::TooManyEntities(entities))?;
        Ok(Self {
            total_rows,
            rows_per_entity,
            entity_count,
        })
    }

    pub fn total_rows(&self) -> u64 {
        self.total_rows
    }

    pub fn rows_per_entity(&self) -> u64 {
        self.rows_per_entity
    }

    /// Number of distinct entities; entity ids span `1..=entity_count()`.
    ///
    /// Never zero, so a row count below the ratio still has one entity.
    pub fn entity_count(&self) -> i64 {
        self.entity_count
    }
}
