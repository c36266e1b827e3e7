//! The four covering indexes over `(e, a, v)` rotations.
//!
//! Each index appends `id` so the `MAX(id)` aggregate can be answered from
//! the index alone.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatomIndex {
    Eavt,
    Aevt,
    Avet,
    Vaet,
}

impl DatomIndex {
    /// Creation order.
    pub const ALL: [DatomIndex; 4] = [
        DatomIndex::Eavt,
        DatomIndex::Aevt,
        DatomIndex::Avet,
        DatomIndex::Vaet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DatomIndex::Eavt => "idx_eavt",
            DatomIndex::Aevt => "idx_aevt",
            DatomIndex::Avet => "idx_avet",
            DatomIndex::Vaet => "idx_vaet",
        }
    }

    pub fn columns(&self) -> [&'static str; 4] {
        match self {
            DatomIndex::Eavt => ["e", "a", "v", "id"],
            DatomIndex::Aevt => ["a", "e", "v", "id"],
            DatomIndex::Avet => ["a", "v", "e", "id"],
            DatomIndex::Vaet => ["v", "a", "e", "id"],
        }
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP INDEX IF EXISTS \"{}\"", self.name())
    }

    pub fn create_sql(&self, table_name: &str) -> String {
        let columns: Vec<String> = self.columns().iter().map(|c| format!("\"{c}\"")).collect();
        format!(
            "CREATE INDEX \"{}\" ON \"{table_name}\" ({})",
            self.name(),
            columns.join(", ")
        )
    }

    /// The eight statements of a rebuild: every drop, then every create.
    pub fn rebuild_statements(table_name: &str) -> Vec<String> {
        Self::ALL
            .iter()
            .map(|index| index.drop_sql())
            .chain(Self::ALL.iter().map(|index| index.create_sql(table_name)))
            .collect()
    }
}

/// Timings from an index rebuild.
#[derive(Debug, Clone, Default)]
pub struct IndexMetrics {
    /// Each executed statement with its elapsed time, in execution order.
    pub statements: Vec<(String, Duration)>,
    pub total_duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sql() {
        assert_eq!(
            DatomIndex::Eavt.create_sql("datoms"),
            "CREATE INDEX \"idx_eavt\" ON \"datoms\" (\"e\", \"a\", \"v\", \"id\")"
        );
        assert_eq!(
            DatomIndex::Vaet.create_sql("datoms"),
            "CREATE INDEX \"idx_vaet\" ON \"datoms\" (\"v\", \"a\", \"e\", \"id\")"
        );
    }

    #[test]
    fn test_drop_sql() {
        assert_eq!(
            DatomIndex::Avet.drop_sql(),
            "DROP INDEX IF EXISTS \"idx_avet\""
        );
    }

    #[test]
    fn test_rebuild_order() {
        let statements = DatomIndex::rebuild_statements("datoms");
        assert_eq!(statements.len(), 8);
        let names = ["idx_eavt", "idx_aevt", "idx_avet", "idx_vaet"];
        for (i, name) in names.iter().enumerate() {
            assert!(statements[i].starts_with("DROP INDEX IF EXISTS"));
            assert!(statements[i].contains(name));
            assert!(statements[i + 4].starts_with("CREATE INDEX"));
            assert!(statements[i + 4].contains(name));
        }
    }

    #[test]
    fn test_every_index_ends_with_id() {
        for index in DatomIndex::ALL {
            let columns = index.columns();
            assert_eq!(columns[3], "id");
            let mut rotation = columns[..3].to_vec();
            rotation.sort_unstable();
            assert_eq!(rotation, vec!["a", "e", "v"]);
        }
    }
}
