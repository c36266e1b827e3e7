//! Row representations.

use crate::attribute::Attribute;
use serde::{Deserialize, Serialize};

/// A generated fact that has not been stored yet.
///
/// The surrogate `id` is assigned by the database on insert, so generated
/// rows only carry `e`, `a` and `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDatom {
    pub e: i64,
    pub a: Attribute,
    pub v: String,
}

impl NewDatom {
    pub fn new(e: i64, a: Attribute, v: impl Into<String>) -> Self {
        Self { e, a, v: v.into() }
    }

    /// Flat-file record in `e,a,v` column order.
    pub fn to_record(&self) -> [String; 3] {
        [self.e.to_string(), self.a.to_string(), self.v.clone()]
    }
}

/// A stored fact read back from the `datoms` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datom {
    /// Auto-increment key; higher means more recent.
    pub id: i32,
    pub e: i64,
    pub a: String,
    pub v: String,
}

impl Datom {
    pub fn new(id: i32, e: i64, a: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            id,
            e,
            a: a.into(),
            v: v.into(),
        }
    }
}
