use serde::Serialize;
use std::fmt;

/// One (keyspace, table, table-id) row, from either the schema dump or the
/// data directory. The id is opaque: compared for equality only, ordered
/// lexically just for stable listings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SchemaEntry {
    pub keyspace: String,
    pub table: String,
    pub table_id: String,
}

impl SchemaEntry {
    /// `keyspace.table` — the join key between the declared and observed
    /// sets, independent of the table id.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.keyspace, self.table)
    }
}

impl fmt::Display for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.full_name(), self.table_id)
    }
}

pub type Schema = Vec<SchemaEntry>;
