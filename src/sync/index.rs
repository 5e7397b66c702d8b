use crate::sync::entry::Schema;
use std::collections::BTreeMap;

/// full_name → table_id, built once per run and immutable afterward.
pub type SchemaIndex = BTreeMap<String, String>;

/// A declared row whose full name was already indexed. First occurrence
/// wins; collisions are reported to the caller, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub full_name: String,
    pub kept_id: String,
    pub ignored_id: String,
}

pub fn build_index(schema: &Schema) -> (SchemaIndex, Vec<DuplicateEntry>) {
    let mut index = SchemaIndex::new();
    let mut duplicates = Vec::new();

    for entry in schema {
        let full_name = entry.full_name();
        match index.get(&full_name) {
            Some(kept_id) => duplicates.push(DuplicateEntry {
                full_name,
                kept_id: kept_id.clone(),
                ignored_id: entry.table_id.clone(),
            }),
            None => {
                index.insert(full_name, entry.table_id.clone());
            }
        }
    }

    (index, duplicates)
}
