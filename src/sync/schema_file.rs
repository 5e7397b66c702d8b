use crate::error::CfSyncError;
use crate::sync::entry::{Schema, SchemaEntry};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a `DESCRIBE`-style schema dump. Lines before the first line
/// containing a dash are preamble; that line (the header underline) starts
/// the data section; a blank line ends it. Each data row is `|`-separated
/// with fields 0/1/2 = keyspace/table/table-id.
///
/// Cassandra prints table ids as dashed UUIDs while the data directory
/// encodes them undashed, so the id field has every dash removed.
pub fn parse_schema(text: &str) -> Result<Schema> {
    let mut schema = Vec::new();
    let mut started = false;

    for line in text.lines() {
        if !started {
            if line.contains('-') {
                started = true;
            }
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < 3 {
            return Err(CfSyncError::MalformedSchemaRow(line.to_string()).into());
        }
        schema.push(SchemaEntry {
            keyspace: fields[0].trim().to_string(),
            table: fields[1].trim().to_string(),
            table_id: fields[2].trim().replace('-', ""),
        });
    }

    Ok(schema)
}

pub fn load_schema(path: &Path) -> Result<Schema> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read schema file {}", path.display()))?;
    parse_schema(&raw)
}
