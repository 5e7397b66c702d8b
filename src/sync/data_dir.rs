use crate::sync::entry::{Schema, SchemaEntry};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Split a table directory name into (table, id) on the *last* dash, since
/// table names may themselves contain dashes. `None` when the name has no
/// dash at all and therefore cannot encode an id.
pub fn split_table_dir_name(name: &str) -> Option<(&str, &str)> {
    let idx = name.rfind('-')?;
    Some((&name[..idx], &name[idx + 1..]))
}

fn visible_dir_names(dir: &Path) -> Result<Vec<String>> {
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if file_type.is_dir() && !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Walk `<root>/<keyspace>/<table>-<id>` and yield one entry per leaf
/// directory. Hidden entries are skipped at both levels. Any listing
/// failure is fatal: an incomplete scan could misclassify live tables as
/// orphans.
pub fn scan_data_dir(root: &Path) -> Result<Schema> {
    let mut schema = Vec::new();
    for keyspace in visible_dir_names(root)? {
        let keyspace_dir = root.join(&keyspace);
        for dir_name in visible_dir_names(&keyspace_dir)? {
            let Some((table, table_id)) = split_table_dir_name(&dir_name) else {
                continue;
            };
            schema.push(SchemaEntry {
                keyspace: keyspace.clone(),
                table: table.to_string(),
                table_id: table_id.to_string(),
            });
        }
    }
    Ok(schema)
}
