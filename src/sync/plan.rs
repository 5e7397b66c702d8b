use crate::sync::entry::{Schema, SchemaEntry};
use crate::sync::index::SchemaIndex;
use std::path::{Path, PathBuf};

/// One proposed corrective action, carrying everything needed to print it
/// with full context and to execute it without consulting the index again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Directory exists on disk but the schema no longer mentions the
    /// table. Terminal and irreversible.
    Remove { entry: SchemaEntry, path: PathBuf },
    /// Same logical table exists in the schema under a different id; the
    /// data belongs under the current id's directory.
    Migrate {
        entry: SchemaEntry,
        current_id: String,
        from: PathBuf,
        to: PathBuf,
    },
}

pub fn table_dir(root: &Path, keyspace: &str, table: &str, table_id: &str) -> PathBuf {
    root.join(keyspace).join(format!("{table}-{table_id}"))
}

/// Phase 1 of the run: classify every observed entry against the index.
/// Pure — no file system, no prompting. Each entry lands in exactly one of
/// ORPHAN (Remove), STALE (Migrate), or OK (no action).
pub fn build_plan(observed: &Schema, index: &SchemaIndex, root: &Path) -> Vec<Action> {
    let mut actions = Vec::new();

    for entry in observed {
        match index.get(&entry.full_name()) {
            None => actions.push(Action::Remove {
                entry: entry.clone(),
                path: table_dir(root, &entry.keyspace, &entry.table, &entry.table_id),
            }),
            Some(current_id) if *current_id != entry.table_id => {
                actions.push(Action::Migrate {
                    entry: entry.clone(),
                    current_id: current_id.clone(),
                    from: table_dir(root, &entry.keyspace, &entry.table, &entry.table_id),
                    to: table_dir(root, &entry.keyspace, &entry.table, current_id),
                });
            }
            Some(_) => {}
        }
    }

    actions
}
