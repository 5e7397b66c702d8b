use crate::sync::refresh::RefreshHook;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const SNAPSHOTS_DIR: &str = "snapshots";

/// What one migration actually did, for reporting.
#[derive(Debug, Clone, Default)]
pub struct MigrationOutcome {
    pub snapshots_removed: bool,
    pub moved: Vec<String>,
    /// Destination paths that already existed. The corresponding entries
    /// stay under the old directory and are never overwritten.
    pub conflicts: Vec<PathBuf>,
    pub source_removed: bool,
}

fn list_entry_names(dir: &Path) -> Result<Vec<String>> {
    let read_dir =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

fn move_entry(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::CrossesDevices && from.is_file() => {
            fs::copy(from, to)
                .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))?;
            fs::remove_file(from)
                .with_context(|| format!("failed to remove {}", from.display()))?;
            Ok(())
        }
        Err(err) => Err(err)
            .with_context(|| format!("failed to move {} to {}", from.display(), to.display())),
    }
}

/// Move one table's data from the old id's directory to the current id's.
///
/// Old snapshots are dropped first (they are point-in-time artifacts tied
/// to the old id). Every remaining entry is then renamed into `to`, except
/// entries whose destination already exists — those are recorded as
/// conflicts and left behind. The source directory is removed only when it
/// ends up empty. Finally the refresh hook is invoked so the node picks up
/// the relocated data; hook failure is fatal for the run.
pub fn migrate(
    keyspace: &str,
    table: &str,
    from: &Path,
    to: &Path,
    hook: &dyn RefreshHook,
) -> Result<MigrationOutcome> {
    let mut outcome = MigrationOutcome::default();

    let snapshots = from.join(SNAPSHOTS_DIR);
    if snapshots.exists() {
        fs::remove_dir_all(&snapshots)
            .with_context(|| format!("failed to remove {}", snapshots.display()))?;
        outcome.snapshots_removed = true;
    }

    for name in list_entry_names(from)? {
        let old_path = from.join(&name);
        let new_path = to.join(&name);
        if new_path.exists() {
            outcome.conflicts.push(new_path);
            continue;
        }
        move_entry(&old_path, &new_path)?;
        outcome.moved.push(name);
    }

    if list_entry_names(from)?.is_empty() {
        fs::remove_dir_all(from)
            .with_context(|| format!("failed to remove {}", from.display()))?;
        outcome.source_removed = true;
    }

    hook.refresh(keyspace, table)?;
    Ok(outcome)
}
