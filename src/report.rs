use crate::sync::plan::Action;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Remove,
    Migrate,
}

/// One proposed action plus what happened to it, for `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct ActionReport {
    pub kind: ActionKind,
    pub full_name: String,
    pub observed_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_id: Option<String>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub executed: bool,
    pub conflicts: Vec<String>,
}

impl ActionReport {
    pub fn proposed(action: &Action) -> Self {
        match action {
            Action::Remove { entry, path } => Self {
                kind: ActionKind::Remove,
                full_name: entry.full_name(),
                observed_id: entry.table_id.clone(),
                current_id: None,
                path: path.display().to_string(),
                destination: None,
                executed: false,
                conflicts: Vec::new(),
            },
            Action::Migrate {
                entry,
                current_id,
                from,
                to,
            } => Self {
                kind: ActionKind::Migrate,
                full_name: entry.full_name(),
                observed_id: entry.table_id.clone(),
                current_id: Some(current_id.clone()),
                path: from.display().to_string(),
                destination: Some(to.display().to_string()),
                executed: false,
                conflicts: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub duplicates: Vec<String>,
    pub actions: Vec<ActionReport>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            duplicates: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
