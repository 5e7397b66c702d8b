use crate::error::CfSyncError;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Post-migration notification to the owning node. Behind a trait so the
/// migration executor never constructs commands itself.
pub trait RefreshHook {
    fn refresh(&self, keyspace: &str, table: &str) -> Result<()>;
}

/// Runs `nodetool refresh <keyspace> <table>`. Only the exit status is
/// inspected; output is passed through untouched.
#[derive(Debug, Clone)]
pub struct NodetoolRefresh {
    bin: PathBuf,
}

impl NodetoolRefresh {
    pub fn resolve() -> Result<Self> {
        if let Ok(v) = std::env::var("CFSYNC_NODETOOL_BIN") {
            let v = v.trim();
            if !v.is_empty() {
                return Ok(Self { bin: PathBuf::from(v) });
            }
        }
        let bin = which::which("nodetool")
            .context("nodetool not found on PATH; set CFSYNC_NODETOOL_BIN")?;
        Ok(Self { bin })
    }
}

impl RefreshHook for NodetoolRefresh {
    fn refresh(&self, keyspace: &str, table: &str) -> Result<()> {
        let status = Command::new(&self.bin)
            .arg("refresh")
            .arg(keyspace)
            .arg(table)
            .status()
            .with_context(|| format!("failed to run {} refresh", self.bin.display()))?;
        if !status.success() {
            return Err(CfSyncError::RefreshFailed {
                keyspace: keyspace.to_string(),
                table: table.to_string(),
                status,
            }
            .into());
        }
        Ok(())
    }
}
