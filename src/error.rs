use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CfSyncError {
    #[error("malformed schema row (expected at least 3 '|'-separated fields): {0:?}")]
    MalformedSchemaRow(String),
    #[error("nodetool refresh {keyspace} {table} failed with {status}")]
    RefreshFailed {
        keyspace: String,
        table: String,
        status: ExitStatus,
    },
}
