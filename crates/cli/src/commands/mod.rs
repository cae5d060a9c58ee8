//! CLI command implementations.

pub mod analytics;
pub mod screens;
pub mod validate;

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use storedash_admin::error::AppError;
use storedash_admin::store::{SnapshotStore, StoreError};
use storedash_admin::views::ParamError;
use storedash_core::RecordError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The export could not be loaded.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// A view could not be derived.
    #[error("{0}")]
    View(#[from] AppError),

    /// A record cannot be aggregated.
    #[error("{0}")]
    Record(#[from] RecordError),

    /// Invalid option value.
    #[error("{0}")]
    Param(#[from] ParamError),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load the export into an in-memory store.
async fn open(export: &Path) -> Result<SnapshotStore, CommandError> {
    Ok(SnapshotStore::load(export).await?)
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CommandError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
