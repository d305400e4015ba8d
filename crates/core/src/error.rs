//! Unified error type for the catalog core.
//!
//! The taxonomy mirrors the failure policy of the store: fetch and parse
//! failures during the initial load are recovered locally with the default
//! record set, missing or corrupt snapshots degrade to defaults on read, and
//! write failures are surfaced to the caller with in-memory state unchanged.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The CSV source could not be fetched (missing file, non-OK response).
    #[error("failed to fetch CSV source: {0}")]
    FetchFailure(String),

    /// The CSV text had fewer than two usable lines, or no row survived
    /// filtering. Callers substitute the default record set.
    #[error("no valid records in CSV input")]
    ParseEmpty,

    /// No snapshot exists under the store key.
    #[error("no persisted snapshot found")]
    SnapshotMissing,

    /// The snapshot exists but is not valid JSON for the expected shape.
    #[error("persisted snapshot is corrupt: {0}")]
    SnapshotCorrupt(#[from] serde_json::Error),

    /// Persisting the snapshot failed; the in-memory set was left unchanged.
    #[error("failed to persist snapshot: {0}")]
    WriteFailure(String),

    /// A storage backend error outside the write path.
    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A draft record failed validation.
    #[error("invalid record: {0}")]
    InvalidDraft(String),
}
