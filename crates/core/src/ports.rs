use crate::domain::AppRecord;
use crate::error::Result;

/// Synchronous string-keyed, string-valued storage, the persistence
/// collaborator behind the record store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Source of the initial catalog payload.
///
/// A failed fetch is definite; the store falls back to the default record
/// set rather than retrying.
pub trait CsvSource {
    fn fetch(&self) -> Result<String>;
}

/// Message severity for user-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Trait for presenting catalog state to the user.
/// This is a port (interface) that defines how the core communicates with output adapters.
pub trait CatalogView {
    fn render(&self, records: &[AppRecord]) -> Result<()>;
    fn notify(&self, message: &str, severity: Severity);
}
