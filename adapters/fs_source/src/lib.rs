use std::fs;
use std::path::{Path, PathBuf};

use catalog_core::error::{CatalogError, Result};
use catalog_core::ports::CsvSource;
use tracing::debug;

/// Filesystem implementation of the CsvSource trait.
///
/// The source path is fixed at construction and read on demand. A missing
/// or unreadable file maps to [`CatalogError::FetchFailure`], which the
/// store recovers from with its default record set.
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CsvSource for FileCsvSource {
    fn fetch(&self) -> Result<String> {
        debug!(path = %self.path.display(), "fetching CSV source");
        fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::FetchFailure(format!("{}: {e}", self.path.display())))
    }
}

/// Reads a user-selected import file. Read errors stay as IO errors so the
/// caller can tell them apart from a failed source fetch.
pub fn read_import_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading import file");
    Ok(fs::read_to_string(path)?)
}
