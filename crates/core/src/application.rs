use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::codec::{self, EXPORT_FIELDS};
use crate::defaults::default_apps;
use crate::domain::{AppDraft, AppRecord};
use crate::error::{CatalogError, Result};
use crate::ports::{CsvSource, KeyValueStore};
use crate::utils::today_iso_date;

/// Storage key the snapshot lives under.
pub const SNAPSHOT_KEY: &str = "aiAppsDB";

/// The serialized form of the full record set held in persistent storage.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    apps: Vec<AppRecord>,
}

/// Owner of the catalog record set.
///
/// All reads and writes go through this service; the CSV source and the
/// key-value store are injected ports. Mutations read-modify-write the
/// persisted snapshot, and a failed write leaves the stored set unchanged.
pub struct CatalogService {
    store: Box<dyn KeyValueStore>,
    source: Box<dyn CsvSource>,
    loaded: bool,
}

impl CatalogService {
    pub fn new(store: Box<dyn KeyValueStore>, source: Box<dyn CsvSource>) -> Self {
        Self {
            store,
            source,
            loaded: false,
        }
    }

    /// Loads the catalog from the CSV source and persists it.
    ///
    /// Fetch failures and unusable CSV are recovered locally by substituting
    /// the default record set; only a persistence failure is surfaced. A
    /// second call is a no-op until [`reset`](Self::reset).
    pub fn load(&mut self) -> Result<()> {
        if self.loaded {
            debug!("catalog already loaded, skipping reload");
            return Ok(());
        }

        let apps = match self.source.fetch() {
            Ok(text) => match codec::parse(&text) {
                Ok(apps) => apps,
                Err(err) => {
                    warn!(%err, "CSV source unusable, falling back to default records");
                    default_apps()
                }
            },
            Err(err) => {
                warn!(%err, "CSV fetch failed, falling back to default records");
                default_apps()
            }
        };

        info!(count = apps.len(), "loaded catalog");
        self.write_snapshot(&apps)?;
        self.loaded = true;
        Ok(())
    }

    /// Loads from the CSV source only when no readable snapshot exists yet,
    /// so a persisted catalog survives across runs.
    pub fn ensure_loaded(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        if self.read_snapshot().is_ok() {
            self.loaded = true;
            return Ok(());
        }
        self.load()
    }

    /// Returns the current record set.
    ///
    /// A missing or corrupt snapshot degrades to the default record set
    /// rather than failing the read.
    pub fn get_all(&self) -> Result<Vec<AppRecord>> {
        match self.read_snapshot() {
            Ok(apps) => Ok(apps),
            Err(err) => {
                warn!(%err, "snapshot unreadable, returning default records");
                Ok(default_apps())
            }
        }
    }

    /// Validates a draft, assigns a fresh id and today's date, and appends
    /// the record to the snapshot. Returns the stored record.
    pub fn add(&mut self, draft: AppDraft) -> Result<AppRecord> {
        let mut apps = match self.read_snapshot() {
            Ok(apps) => apps,
            Err(CatalogError::SnapshotMissing) => Vec::new(),
            Err(err) => return Err(err),
        };

        let record = draft.into_record(next_id(&apps), today_iso_date())?;
        apps.push(record.clone());
        self.write_snapshot(&apps)?;
        info!(id = record.id, name = %record.name, "added record");
        Ok(record)
    }

    /// Removes the record with the given id.
    ///
    /// Returns whether the set changed; an unreadable snapshot yields
    /// `Ok(false)`. Only the persistence write can fail.
    pub fn remove(&mut self, id: i64) -> Result<bool> {
        let mut apps = match self.read_snapshot() {
            Ok(apps) => apps,
            Err(err) => {
                warn!(%err, "snapshot unreadable, nothing removed");
                return Ok(false);
            }
        };

        let before = apps.len();
        apps.retain(|app| app.id != id);
        if apps.len() == before {
            return Ok(false);
        }

        self.write_snapshot(&apps)?;
        info!(id, remaining = apps.len(), "removed record");
        Ok(true)
    }

    /// Clears the persisted snapshot and reloads from the CSV source,
    /// bypassing the loaded guard.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(SNAPSHOT_KEY)?;
        self.loaded = false;
        self.load()
    }

    /// Serializes the current record set as CSV with the fixed column order.
    pub fn export_all(&self) -> Result<String> {
        let apps = self.get_all()?;
        codec::serialize(&apps, &EXPORT_FIELDS)
    }

    /// Parses CSV contents and replaces the entire record set with the
    /// result. Fails with [`CatalogError::ParseEmpty`] when no valid record
    /// is found, leaving the stored set untouched.
    pub fn import_replace(&mut self, contents: &str) -> Result<usize> {
        let apps = codec::parse(contents)?;
        self.write_snapshot(&apps)?;
        self.loaded = true;
        info!(count = apps.len(), "imported catalog");
        Ok(apps.len())
    }

    fn read_snapshot(&self) -> Result<Vec<AppRecord>> {
        let raw = self
            .store
            .get(SNAPSHOT_KEY)?
            .ok_or(CatalogError::SnapshotMissing)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot.apps)
    }

    fn write_snapshot(&self, apps: &[AppRecord]) -> Result<()> {
        let snapshot = Snapshot {
            apps: apps.to_vec(),
        };
        let raw = serde_json::to_string(&snapshot)
            .map_err(|e| CatalogError::WriteFailure(e.to_string()))?;
        self.store
            .set(SNAPSHOT_KEY, &raw)
            .map_err(|e| CatalogError::WriteFailure(e.to_string()))
    }
}

/// Picks an id strictly greater than every stored id, so that two adds within
/// the same millisecond still get distinct ids.
fn next_id(apps: &[AppRecord]) -> i64 {
    let max_existing = apps.iter().map(|app| app.id).max().unwrap_or(0);
    Utc::now().timestamp_millis().max(max_existing + 1)
}
