use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::models::{Collection, Record, RecordPatch};

/// Flat-file record store backed by a single JSON document.
///
/// The only persistence primitives are whole-collection read and
/// whole-collection write: every request re-reads the backing file and
/// every mutation rewrites it in full. Nothing is cached across calls.
///
/// Cloneable and cheap to clone (Arc internals) so it can be shared
/// across axum handlers.
#[derive(Clone)]
pub struct FileStore {
    path: Arc<PathBuf>,
    strict_load: bool,
    /// Serializes read-modify-write cycles within this process so that
    /// interleaved mutations cannot lose updates. Cross-process writers
    /// are still unprotected; last writer wins.
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Create a store for the backing file named in the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: Arc::new(config.db_path.clone()),
            strict_load: config.strict_load,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the backing file with an empty collection if it is absent.
    ///
    /// Runs once at startup, before the router is reachable. Idempotent:
    /// an existing file is left untouched, whatever its content.
    pub async fn ensure_exists(&self) -> Result<()> {
        if tokio::fs::try_exists(self.path.as_ref())
            .await
            .with_context(|| format!("Failed to stat backing file {}", self.path.display()))?
        {
            tracing::debug!("Backing file already exists: {}", self.path.display());
            return Ok(());
        }

        tracing::info!(
            "Backing file not found, creating empty collection: {}",
            self.path.display()
        );
        self.write(&Collection::default())
            .await
            .with_context(|| format!("Failed to initialize backing file {}", self.path.display()))
    }

    /// Read and parse the entire collection from the backing file.
    ///
    /// Policy is fail-open: a missing file, malformed content, or I/O
    /// failure yields the empty collection rather than an error, traded
    /// deliberately for availability. The fallback is always logged. With
    /// `strict_load` set the failure propagates instead.
    pub async fn load(&self) -> Result<Collection> {
        let read_result = tokio::fs::read(self.path.as_ref())
            .await
            .with_context(|| format!("Failed to read backing file {}", self.path.display()))
            .and_then(|bytes| {
                serde_json::from_slice::<Collection>(&bytes).with_context(|| {
                    format!("Failed to parse backing file {}", self.path.display())
                })
            });

        match read_result {
            Ok(collection) => Ok(collection),
            Err(e) if self.strict_load => Err(e),
            Err(e) => {
                tracing::warn!(
                    "Falling back to empty collection, backing file unreadable: {:#}",
                    e
                );
                Ok(Collection::default())
            }
        }
    }

    /// Serialize the full collection and overwrite the backing file.
    ///
    /// Failure is logged and swallowed; callers cannot tell a failed save
    /// from a successful one. This preserves the store's observed
    /// contract, where a client may see success for a write that never
    /// reached disk.
    pub async fn save(&self, collection: &Collection) {
        if let Err(e) = self.write(collection).await {
            tracing::error!(
                "Failed to persist collection, client response will claim success: {:#}",
                e
            );
        }
    }

    async fn write(&self, collection: &Collection) -> Result<()> {
        // Pretty-printed with 2-space indent on every write
        let bytes =
            serde_json::to_vec_pretty(collection).context("Failed to serialize collection")?;

        tokio::fs::write(self.path.as_ref(), bytes)
            .await
            .with_context(|| format!("Failed to write backing file {}", self.path.display()))
    }

    /// Return all records in insertion order.
    pub async fn list(&self) -> Result<Vec<Record>> {
        let collection = self.load().await?;
        Ok(collection.todos)
    }

    /// Append a record to the collection.
    ///
    /// # Returns
    /// * `Ok(true)` - Record appended and collection saved
    /// * `Ok(false)` - A record with the same `ID` already exists; the
    ///   collection is unchanged
    pub async fn create(&self, record: Record) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        if collection.todos.iter().any(|todo| todo.id == record.id) {
            tracing::debug!("Rejected create, duplicate ID: {}", record.id);
            return Ok(false);
        }

        collection.todos.push(record);
        self.save(&collection).await;
        Ok(true)
    }

    /// Shallow-merge a patch into the record with the given ID.
    ///
    /// Fields absent from the patch are retained. Returns the updated
    /// record, or `None` if no record carries the ID.
    pub async fn update(&self, id: i64, patch: RecordPatch) -> Result<Option<Record>> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        let Some(record) = collection.todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };

        patch.apply(record);
        let updated = record.clone();
        self.save(&collection).await;
        Ok(Some(updated))
    }

    /// Remove the record with the given ID from the collection.
    ///
    /// Returns the removed record, or `None` if no record carries the ID.
    pub async fn delete(&self, id: i64) -> Result<Option<Record>> {
        let _guard = self.write_lock.lock().await;

        let mut collection = self.load().await?;
        let Some(index) = collection.todos.iter().position(|todo| todo.id == id) else {
            return Ok(None);
        };

        let removed = collection.todos.remove(index);
        self.save(&collection).await;
        Ok(Some(removed))
    }

    /// Verify the backing file can be read and parsed.
    ///
    /// Unlike `load`, failures always propagate here regardless of the
    /// fail-open policy, so the health endpoint reports masked problems.
    pub async fn health_check(&self) -> Result<()> {
        let bytes = tokio::fs::read(self.path.as_ref())
            .await
            .with_context(|| format!("Failed to read backing file {}", self.path.display()))?;

        serde_json::from_slice::<Collection>(&bytes)
            .with_context(|| format!("Failed to parse backing file {}", self.path.display()))?;

        Ok(())
    }
}
