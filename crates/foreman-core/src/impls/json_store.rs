//! JSON file-backed record store.
//!
//! Design:
//! - The backing file holds one JSON array of work orders, pretty-printed,
//!   no envelope. Every operation re-reads and re-writes the whole file.
//! - A missing file, or content that does not parse as a work-order array,
//!   reads as an empty collection and the file is reinitialized to `[]`
//!   (self-healing). Anything else is a `StoreError`.
//! - No lock is held between load and save. Two concurrent mutations race
//!   with last-write-wins at whole-file granularity; accepted for the
//!   single-process, handful-of-records setting this store targets.
//! - No partial-write protection: a crash mid-write can corrupt the file,
//!   which the next load then heals to empty.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::domain::{NewWorkOrder, StoreError, WorkOrder, WorkOrderId, WorkOrderUpdate};
use crate::ports::{Clock, IdGenerator, RecordStore, SystemClock, UuidGenerator};

/// Whole-file JSON store.
///
/// Clock and id generator are injected so tests can pin timestamps and
/// script id collisions; production callers use [`JsonFileStore::new`].
pub struct JsonFileStore<C = SystemClock, G = UuidGenerator> {
    path: PathBuf,
    clock: C,
    ids: G,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_parts(path, SystemClock, UuidGenerator)
    }
}

impl<C: Clock, G: IdGenerator> JsonFileStore<C, G> {
    pub fn with_parts(path: impl Into<PathBuf>, clock: C, ids: G) -> Self {
        Self {
            path: path.into(),
            clock,
            ids,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reinitialize the backing file to an empty collection.
    async fn heal(&self) -> Result<Vec<WorkOrder>, StoreError> {
        self.write_records(&[]).await?;
        Ok(Vec::new())
    }

    async fn read_records(&self) -> Result<Vec<WorkOrder>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "backing file missing; initializing empty collection"
                );
                return self.heal().await;
            }
            Err(err) => return Err(StoreError::io("read", &self.path, err)),
        };

        match serde_json::from_str::<Vec<WorkOrder>>(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                // Whatever was in the file is unrecoverable at this layer;
                // log what we are about to discard before healing.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "backing file is not a work order array; reinitializing as empty"
                );
                self.heal().await
            }
        }
    }

    async fn write_records(&self, records: &[WorkOrder]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, body)
            .await
            .map_err(|err| StoreError::io("write", &self.path, err))
    }
}

#[async_trait]
impl<C: Clock, G: IdGenerator> RecordStore for JsonFileStore<C, G> {
    async fn load_all(&self) -> Result<Vec<WorkOrder>, StoreError> {
        self.read_records().await
    }

    async fn save_all(&self, records: &[WorkOrder]) -> Result<(), StoreError> {
        self.write_records(records).await
    }

    async fn find_by_id(&self, id: WorkOrderId) -> Result<Option<WorkOrder>, StoreError> {
        let records = self.read_records().await?;
        Ok(records.into_iter().find(|r| r.id == id))
    }

    async fn insert(&self, new: NewWorkOrder) -> Result<WorkOrder, StoreError> {
        let mut records = self.read_records().await?;

        // v4 collisions are astronomically unlikely, but uniqueness is an
        // invariant of the collection, so re-draw until the id is fresh.
        let mut id = self.ids.generate();
        while records.iter().any(|r| r.id == id) {
            id = self.ids.generate();
        }

        let record = WorkOrder {
            id,
            title: new.title,
            description: new.description,
            priority: new.priority,
            status: new.status,
            updated_at: self.clock.now(),
        };
        records.push(record.clone());
        self.write_records(&records).await?;
        Ok(record)
    }

    async fn replace(
        &self,
        id: WorkOrderId,
        update: WorkOrderUpdate,
    ) -> Result<Option<WorkOrder>, StoreError> {
        let mut records = self.read_records().await?;

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        record.apply(&update, self.clock.now());
        let updated = record.clone();

        self.write_records(&records).await?;
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: WorkOrderId) -> Result<bool, StoreError> {
        let mut records = self.read_records().await?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }

        self.write_records(&records).await?;
        Ok(true)
    }
}
