use std::sync::Arc;

use tracing::warn;

use crate::progress::metrics::{compute_metrics, Metrics};
use crate::progress::{CourseId, CourseProgress, CourseStatus, ProgressRecord};
use crate::storage::{StoragePort, StorageResult, PROGRESS_SLOT};

/// Owner of the persisted course progress record.
#[derive(Clone)]
pub struct ProgressStore {
    storage: Arc<dyn StoragePort>,
}

impl ProgressStore {
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Reads the persisted record. Missing, unreadable or corrupt data reads as empty.
    pub fn load(&self) -> ProgressRecord {
        let raw = match self.storage.load(PROGRESS_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ProgressRecord::new(),
            Err(err) => {
                warn!("failed reading progress slot, starting empty: {err}");
                return ProgressRecord::new();
            }
        };
        match ProgressRecord::from_json(&raw) {
            Ok(record) => record,
            Err(err) => {
                warn!("ignoring corrupt progress slot: {err}");
                ProgressRecord::new()
            }
        }
    }

    pub fn save(&self, record: &ProgressRecord) -> StorageResult<()> {
        let json = record.to_json()?;
        self.storage.save(PROGRESS_SLOT, &json)
    }

    pub fn set_status(&self, id: &CourseId, status: CourseStatus) -> StorageResult<ProgressRecord> {
        let mut record = self.load();
        record.set(id.clone(), status);
        self.save(&record)?;
        Ok(record)
    }

    pub fn reset(&self, id: &CourseId) -> StorageResult<ProgressRecord> {
        self.set_status(id, CourseStatus::NotStarted)
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove(PROGRESS_SLOT)
    }

    pub fn metrics(&self) -> Metrics {
        compute_metrics(&self.load())
    }

    pub fn statuses_for<'a, I>(&self, titles: I) -> Vec<CourseProgress>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let record = self.load();
        titles
            .into_iter()
            .map(|title| {
                let id = CourseId::from_title(title);
                let status = record.status(&id);
                CourseProgress {
                    id,
                    title: title.to_string(),
                    status,
                }
            })
            .collect()
    }
}
