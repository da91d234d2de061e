pub mod memory;
pub mod migrations;
pub mod sqlite;

use thiserror::Error;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Slot holding the serialized course progress record.
pub const PROGRESS_SLOT: &str = "mentorix_course_progress_v1";
/// Slot holding a persisted scoring-service address override.
pub const ENDPOINT_SLOT: &str = "mentorix_api_base";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Durable string slots keyed by a fixed namespace string.
///
/// `save` replaces the whole value in one step; there is no merge.
pub trait StoragePort: Send + Sync {
    fn load(&self, key: &str) -> StorageResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}
