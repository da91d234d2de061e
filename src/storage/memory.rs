use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::{StoragePort, StorageResult};

/// Volatile slots for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .expect("memory storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let guard = self.slots.lock().expect("memory storage mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self.slots.lock().expect("memory storage mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut guard = self.slots.lock().expect("memory storage mutex poisoned");
        guard.remove(key);
        Ok(())
    }
}
