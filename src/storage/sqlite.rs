use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::storage::migrations::BASE_MIGRATION;
use crate::storage::{StoragePort, StorageResult};

pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn open_in_memory() -> StorageResult<Self> {
        let store = Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        };
        store.migrate()?;
        Ok(store)
    }

    pub fn migrate(&self) -> StorageResult<()> {
        let conn = self.conn.lock().expect("sqlite connection mutex poisoned");
        conn.execute_batch(BASE_MIGRATION)?;
        Ok(())
    }
}

impl StoragePort for SqliteStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.conn.lock().expect("sqlite connection mutex poisoned");
        let mut stmt = conn.prepare("SELECT value FROM kv_slots WHERE slot = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.conn.lock().expect("sqlite connection mutex poisoned");
        conn.execute(
            r#"
INSERT INTO kv_slots(slot, value, updated_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(slot) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
"#,
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let conn = self.conn.lock().expect("sqlite connection mutex poisoned");
        conn.execute("DELETE FROM kv_slots WHERE slot = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{SqliteStorage, StoragePort};

    #[test]
    fn slots_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/progress.db");
        {
            let store = SqliteStorage::open(&path).expect("open");
            store.save("slot", r#"{"a":"started"}"#).expect("save");
        }
        let reopened = SqliteStorage::open(&path).expect("reopen");
        assert_eq!(
            reopened.load("slot").expect("load").as_deref(),
            Some(r#"{"a":"started"}"#)
        );
    }

    #[test]
    fn save_overwrites_and_remove_clears() {
        let store = SqliteStorage::open_in_memory().expect("open");
        assert!(store.load("slot").expect("load").is_none());
        store.save("slot", "one").expect("save");
        store.save("slot", "two").expect("save");
        assert_eq!(store.load("slot").expect("load").as_deref(), Some("two"));
        store.remove("slot").expect("remove");
        assert!(store.load("slot").expect("load").is_none());
    }
}
