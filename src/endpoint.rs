use tracing::warn;

use crate::storage::{StoragePort, ENDPOINT_SLOT};

/// Picks the scoring service address: explicit value, then persisted override, then default.
///
/// Blank candidates are skipped and trailing slashes are stripped from the winner.
pub fn resolve_endpoint(explicit: Option<&str>, persisted: Option<&str>, default: &str) -> String {
    [explicit, persisted, Some(default)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_string()
}

pub fn load_override(storage: &dyn StoragePort) -> Option<String> {
    match storage.load(ENDPOINT_SLOT) {
        Ok(value) => value.filter(|v| !v.trim().is_empty()),
        Err(err) => {
            warn!("ignoring unreadable endpoint override: {err}");
            None
        }
    }
}

pub fn save_override(storage: &dyn StoragePort, url: &str) -> crate::storage::StorageResult<String> {
    let normalized = resolve_endpoint(Some(url), None, "");
    storage.save(ENDPOINT_SLOT, &normalized)?;
    Ok(normalized)
}

pub fn clear_override(storage: &dyn StoragePort) -> crate::storage::StorageResult<()> {
    storage.remove(ENDPOINT_SLOT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn follows_fallback_order() {
        assert_eq!(
            resolve_endpoint(Some("http://a/"), Some("http://b"), "http://c"),
            "http://a"
        );
        assert_eq!(resolve_endpoint(None, Some("http://b//"), "http://c"), "http://b");
        assert_eq!(resolve_endpoint(Some("  "), None, "http://c/"), "http://c");
    }

    #[test]
    fn override_round_trips_through_storage() {
        let storage = MemoryStorage::new();
        assert!(load_override(&storage).is_none());
        let saved = save_override(&storage, " https://scores.example.org/ ").expect("save");
        assert_eq!(saved, "https://scores.example.org");
        assert_eq!(load_override(&storage).as_deref(), Some("https://scores.example.org"));
        clear_override(&storage).expect("clear");
        assert!(load_override(&storage).is_none());
    }
}
