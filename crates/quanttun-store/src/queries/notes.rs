//! Query functions for per-activity notes.
//!
//! Each note lives under its own composite key, independent of the route
//! collection. Deleting a note has no cascading effects.

use std::fmt;

use anyhow::{Context, Result};

use crate::models::NoteRecord;
use crate::storage::Storage;

/// Prefix shared by all note keys.
pub const NOTE_KEY_PREFIX: &str = "notes_";

/// Composite (route, activity) note key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteKey {
    pub route_id: String,
    pub activity_id: u32,
}

impl NoteKey {
    pub fn new(route_id: impl Into<String>, activity_id: u32) -> Self {
        Self {
            route_id: route_id.into(),
            activity_id,
        }
    }

    /// Parse a storage key of the form `notes_{routeId}_{activityId}`.
    ///
    /// The activity id is the segment after the last underscore, so route
    /// ids containing underscores still parse.
    pub fn parse(key: &str) -> Option<Self> {
        let rest = key.strip_prefix(NOTE_KEY_PREFIX)?;
        let (route_id, activity_part) = rest.rsplit_once('_')?;
        if route_id.is_empty() {
            return None;
        }
        let activity_id = activity_part.parse().ok()?;
        Some(Self::new(route_id, activity_id))
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NOTE_KEY_PREFIX}{}_{}", self.route_id, self.activity_id)
    }
}

/// Write a note record, replacing any previous value (last write wins).
pub fn save_note(storage: &dyn Storage, key: &NoteKey, record: &NoteRecord) -> Result<()> {
    let raw = serde_json::to_string(record).context("failed to serialize note")?;
    storage
        .set(&key.to_string(), &raw)
        .with_context(|| format!("failed to write note {key}"))
}

/// Fetch a note record by key.
pub fn get_note(storage: &dyn Storage, key: &NoteKey) -> Result<Option<NoteRecord>> {
    match storage
        .get(&key.to_string())
        .with_context(|| format!("failed to read note {key}"))?
    {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .with_context(|| format!("note {key} is not valid JSON")),
        None => Ok(None),
    }
}

/// Remove a single note by key.
pub fn delete_note(storage: &dyn Storage, key: &NoteKey) -> Result<()> {
    storage
        .remove(&key.to_string())
        .with_context(|| format!("failed to remove note {key}"))
}

/// Scan the store for all note keys.
pub fn note_keys(storage: &dyn Storage) -> Result<Vec<NoteKey>> {
    let keys = storage.keys().context("failed to list storage keys")?;
    Ok(keys.iter().filter_map(|k| NoteKey::parse(k)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::Utc;

    fn record(content: &str) -> NoteRecord {
        NoteRecord {
            content: content.to_string(),
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn key_formats_and_parses() {
        let key = NoteKey::new("1700000000000", 3);
        assert_eq!(key.to_string(), "notes_1700000000000_3");
        assert_eq!(NoteKey::parse("notes_1700000000000_3"), Some(key));
    }

    #[test]
    fn parse_rejects_foreign_keys() {
        assert_eq!(NoteKey::parse("study_routes"), None);
        assert_eq!(NoteKey::parse("notes_"), None);
        assert_eq!(NoteKey::parse("notes_abc"), None);
        assert_eq!(NoteKey::parse("notes_1_x"), None);
    }

    #[test]
    fn save_is_last_write_wins() {
        let storage = MemoryStorage::new();
        let key = NoteKey::new("1", 1);
        save_note(&storage, &key, &record("first")).unwrap();
        save_note(&storage, &key, &record("second")).unwrap();
        let loaded = get_note(&storage, &key).unwrap().unwrap();
        assert_eq!(loaded.content, "second");
    }

    #[test]
    fn delete_removes_only_that_key() {
        let storage = MemoryStorage::new();
        save_note(&storage, &NoteKey::new("1", 1), &record("a")).unwrap();
        save_note(&storage, &NoteKey::new("1", 2), &record("b")).unwrap();
        delete_note(&storage, &NoteKey::new("1", 1)).unwrap();
        assert!(get_note(&storage, &NoteKey::new("1", 1)).unwrap().is_none());
        assert!(get_note(&storage, &NoteKey::new("1", 2)).unwrap().is_some());
    }

    #[test]
    fn note_keys_skips_other_entries() {
        let storage = MemoryStorage::new();
        storage.set("study_routes", "[]").unwrap();
        save_note(&storage, &NoteKey::new("7", 2), &record("x")).unwrap();
        let keys = note_keys(&storage).unwrap();
        assert_eq!(keys, vec![NoteKey::new("7", 2)]);
    }
}
