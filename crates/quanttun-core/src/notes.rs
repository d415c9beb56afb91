//! Per-activity notes: save, list with parent resolution, delete.

use anyhow::Result;
use chrono::Utc;

use quanttun_store::models::{NoteRecord, SavedNote};
use quanttun_store::queries::notes::{self as notes_q, NoteKey};
use quanttun_store::queries::routes;
use quanttun_store::storage::Storage;

/// Save (overwrite) the note for a (route, activity) pair. Last write wins;
/// the write timestamp is recorded for ordering.
pub fn save_note(
    storage: &dyn Storage,
    route_id: &str,
    activity_id: u32,
    content: &str,
) -> Result<()> {
    let record = NoteRecord {
        content: content.to_owned(),
        saved_at: Utc::now(),
    };
    notes_q::save_note(storage, &NoteKey::new(route_id, activity_id), &record)
}

/// Load all notes, resolving each to its parent route and activity for
/// display titles. Notes whose parent cannot be resolved (orphans) and
/// blank notes are silently skipped. Ordered newest-first by save time.
pub fn load_notes(storage: &dyn Storage) -> Result<Vec<SavedNote>> {
    let all_routes = routes::list_routes(storage)?;
    let mut notes = Vec::new();

    for key in notes_q::note_keys(storage)? {
        let Some(record) = notes_q::get_note(storage, &key)? else {
            continue;
        };
        if record.content.trim().is_empty() {
            continue;
        }
        let Some(route) = all_routes.iter().find(|r| r.id == key.route_id) else {
            continue;
        };
        let Some(activity) = route
            .study_plan
            .activities
            .iter()
            .find(|a| a.id == key.activity_id)
        else {
            continue;
        };

        notes.push(SavedNote {
            route_id: key.route_id.clone(),
            activity_id: key.activity_id,
            route_title: route.title.clone(),
            activity_title: activity.title.clone(),
            content: record.content,
            saved_at: record.saved_at,
        });
    }

    notes.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
    Ok(notes)
}

/// Case-insensitive substring filter over route title, activity title, and
/// content. A blank term keeps everything.
pub fn filter_notes(notes: &[SavedNote], term: &str) -> Vec<SavedNote> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|n| {
            n.route_title.to_lowercase().contains(&term)
                || n.activity_title.to_lowercase().contains(&term)
                || n.content.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Remove a single note. No cascading effects.
pub fn delete_note(storage: &dyn Storage, route_id: &str, activity_id: u32) -> Result<()> {
    notes_q::delete_note(storage, &NoteKey::new(route_id, activity_id))
}
