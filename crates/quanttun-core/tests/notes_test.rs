//! Notes listing tests: resolution, ordering, orphans, filtering.

use chrono::{TimeDelta, Utc};

use quanttun_core::notes::{delete_note, filter_notes, load_notes, save_note};
use quanttun_store::models::NoteRecord;
use quanttun_store::queries::notes::{self as notes_q, NoteKey};
use quanttun_test_utils::{sample_route, seeded_storage};

#[test]
fn save_then_load_resolves_titles() {
    let storage = seeded_storage(&[sample_route("10", "Rust")]);
    save_note(&storage, "10", 1, "ownership é move por padrão").unwrap();

    let notes = load_notes(&storage).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].route_title, "Plano de Estudos: Rust");
    assert_eq!(notes[0].activity_title, "Fundamentos de Rust");
    assert_eq!(notes[0].content, "ownership é move por padrão");
}

#[test]
fn last_write_wins_per_key() {
    let storage = seeded_storage(&[sample_route("10", "Rust")]);
    save_note(&storage, "10", 1, "primeira versão").unwrap();
    save_note(&storage, "10", 1, "versão final").unwrap();

    let notes = load_notes(&storage).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "versão final");
}

#[test]
fn ordering_is_newest_first_across_days() {
    let storage = seeded_storage(&[sample_route("10", "Rust")]);
    let now = Utc::now();

    // Written out of order, with multi-day gaps that would defeat a
    // display-string sort.
    for (activity_id, age_days, content) in
        [(1, 9, "mais antiga"), (3, 0, "mais recente"), (2, 2, "no meio")]
    {
        notes_q::save_note(
            &storage,
            &NoteKey::new("10", activity_id),
            &NoteRecord {
                content: content.to_string(),
                saved_at: now - TimeDelta::days(age_days),
            },
        )
        .unwrap();
    }

    let notes = load_notes(&storage).unwrap();
    let contents: Vec<&str> = notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, vec!["mais recente", "no meio", "mais antiga"]);
}

#[test]
fn orphaned_and_blank_notes_are_skipped() {
    let storage = seeded_storage(&[sample_route("10", "Rust")]);

    save_note(&storage, "10", 1, "válida").unwrap();
    // Unknown route.
    save_note(&storage, "99", 1, "rota órfã").unwrap();
    // Known route, unknown activity.
    save_note(&storage, "10", 42, "atividade órfã").unwrap();
    // Blank content.
    save_note(&storage, "10", 2, "   ").unwrap();

    let notes = load_notes(&storage).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "válida");
}

#[test]
fn delete_removes_exactly_one_key() {
    let storage = seeded_storage(&[sample_route("10", "Rust")]);
    save_note(&storage, "10", 1, "a").unwrap();
    save_note(&storage, "10", 2, "b").unwrap();

    delete_note(&storage, "10", 1).unwrap();

    let notes = load_notes(&storage).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].activity_id, 2);
}

#[test]
fn filter_matches_any_field_case_insensitively() {
    let storage = seeded_storage(&[sample_route("10", "Rust")]);
    save_note(&storage, "10", 1, "anotação sobre ownership").unwrap();
    save_note(&storage, "10", 2, "lista de exercícios").unwrap();

    let notes = load_notes(&storage).unwrap();

    let by_content = filter_notes(&notes, "OWNERSHIP");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].activity_id, 1);

    let by_activity_title = filter_notes(&notes, "fundamentos");
    assert_eq!(by_activity_title.len(), 1);

    let by_route_title = filter_notes(&notes, "plano de estudos");
    assert_eq!(by_route_title.len(), 2);

    assert_eq!(filter_notes(&notes, "  ").len(), 2);
    assert!(filter_notes(&notes, "inexistente").is_empty());
}
