//! End-to-end flow against file-backed storage: login, store a route,
//! study, complete, take notes. Each step reopens the storage file to make
//! sure every mutation actually reached disk.

use tempfile::TempDir;

use quanttun_core::notes::{load_notes, save_note};
use quanttun_core::progress::{CompletionOutcome, complete_activity};
use quanttun_core::session::start_study;
use quanttun_store::config::StoreConfig;
use quanttun_store::queries::{routes, users};
use quanttun_store::storage::JsonFileStorage;
use quanttun_test_utils::{sample_route, sample_user};

fn open(dir: &TempDir) -> JsonFileStorage {
    JsonFileStorage::open(&StoreConfig::new(dir.path()))
}

#[test]
fn full_lifecycle_persists_across_reopens() {
    let dir = TempDir::new().unwrap();

    // Login and create a route.
    {
        let storage = open(&dir);
        users::save_user(&storage, &sample_user()).unwrap();
        routes::append_route(&storage, &sample_route("1700000000000", "Rust")).unwrap();
    }

    // Study then complete the first activity.
    {
        let storage = open(&dir);
        start_study(&storage, "1700000000000", 1).unwrap();
        let outcome = complete_activity(&storage, "1700000000000", 1).unwrap();
        // Fácil activity, session just started so no bonus.
        match outcome {
            CompletionOutcome::Completed { points, route } => {
                assert_eq!(points, 5);
                assert_eq!(route.completed_activities, 1);
            }
            CompletionOutcome::AlreadyCompleted => panic!("first completion should count"),
        }
    }

    // Take a note on the second activity.
    {
        let storage = open(&dir);
        save_note(&storage, "1700000000000", 2, "revisar borrows amanhã").unwrap();
    }

    // Everything visible from a fresh handle.
    {
        let storage = open(&dir);

        let user = users::get_user(&storage).unwrap().unwrap();
        assert_eq!(user.points, 5);

        let route = routes::get_route(&storage, "1700000000000").unwrap().unwrap();
        assert_eq!(route.completed_activities, 1);
        assert!(route.study_plan.activities[0].completed);
        assert!(!route.study_plan.activities[1].completed);

        let notes = load_notes(&storage).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].content, "revisar borrows amanhã");
        assert_eq!(notes[0].activity_id, 2);
    }
}

#[test]
fn logout_keeps_routes_and_notes() {
    let dir = TempDir::new().unwrap();
    let storage = open(&dir);

    users::save_user(&storage, &sample_user()).unwrap();
    routes::append_route(&storage, &sample_route("1700000000001", "Biologia")).unwrap();
    save_note(&storage, "1700000000001", 1, "célula eucarionte").unwrap();

    users::clear_user(&storage).unwrap();

    assert!(users::get_user(&storage).unwrap().is_none());
    assert_eq!(routes::list_routes(&storage).unwrap().len(), 1);
    assert_eq!(load_notes(&storage).unwrap().len(), 1);
}

#[test]
fn completion_without_user_still_updates_route() {
    let dir = TempDir::new().unwrap();
    let storage = open(&dir);

    routes::append_route(&storage, &sample_route("1700000000002", "Física")).unwrap();

    let outcome = complete_activity(&storage, "1700000000002", 2).unwrap();
    assert!(matches!(outcome, CompletionOutcome::Completed { points: 10, .. }));

    let route = routes::get_route(&storage, "1700000000002").unwrap().unwrap();
    assert_eq!(route.completed_activities, 1);
    assert!(users::get_user(&storage).unwrap().is_none());
}
