use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taskboard_core::{Project, ProjectStatus, ProjectStore};
use uuid::Uuid;

fn capture_listener(
    captured: Arc<Mutex<Vec<Vec<Project>>>>,
) -> Box<dyn FnMut(&[Project]) + Send> {
    Box::new(move |projects| {
        captured.lock().unwrap().push(projects.to_vec());
    })
}

#[test]
fn add_project_appends_one_active_project_and_notifies() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut store = ProjectStore::new();
    store.add_listener(capture_listener(Arc::clone(&captured)));

    let id = store.add_project("Build bridge", "Concrete structure", 3);

    assert_eq!(store.len(), 1);
    let snapshots = captured.lock().unwrap();
    assert_eq!(snapshots.len(), 1);
    let delivered = &snapshots[0];
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].id, id);
    assert_eq!(delivered[0].status, ProjectStatus::Active);
}

#[test]
fn every_registered_listener_sees_the_new_project() {
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    let mut store = ProjectStore::new();
    store.add_listener(capture_listener(Arc::clone(&first)));
    store.add_listener(capture_listener(Arc::clone(&second)));

    let id = store.add_project("t", "description", 2);

    for captured in [first, second] {
        let snapshots = captured.lock().unwrap();
        assert!(snapshots[0].iter().any(|project| project.id == id));
    }
}

#[test]
fn appended_projects_preserve_insertion_order() {
    let mut store = ProjectStore::new();
    let a = store.add_project("a", "first item", 1);
    let b = store.add_project("b", "second item", 2);
    let c = store.add_project("c", "third item", 3);

    let ids: Vec<_> = store.snapshot().iter().map(|project| project.id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn move_with_unknown_id_is_a_silent_no_op() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut store = ProjectStore::new();
    let id = store.add_project("t", "description", 1);
    let notified = Arc::clone(&counter);
    store.add_listener(Box::new(move |_projects| {
        notified.fetch_add(1, Ordering::SeqCst);
    }));

    store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].id, id);
    assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);
}

#[test]
fn repeated_move_to_current_status_never_notifies() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut store = ProjectStore::new();
    let id = store.add_project("t", "description", 1);
    let notified = Arc::clone(&counter);
    store.add_listener(Box::new(move |_projects| {
        notified.fetch_add(1, Ordering::SeqCst);
    }));

    store.move_project(id, ProjectStatus::Active);
    store.move_project(id, ProjectStatus::Active);

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(store.snapshot()[0].status, ProjectStatus::Active);
}

#[test]
fn move_to_opposite_status_flips_only_that_project() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut store = ProjectStore::new();
    let target = store.add_project("target", "moves around", 1);
    let bystander = store.add_project("bystander", "stays put", 2);
    store.add_listener(capture_listener(Arc::clone(&captured)));

    store.move_project(target, ProjectStatus::Finished);

    let snapshots = captured.lock().unwrap();
    assert_eq!(snapshots.len(), 1, "exactly one notification must fire");
    let delivered = &snapshots[0];
    let moved = delivered.iter().find(|p| p.id == target).unwrap();
    let untouched = delivered.iter().find(|p| p.id == bystander).unwrap();
    assert_eq!(moved.status, ProjectStatus::Finished);
    assert_eq!(untouched.status, ProjectStatus::Active);
}

#[test]
fn snapshot_is_a_copy_detached_from_store_state() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut store = ProjectStore::new();
    store.add_listener(capture_listener(Arc::clone(&captured)));
    store.add_project("t", "description", 1);

    // Mangling the delivered copy must not reach the store.
    captured.lock().unwrap()[0].clear();

    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot().len(), 1);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut store = ProjectStore::new();
    store.add_project("Build bridge", "Concrete structure", 3);

    let json = serde_json::to_value(store.snapshot()).unwrap();
    let entry = &json.as_array().unwrap()[0];
    assert_eq!(entry["title"], "Build bridge");
    assert_eq!(entry["people"], 3);
    assert_eq!(entry["status"], "active");
}
