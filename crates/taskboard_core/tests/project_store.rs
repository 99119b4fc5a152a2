use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use taskboard_core::{Category, ProjectRecord, ProjectStore};
use uuid::Uuid;

fn counting_store() -> (ProjectStore, Rc<Cell<usize>>) {
    let store = ProjectStore::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    store.subscribe(move |_| counter.set(counter.get() + 1));
    (store, calls)
}

fn ids_in(projects: &[ProjectRecord], category: Category) -> Vec<Uuid> {
    projects
        .iter()
        .filter(|project| project.category == category)
        .map(|project| project.id)
        .collect()
}

#[test]
fn create_sequence_yields_unique_ids_and_matching_length() {
    let (store, calls) = counting_store();
    let ids: Vec<Uuid> = (0..25)
        .map(|n| store.create(format!("project {n}"), "some description", 2))
        .collect();

    assert_eq!(store.len(), 25);
    assert_eq!(calls.get(), 25);
    let unique: HashSet<Uuid> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn subscribers_receive_full_ordered_snapshot() {
    let store = ProjectStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |projects| {
        *sink.borrow_mut() = projects.iter().map(|p| p.title.clone()).collect();
    });

    store.create("one", "first item", 1);
    store.create("two", "second item", 1);
    store.create("three", "third item", 1);

    assert_eq!(*seen.borrow(), vec!["one", "two", "three"]);
}

#[test]
fn reassign_to_current_category_does_not_notify() {
    let (store, calls) = counting_store();
    let id = store.create("t", "description", 1);
    assert_eq!(calls.get(), 1);

    assert!(!store.reassign_category(id, Category::Active));
    assert_eq!(calls.get(), 1);
}

#[test]
fn reassign_unknown_id_is_silent_and_leaves_collection_untouched() {
    let (store, calls) = counting_store();
    store.create("t", "description", 1);
    let before = store.projects();

    assert!(!store.reassign_category(Uuid::new_v4(), Category::Finished));
    assert_eq!(store.projects(), before);
    assert_eq!(calls.get(), 1);
}

#[test]
fn reassign_moves_record_between_partitions_keeping_other_fields() {
    let store = ProjectStore::new();
    let last = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&last);
    store.subscribe(move |projects| *sink.borrow_mut() = projects.to_vec());

    let id = store.create("Build API", "Implement REST endpoints", 3);
    let original = store.get(id).unwrap();
    assert!(store.reassign_category(id, Category::Finished));

    let snapshot = last.borrow().clone();
    assert!(!ids_in(&snapshot, Category::Active).contains(&id));
    assert_eq!(ids_in(&snapshot, Category::Finished), vec![id]);

    let moved = snapshot.iter().find(|p| p.id == id).unwrap();
    assert_eq!(moved.title, original.title);
    assert_eq!(moved.description, original.description);
    assert_eq!(moved.people_count, original.people_count);
}

#[test]
fn repeated_reassign_notifies_once() {
    let (store, calls) = counting_store();
    let id = store.create("t", "description", 1);

    store.reassign_category(id, Category::Finished);
    store.reassign_category(id, Category::Finished);
    assert_eq!(calls.get(), 2);
}

#[test]
fn reassign_back_and_forth_keeps_position() {
    let store = ProjectStore::new();
    let first = store.create("first", "description", 1);
    let second = store.create("second", "description", 1);

    store.reassign_category(first, Category::Finished);
    store.reassign_category(first, Category::Active);

    let ids: Vec<Uuid> = store.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn snapshot_serializes_with_snake_case_wire_names() {
    let store = ProjectStore::new();
    let id = store.create("Build API", "Implement REST endpoints", 3);
    store.reassign_category(id, Category::Finished);

    let json = serde_json::to_value(store.projects()).unwrap();
    assert_eq!(json[0]["id"], id.to_string());
    assert_eq!(json[0]["people_count"], 3);
    assert_eq!(json[0]["category"], "finished");

    let decoded: Vec<ProjectRecord> = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, store.projects());
}
