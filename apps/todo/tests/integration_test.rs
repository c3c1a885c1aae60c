//! Integration tests for the to-do store
//!
//! These walk the store through the same sequence a user would on the to-do
//! screen, checking the list after each step.

use todo::{default_items, TodoId, TodoItem, TodoStore};

fn texts(store: &TodoStore) -> Vec<String> {
    store.list().iter().map(|t| t.text.clone()).collect()
}

#[test]
fn test_seeded_add_toggle_remove_flow() {
    let mut store = TodoStore::new();
    assert_eq!(store.count(), 3);
    let first_seed = store.list()[0].id;

    // Add
    store.add("Write tests");
    assert_eq!(store.count(), 4);
    let last = store.list().last().cloned();
    let Some(last) = last else {
        panic!("list should not be empty after add");
    };
    assert_eq!(last.text, "Write tests");
    assert!(!last.completed);

    // Toggle
    store.toggle(last.id);
    assert_eq!(store.get(last.id).map(|t| t.completed), Some(true));

    // Remove the first seed
    store.remove(first_seed);
    assert_eq!(store.count(), 3);
    assert_eq!(
        texts(&store),
        vec![
            "Understand Expo Router",
            "Master Safe Area Handling",
            "Write tests"
        ]
    );
}

#[test]
fn test_blank_adds_leave_list_identical() {
    let mut store = TodoStore::new();
    let before = store.list().to_vec();

    store.add("");
    store.add("   ");
    store.add("\t \n");

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut store = TodoStore::new();

    store.toggle(TodoId::new(1000));
    store.remove(TodoId::new(1000));

    assert_eq!(store.list(), default_items().as_slice());
}

#[test]
fn test_rapid_adds_get_distinct_ids() {
    let mut store = TodoStore::empty();

    for i in 0..1000 {
        store.add(format!("item {i}"));
    }

    let mut ids: Vec<u64> = store.list().iter().map(|t| t.id.get()).collect();
    assert_eq!(ids.len(), 1000);
    ids.dedup();
    assert_eq!(ids.len(), 1000, "ids must be pairwise distinct");
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_custom_seed_items() {
    let mut store = TodoStore::with_items([
        TodoItem::new(TodoId::new(40), "Answer").with_completed(true),
        TodoItem::new(TodoId::new(2), "Question"),
    ]);

    store.add("Follow-up");

    let ids: Vec<u64> = store.list().iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, vec![40, 2, 41]);
    assert_eq!(store.completed_count(), 1);
}

#[test]
fn test_state_isolation() {
    let mut store1 = TodoStore::empty();
    let mut store2 = TodoStore::empty();

    store1.add("one");
    store1.add("two");
    store2.add("three");

    assert_eq!(texts(&store1), vec!["one", "two"]);
    assert_eq!(texts(&store2), vec!["three"]);
    // Each store numbers its own items
    assert_eq!(store2.list()[0].id, TodoId::FIRST);
}
