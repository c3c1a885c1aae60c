//! `TodoStore`: the call interface a presentation layer uses.
//!
//! Wraps a runtime [`Store`] so callers deal in `add`/`toggle`/`remove`/`list`
//! instead of actions. Each store owns its list; create as many as needed.

use crate::reducer::TodoReducer;
use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use pocket_runtime::Store;

/// The sample items a fresh store starts with
#[must_use]
pub fn default_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new(TodoId::new(1), "Learn React Native with TypeScript").with_completed(true),
        TodoItem::new(TodoId::new(2), "Understand Expo Router"),
        TodoItem::new(TodoId::new(3), "Master Safe Area Handling"),
    ]
}

/// An ordered, exclusively owned to-do list
///
/// No operation returns an error. Adding blank text, or toggling or removing
/// an id that is not in the list, leaves the list untouched. Callers must not
/// rely on these being reported; they are not.
pub struct TodoStore {
    store: Store<TodoState, TodoAction, (), TodoReducer>,
}

impl TodoStore {
    /// Creates a store seeded with [`default_items`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(default_items())
    }

    /// Creates a store with no items
    #[must_use]
    pub fn empty() -> Self {
        Self::from_state(TodoState::new())
    }

    /// Creates a store seeded with `items`
    ///
    /// See [`TodoState::with_items`] for how seed items are normalized.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        Self::from_state(TodoState::with_items(items))
    }

    fn from_state(state: TodoState) -> Self {
        tracing::debug!(items = state.count(), "Creating todo store");
        Self {
            store: Store::new(state, TodoReducer::new(), ()),
        }
    }

    /// Appends an item with `text` trimmed; blank text is ignored
    pub fn add(&mut self, text: impl Into<String>) {
        self.send(TodoAction::Add { text: text.into() });
    }

    /// Flips the completion flag of `id`, if present
    pub fn toggle(&mut self, id: TodoId) {
        self.send(TodoAction::Toggle { id });
    }

    /// Removes `id`, if present, without asking for confirmation
    pub fn remove(&mut self, id: TodoId) {
        self.send(TodoAction::Remove { id });
    }

    /// Sends a raw action, for callers that already speak in actions
    pub fn send(&mut self, action: TodoAction) {
        self.store.send(action);
    }

    /// The items, in insertion order
    ///
    /// The slice borrows the store immutably, so the list cannot change while
    /// it is held.
    #[must_use]
    pub fn list(&self) -> &[TodoItem] {
        self.store.snapshot().items()
    }

    /// The full state, for read-only queries
    #[must_use]
    pub fn state(&self) -> &TodoState {
        self.store.snapshot()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.state().get(id)
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.state().count()
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state().completed_count()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("items", &self.list())
            .finish()
    }
}
