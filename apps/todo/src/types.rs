//! Domain types for the to-do list.
//!
//! A to-do list is an ordered sequence of items. Items are appended at the
//! end, can have their completion flag flipped, and can be removed. Nothing
//! else about an item ever changes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a to-do item, unique within one store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The id handed out to the first item of an empty list
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` once the id space is used up
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing, already trimmed
    pub text: String,
    /// Whether the item is done
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Sets the completion flag (builder style, for seeding)
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// State of the to-do list
///
/// Holds the items in insertion order plus the id the next added item gets.
/// Fields are private so the uniqueness of ids holds from construction on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoState {
    items: Vec<TodoItem>,
    next_id: Option<TodoId>,
}

impl TodoState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(TodoId::FIRST),
        }
    }

    /// Creates a list pre-seeded with `items`
    ///
    /// Seed text is trimmed. Seed items that are blank after trimming, or
    /// whose id repeats an earlier seed item, are dropped with a warning. New
    /// ids start one past the largest seed id.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for mut item in items {
            let trimmed = item.text.trim();
            if trimmed.is_empty() {
                tracing::warn!(id = %item.id, "Dropping seed item with blank text");
                continue;
            }
            if !seen.insert(item.id) {
                tracing::warn!(id = %item.id, "Dropping seed item with duplicate id");
                continue;
            }
            if trimmed.len() != item.text.len() {
                item.text = trimmed.to_owned();
            }
            kept.push(item);
        }

        let next_id = kept
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(Some(TodoId::FIRST), TodoId::next);

        Self {
            items: kept,
            next_id,
        }
    }

    /// The items, in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The id the next added item will get, if any are left
    #[must_use]
    pub const fn next_id(&self) -> Option<TodoId> {
        self.next_id
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Appends an item with the next free id
    ///
    /// Returns the id used, or `None` if the id space is exhausted.
    pub(crate) fn push(&mut self, text: String) -> Option<TodoId> {
        let id = self.next_id?;
        self.items.push(TodoItem::new(id, text));
        self.next_id = id.next();
        Some(id)
    }

    pub(crate) fn get_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|t| t.id == id)
    }

    /// Removes the item with `id`, keeping the order of the rest
    pub(crate) fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.items.iter().position(|t| t.id == id)?;
        Some(self.items.remove(index))
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions a presentation layer can send to the to-do list
///
/// None of them can fail. Blank text and unknown ids are silently ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Append a new item with the given text (trimmed; blank text is ignored)
    Add {
        /// Raw text as typed
        text: String,
    },

    /// Flip the completion flag of an item
    Toggle {
        /// Item to toggle
        id: TodoId,
    },

    /// Remove an item
    Remove {
        /// Item to remove
        id: TodoId,
    },
}
