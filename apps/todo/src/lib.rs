//! Ordered to-do list store.
//!
//! The list is an ordered sequence of items, each with a unique id, its text,
//! and a completion flag. It supports three mutations:
//!
//! - add an item (blank text is ignored)
//! - toggle an item's completion flag
//! - remove an item
//!
//! None of them can fail: invalid input is a silent no-op. Confirming a
//! deletion with the user belongs to whoever calls [`TodoStore::remove`].
//!
//! # Quick Start
//!
//! ```
//! use todo::{TodoId, TodoStore};
//!
//! let mut store = TodoStore::new(); // three sample items
//! store.add("Write tests");
//!
//! let last = store.list().last().map(|t| t.id).unwrap_or(TodoId::FIRST);
//! store.toggle(last);
//! store.remove(TodoId::new(1));
//!
//! assert_eq!(store.count(), 3);
//! assert_eq!(store.completed_count(), 1);
//! ```

pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use reducer::TodoReducer;
pub use store::{default_items, TodoStore};
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
