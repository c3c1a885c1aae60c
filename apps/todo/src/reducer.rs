//! Reducer logic for the to-do list.
//!
//! Every action either applies or is a silent no-op. Blank text and unknown
//! ids are not errors here, and nothing is reported back to the caller.

use crate::types::{TodoAction, TodoState};
use pocket_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Reducer for the to-do list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    tracing::trace!("Ignoring blank todo text");
                    return SmallVec::new();
                }

                match state.push(trimmed.to_owned()) {
                    Some(id) => tracing::debug!(%id, "Todo added"),
                    None => tracing::warn!("Todo id space exhausted, ignoring add"),
                }
            },

            TodoAction::Toggle { id } => {
                if let Some(todo) = state.get_mut(id) {
                    todo.completed = !todo.completed;
                    tracing::debug!(%id, completed = todo.completed, "Todo toggled");
                } else {
                    tracing::trace!(%id, "Toggle for unknown todo ignored");
                }
            },

            TodoAction::Remove { id } => {
                if state.remove(id).is_some() {
                    tracing::debug!(%id, "Todo removed");
                } else {
                    tracing::trace!(%id, "Remove for unknown todo ignored");
                }
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TodoId, TodoItem};
    use pocket_testing::{assertions, ReducerTest};

    fn seeded() -> TodoState {
        TodoState::with_items([
            TodoItem::new(TodoId::new(1), "Buy milk"),
            TodoItem::new(TodoId::new(2), "Walk dog").with_completed(true),
            TodoItem::new(TodoId::new(3), "Call mom"),
        ])
    }

    #[test]
    fn test_add_todo_success() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add {
                text: "  Buy milk \n".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                let todo = &state.items()[0];
                assert_eq!(todo.id, TodoId::FIRST);
                assert_eq!(todo.text, "Buy milk");
                assert!(!todo.completed);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        for text in ["", "   ", "\t\n"] {
            ReducerTest::new(TodoReducer::new())
                .with_env(())
                .given_state(seeded())
                .when_action(TodoAction::Add {
                    text: text.to_string(),
                })
                .then_state(|state| {
                    assert_eq!(*state, seeded());
                })
                .then_effects(assertions::assert_no_effects)
                .run();
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Add { text: "a".to_string() })
            .when_action(TodoAction::Add { text: "b".to_string() })
            .then_state(|state| {
                let texts: Vec<_> = state.items().iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["Buy milk", "Walk dog", "Call mom", "a", "b"]);
                assert_eq!(state.items()[3].id, TodoId::new(4));
                assert_eq!(state.items()[4].id, TodoId::new(5));
            })
            .run();
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(TodoState::new())
            .when_action(TodoAction::Add { text: "first".to_string() })
            .when_action(TodoAction::Remove { id: TodoId::FIRST })
            .when_action(TodoAction::Add { text: "second".to_string() })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.items()[0].id, TodoId::new(2));
            })
            .run();
    }

    #[test]
    fn test_add_with_exhausted_ids_is_noop() {
        let full = TodoState::with_items([TodoItem::new(TodoId::new(u64::MAX), "last")]);

        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(full.clone())
            .when_action(TodoAction::Add { text: "one more".to_string() })
            .then_state(move |state| {
                assert_eq!(*state, full);
            })
            .run();
    }

    #[test]
    fn test_toggle_flips_only_target() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Toggle { id: TodoId::new(1) })
            .then_state(|state| {
                let flags: Vec<_> = state.items().iter().map(|t| t.completed).collect();
                assert_eq!(flags, vec![true, true, false]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Toggle { id: TodoId::new(2) })
            .when_action(TodoAction::Toggle { id: TodoId::new(2) })
            .then_state(|state| {
                assert_eq!(*state, seeded());
            })
            .run();
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Toggle { id: TodoId::new(99) })
            .then_state(|state| {
                assert_eq!(*state, seeded());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_preserves_order() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Remove { id: TodoId::new(2) })
            .then_state(|state| {
                let ids: Vec<_> = state.items().iter().map(|t| t.id.get()).collect();
                assert_eq!(ids, vec![1, 3]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_twice_second_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Remove { id: TodoId::new(1) })
            .when_action(TodoAction::Remove { id: TodoId::new(1) })
            .then_state(|state| {
                assert_eq!(state.count(), 2);
                assert!(!state.contains(TodoId::new(1)));
            })
            .run();
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(())
            .given_state(seeded())
            .when_action(TodoAction::Remove { id: TodoId::new(404) })
            .then_state(|state| {
                assert_eq!(*state, seeded());
            })
            .run();
    }
}
