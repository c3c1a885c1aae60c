//! # Counter
//!
//! A single integer under three operations: increment, decrement, reset.
//!
//! ## Architecture
//!
//! The Counter is a **pure state machine** with NO side effects:
//! - All effects are `Effect::None`
//! - State changes are synchronous and deterministic
//! - `reset` returns to the value the counter was created with, which is
//!   captured once and never changes
//!
//! ## Example
//!
//! ```
//! use counter::CounterStore;
//!
//! let mut counter = CounterStore::with_initial(5);
//! counter.increment();
//! counter.increment();
//! counter.increment();
//! assert_eq!(counter.value(), 8);
//!
//! counter.reset();
//! assert_eq!(counter.value(), 5);
//! ```

use pocket_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
use pocket_runtime::Store;
use serde::{Deserialize, Serialize};

/// Counter state
///
/// `initial` is the construction-time seed that `Reset` restores. It is
/// private: once a counter exists, nothing can move its reset point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count value
    pub count: i64,
    initial: i64,
}

impl CounterState {
    /// Create a counter starting (and resetting) at `initial`
    #[must_use]
    pub const fn new(initial: i64) -> Self {
        Self {
            count: initial,
            initial,
        }
    }

    /// The value `Reset` restores
    #[must_use]
    pub const fn initial(&self) -> i64 {
        self.initial
    }
}

/// Counter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterAction {
    /// Increment the counter by 1
    Increment,
    /// Decrement the counter by 1
    Decrement,
    /// Restore the construction-time value
    Reset,
}

/// Counter reducer
///
/// Increments and decrements saturate at the `i64` bounds rather than
/// overflowing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.count = state.count.saturating_add(1);
            },
            CounterAction::Decrement => {
                state.count = state.count.saturating_sub(1);
            },
            CounterAction::Reset => {
                state.count = state.initial;
            },
        }
        tracing::trace!(?action, count = state.count, "Counter updated");

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}

/// An exclusively owned counter
///
/// No operation can fail.
pub struct CounterStore {
    store: Store<CounterState, CounterAction, (), CounterReducer>,
}

impl CounterStore {
    /// Create a counter starting at 0
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(0)
    }

    /// Create a counter starting at `initial`; `reset` returns here
    #[must_use]
    pub fn with_initial(initial: i64) -> Self {
        tracing::debug!(initial, "Creating counter store");
        Self {
            store: Store::new(CounterState::new(initial), CounterReducer::new(), ()),
        }
    }

    /// value += 1
    pub fn increment(&mut self) {
        self.store.send(CounterAction::Increment);
    }

    /// value -= 1 (no floor)
    pub fn decrement(&mut self) {
        self.store.send(CounterAction::Decrement);
    }

    /// value := the construction-time initial value
    pub fn reset(&mut self) {
        self.store.send(CounterAction::Reset);
    }

    /// Sends a raw action, for callers that already speak in actions
    pub fn send(&mut self, action: CounterAction) {
        self.store.send(action);
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> i64 {
        self.store.state(|s| s.count)
    }

    /// The value `reset` restores
    #[must_use]
    pub fn initial(&self) -> i64 {
        self.store.state(CounterState::initial)
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CounterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterStore")
            .field("value", &self.value())
            .field("initial", &self.initial())
            .finish()
    }
}
