//! # Pocket Runtime
//!
//! Runtime implementation for pocket state stores.
//!
//! This crate provides the [`Store`] that owns a reducer's state and drains
//! the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment; the only writer of its state
//! - **Effect Drain**: Feeds dispatched actions back into the reducer, in order
//! - **`StoreConfig`**: Bounds the feedback loop so a misbehaving reducer cannot spin forever
//!
//! ## Execution Model
//!
//! `send` is synchronous. The action and every follow-up action produced by its
//! effects are reduced before `send` returns, so callers can re-render straight
//! from [`Store::state`] afterwards. Exclusive access (`&mut self`) is what
//! guarantees a single writer; there are no locks.
//!
//! ## Example
//!
//! ```ignore
//! use pocket_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use pocket_core::reducer::Reducer;
use std::collections::VecDeque;

/// Configuration for a [`Store`]
///
/// # Example
///
/// ```
/// use pocket_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_actions_per_send(16);
/// assert_eq!(config.max_actions_per_send, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Upper bound on actions reduced by a single `send`, including the
    /// initial action and every follow-up dispatched by effects
    pub max_actions_per_send: usize,
}

impl StoreConfig {
    /// Default bound on actions reduced per `send`
    pub const DEFAULT_MAX_ACTIONS_PER_SEND: usize = 1024;

    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_actions_per_send: usize) -> Self {
        Self {
            max_actions_per_send,
        }
    }

    /// Set the per-send action budget
    ///
    /// A budget of zero is raised to one: the initial action is always reduced.
    #[must_use]
    pub const fn with_max_actions_per_send(mut self, max: usize) -> Self {
        self.max_actions_per_send = if max == 0 { 1 } else { max };
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ACTIONS_PER_SEND)
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Reducer, StoreConfig, VecDeque};
    use std::marker::PhantomData;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned exclusively, never shared)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect draining (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(CounterState::default(), CounterReducer::new(), ());
    /// store.send(CounterAction::Increment);
    /// assert_eq!(store.state(|s| s.count), 1);
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// Reduces the action, then drains its effects: every action an effect
        /// dispatches is reduced too, first-in first-out, before this call
        /// returns. Returns the number of actions reduced.
        ///
        /// Once [`StoreConfig::max_actions_per_send`] actions have been reduced,
        /// whatever is still queued is dropped and logged. `send` itself never
        /// fails.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> usize {
            let budget = self.config.max_actions_per_send.max(1);
            let mut queue = VecDeque::from([action]);
            let mut reduced = 0_usize;

            while let Some(action) = queue.pop_front() {
                if reduced == budget {
                    let dropped = queue.len() + 1;
                    tracing::warn!(
                        budget,
                        dropped,
                        "Action budget exhausted, dropping queued follow-up actions"
                    );
                    metrics::counter!("store.actions.dropped").increment(dropped as u64);
                    break;
                }

                metrics::counter!("store.actions.total").increment(1);

                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                    metrics::histogram!("store.reducer.duration_seconds")
                        .record(start.elapsed().as_secs_f64());

                    effects
                };
                reduced += 1;

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                let mut follow_ups = Vec::new();
                for effect in effects {
                    effect.into_actions(&mut follow_ups);
                }
                queue.extend(follow_ups);
            }

            tracing::debug!(reduced, "Action processing completed");
            reduced
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.count);
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        ///
        /// The borrow is shared, so nothing can mutate the store while the
        /// caller holds it.
        #[must_use]
        pub const fn snapshot(&self) -> &S {
            &self.state
        }

        /// The environment this store was built with
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// The configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> StoreConfig {
            self.config
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("config", &self.config)
                .finish_non_exhaustive()
        }
    }
}

// Re-export for convenience
pub use store::Store;
