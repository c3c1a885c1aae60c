//! # Pocket Core
//!
//! Core traits and types for pocket state stores.
//!
//! A store is a small, exclusively owned unit of mutable state. Every change
//! goes through a reducer, which keeps the mutation rules in one pure function
//! that can be tested without any presentation layer attached.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by one store
//! - **Action**: Every input the store accepts (user intent)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work described as data, executed by the runtime
//! - **Environment**: Injected dependencies (often `()` for pure stores)
//!
//! ## Execution Model
//!
//! Everything is synchronous. An action is reduced, its effects are drained,
//! and the call returns within the same turn. There is no background work,
//! so no locking is needed anywhere in the core.
//!
//! ## Example
//!
//! ```
//! use pocket_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Debug, Default)]
//! struct ClicksState {
//!     clicks: u32,
//! }
//!
//! enum ClicksAction {
//!     Click,
//! }
//!
//! struct ClicksReducer;
//!
//! impl Reducer for ClicksReducer {
//!     type State = ClicksState;
//!     type Action = ClicksAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut ClicksState,
//!         action: ClicksAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<ClicksAction>; 4]> {
//!         match action {
//!             ClicksAction::Click => state.clicks += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = ClicksState::default();
//! ClicksReducer.reduce(&mut state, ClicksAction::Click, &());
//! assert_eq!(state.clicks, 1);
//! ```

// Re-export commonly used types
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all mutation rules and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Decides whether the action applies (invalid input is a no-op)
        /// 2. Updates state in place
        /// 3. Returns effect descriptions for the runtime to drain
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work described as data
///
/// Effects are returned from reducers and executed by the store runtime
/// before `send` returns. They never outlive the call that produced them.
pub mod effect {
    /// Effect type - describes follow-up work for the runtime
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type effects can feed back into the reducer
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer within the same `send` call
        Dispatch(Action),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Returns `true` if running this effect can never dispatch an action
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Dispatch(_) => false,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
            }
        }

        /// Flattens the effect into the actions it dispatches, in order
        pub fn into_actions(self, out: &mut Vec<Action>) {
            match self {
                Effect::None => {},
                Effect::Dispatch(action) => out.push(action),
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.into_actions(out);
                    }
                },
            }
        }
    }
}
