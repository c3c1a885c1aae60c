//! # Pocket Testing
//!
//! Testing utilities and helpers for pocket state stores.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder for reducers
//! - Assertion helpers for effects
//! - proptest strategies for user-entered text
//! - A one-call tracing setup for tests that want log output
//!
//! ## Example
//!
//! ```ignore
//! use pocket_testing::{assertions, ReducerTest};
//!
//! #[test]
//! fn increments() {
//!     ReducerTest::new(CounterReducer::new())
//!         .with_env(())
//!         .given_state(CounterState::new(0))
//!         .when_action(CounterAction::Increment)
//!         .then_state(|state| assert_eq!(state.count, 1))
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```


/// Property-based testing utilities
///
/// Strategies for the text a user types into an input box. Stores treat text
/// that is empty after trimming as "nothing entered", so tests need both
/// kinds.
pub mod properties {
    use proptest::prelude::*;

    /// Text that still has at least one visible character after trimming
    ///
    /// May carry leading and trailing whitespace.
    pub fn non_blank_text() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 .,!?-]{0,30}", "[ \t\n]{0,3}").prop_map(
            |(lead, body, trail)| format!("{lead}{body}{trail}"),
        )
    }

    /// Text that is empty after trimming (including the empty string)
    pub fn blank_text() -> impl Strategy<Value = String> {
        "[ \t\r\n]{0,8}"
    }

    /// Either kind of text, roughly half of each
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![non_blank_text(), blank_text()]
    }
}

/// Tracing setup for tests
pub mod helpers {
    /// Install a test-friendly `fmt` subscriber honoring `RUST_LOG`
    ///
    /// Safe to call from many tests; only the first call installs anything.
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_test_tracing;
pub use reducer_test::{assertions, ReducerTest};

#[cfg(test)]
mod tests {
    use super::properties::{any_text, blank_text, non_blank_text};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_blank_text_survives_trim(text in non_blank_text()) {
            prop_assert!(!text.trim().is_empty());
        }

        #[test]
        fn blank_text_trims_to_nothing(text in blank_text()) {
            prop_assert!(text.trim().is_empty());
        }

        #[test]
        fn any_text_stays_short(text in any_text()) {
            prop_assert!(text.len() <= 64);
        }
    }

    #[test]
    fn init_test_tracing_is_idempotent() {
        super::init_test_tracing();
        super::init_test_tracing();
    }
}
