//! Error types for the terminal front end
//!
//! The stores themselves never fail. Errors only exist at the edges: reading
//! configuration and parsing what the user typed.

use thiserror::Error;

/// Errors that can occur while loading [`TabsConfig`](crate::config::TabsConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        /// Environment variable name
        name: &'static str,
        /// The raw value found
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The seed item list was not a JSON array of to-do items
    #[error("Invalid JSON in {name}: {source}")]
    InvalidSeedJson {
        /// Environment variable name
        name: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while parsing a command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed
    #[error("Empty command (type `help` for a list)")]
    Empty,

    /// The first word is not a known command
    #[error("Unknown command `{0}` (type `help` for a list)")]
    Unknown(String),

    /// A command that needs an argument did not get one
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        /// The command as typed
        command: String,
        /// What was expected
        expected: &'static str,
    },

    /// An id argument was not a non-negative integer
    #[error("`{0}` is not a todo id")]
    InvalidId(String),
}
