//! Terminal front end for the to-do and counter stores.
//!
//! Stands in for a two-tab screen: a home tab with a counter and a to-do tab
//! with a list. It holds one store of each kind, forwards user intent as
//! store calls, and re-renders from `list()` / `value()` after every call.
//!
//! The stores know nothing about this crate. Everything here (parsing,
//! confirmation before delete, rendering, configuration) is presentation.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod shell;

// Re-export commonly used types
pub use command::Command;
pub use config::TabsConfig;
pub use error::{CommandError, ConfigError};
pub use shell::{Reply, Shell};
