//! Configuration management for the terminal front end.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::ConfigError;
use counter::CounterStore;
use serde::{Deserialize, Serialize};
use std::env;
use todo::{default_items, TodoItem, TodoStore};

/// Variable holding the counter's initial (and reset) value
pub const INITIAL_COUNT_VAR: &str = "TABS_INITIAL_COUNT";
/// Variable switching the sample to-do items on or off
pub const SEED_SAMPLES_VAR: &str = "TABS_SEED_SAMPLES";
/// Variable holding a JSON array of seed to-do items
pub const INITIAL_TODOS_VAR: &str = "TABS_INITIAL_TODOS";
/// Variable holding the log filter
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tabs=info,todo=info,counter=info,pocket_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Items the to-do store starts with
    pub initial_items: Vec<TodoItem>,
    /// Value the counter starts with and resets to
    pub initial_count: i64,
    /// Log filter directive (trace, debug, info, warn, error, or per-target)
    pub log_filter: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            initial_items: default_items(),
            initial_count: 0,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TabsConfig {
    /// Load configuration from the process environment
    ///
    /// - `TABS_INITIAL_COUNT`: integer, default 0
    /// - `TABS_SEED_SAMPLES`: `true`/`false`, default `true`
    /// - `TABS_INITIAL_TODOS`: JSON array of `{"id", "text", "completed"}`;
    ///   when set it replaces the samples
    /// - `RUST_LOG`: log filter
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to something unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to something unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_count = match lookup(INITIAL_COUNT_VAR) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                ConfigError::InvalidValue {
                    name: INITIAL_COUNT_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            None => 0,
        };

        let seed_samples = match lookup(SEED_SAMPLES_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                name: SEED_SAMPLES_VAR,
                value: raw.clone(),
                reason: "expected true/false".to_string(),
            })?,
            None => true,
        };

        let initial_items = match lookup(INITIAL_TODOS_VAR) {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| {
                ConfigError::InvalidSeedJson {
                    name: INITIAL_TODOS_VAR,
                    source,
                }
            })?,
            None if seed_samples => default_items(),
            None => Vec::new(),
        };

        let log_filter =
            lookup(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            initial_items,
            initial_count,
            log_filter,
        })
    }

    /// Build the to-do store this configuration describes
    #[must_use]
    pub fn todo_store(&self) -> TodoStore {
        TodoStore::with_items(self.initial_items.iter().cloned())
    }

    /// Build the counter store this configuration describes
    #[must_use]
    pub fn counter_store(&self) -> CounterStore {
        CounterStore::with_initial(self.initial_count)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
