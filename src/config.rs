//! Runtime configuration read from the environment.
//!
//! | Variable                | Meaning                                   | Default  |
//! |-------------------------|-------------------------------------------|----------|
//! | `ORDER_HISTORY_BUFFER`  | request channel capacity of each service  | `32`     |
//! | `ORDER_HISTORY_ORDERS`  | JSON document seeding the order service   | built-in |
//! | `ORDER_HISTORY_ITEMS`   | JSON document seeding the item service    | built-in |
//! | `ORDER_HISTORY_OUTPUT`  | `text` or `json`                          | `text`   |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const BUFFER_VAR: &str = "ORDER_HISTORY_BUFFER";
pub const ORDERS_VAR: &str = "ORDER_HISTORY_ORDERS";
pub const ITEMS_VAR: &str = "ORDER_HISTORY_ITEMS";
pub const OUTPUT_VAR: &str = "ORDER_HISTORY_OUTPUT";

const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("ORDER_HISTORY_BUFFER must be a positive integer, got {0:?}")]
    InvalidBufferSize(String),

    #[error("ORDER_HISTORY_OUTPUT must be `text` or `json`, got {0:?}")]
    UnknownOutputFormat(String),
}

/// How the binary prints the loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryConfig {
    pub buffer_size: usize,
    pub orders_path: Option<PathBuf>,
    pub items_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            orders_path: None,
            items_path: None,
            output: OutputFormat::default(),
        }
    }
}

impl HistoryConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BUFFER_VAR) {
            config.buffer_size = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidBufferSize(raw))?;
        }
        config.orders_path = lookup(ORDERS_VAR).filter(|p| !p.is_empty()).map(PathBuf::from);
        config.items_path = lookup(ITEMS_VAR).filter(|p| !p.is_empty()).map(PathBuf::from);
        if let Some(raw) = lookup(OUTPUT_VAR) {
            config.output = raw.parse()?;
        }

        Ok(config)
    }
}
