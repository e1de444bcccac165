//! Crate error types.
//!
//! Device absence is never an error anywhere in this crate: an absent device
//! or an uninstalled plugin component yields an empty snapshot sequence and
//! neutral query results. The failures below are the reportable kind — a
//! broken integration or an unreadable config file.

use thiserror::Error;

/// Failure while polling a backend for a fresh snapshot.
#[derive(Debug, Error)]
pub enum PollError {
    /// The plugin channel produced a payload that does not decode as a
    /// device sequence. The registry logs this and holds the last-known-good
    /// snapshot instead of failing the tick loop.
    #[error("malformed plugin channel payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Failure while loading a [`PadConfig`](crate::config::PadConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
