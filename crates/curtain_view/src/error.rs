//! Error types for curtain_view

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the declarative transition configuration layer
///
/// The runtime path has no error conditions: unrecognized kinds fall
/// back to fade and durations are not validated. Only loading a config
/// file can genuinely fail.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read transition config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the config as TOML
    #[error("failed to parse transition config: {0}")]
    Parse(#[from] toml::de::Error),
}
