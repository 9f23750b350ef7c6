//! Declarative transition configuration
//!
//! Maps screen names to [`TransitionSpec`]s, loaded from TOML:
//!
//! ```toml
//! [default]
//! kind = "fade"
//! duration_ms = 300
//!
//! [screens.settings]
//! kind = "slideFromRight"
//! duration_ms = 400
//!
//! [screens.sheet]
//! kind = "slideFromBottom"
//! ```
//!
//! Unrecognized kind names deserialize to fade (same fallback policy as
//! the runtime path) rather than failing the whole file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::kind::TransitionSpec;

/// Per-screen transition configuration with a fallback default
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionsConfig {
    /// Spec applied to screens without an explicit entry
    #[serde(default)]
    pub default: TransitionSpec,
    /// Per-screen overrides
    #[serde(default)]
    pub screens: BTreeMap<String, TransitionSpec>,
}

impl TransitionsConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the spec for a screen, falling back to the default entry
    pub fn spec_for(&self, screen: &str) -> TransitionSpec {
        self.screens.get(screen).copied().unwrap_or(self.default)
    }
}
