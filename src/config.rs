//! Host configuration for reported diagnostics.
//!
//! ```json
//! { "suppress": ["SQL00009"], "max_errors": 20 }
//! ```
//!
//! Severity is not configurable; it is fixed per error condition.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::diagnostics::{DEFAULT_MAX_ERRORS, lookup_error_code};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid diagnostics config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown error code `{0}` in suppress list")]
    UnknownCode(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Codes whose diagnostics are dropped before reaching the host.
    pub suppress: BTreeSet<String>,
    /// Errors shown by `DiagnosticsAggregator::with_config`; 50 when unset.
    pub max_errors: Option<usize>,
}

impl DiagnosticsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DiagnosticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            suppressed = config.suppress.len(),
            max_errors = ?config.max_errors,
            "loaded diagnostics config"
        );
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Every suppressed code must exist in the registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .suppress
            .iter()
            .find(|code| lookup_error_code(code).is_none())
        {
            Some(code) => Err(ConfigError::UnknownCode(code.clone())),
            None => Ok(()),
        }
    }

    pub fn suppress(mut self, code: impl Into<String>) -> Self {
        self.suppress.insert(code.into());
        self
    }

    pub fn is_suppressed(&self, code: &str) -> bool {
        self.suppress.contains(code)
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors.unwrap_or(DEFAULT_MAX_ERRORS)
    }
}
