//! Deserializable finder configuration

use serde::Deserialize;

use crate::{ExtremaError, ExtremumFinder, Result};

/// Configuration for an [`ExtremumFinder`]
///
/// Recognizes a single field, `mode`, which must be `"min"` or `"max"` and
/// defaults to `"min"`. Unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinderConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "min".to_string()
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

impl FinderConfig {
    /// Parse a configuration from a JSON object, e.g. `{"mode": "max"}`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExtremaError::InvalidConfiguration(e.to_string()))
    }

    /// Validate the configuration into a finder
    pub fn build(&self) -> Result<ExtremumFinder> {
        ExtremumFinder::from_name(&self.mode)
    }
}
