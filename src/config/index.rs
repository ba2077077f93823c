//! Index configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Configuration for building and querying the line index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Character that matches any single character in wildcard queries
    pub wildcard: char,

    /// Whether to Porter-stem words before indexing
    pub stem: bool,

    /// Minimum word length for stemming to apply
    pub min_stem_length: usize,

    /// Largest substitution distance accepted for near queries
    pub max_near_distance: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            wildcard: '.',
            stem: false,
            min_stem_length: 3,
            max_near_distance: 2,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        // An alphanumeric wildcard would shadow ordinary key characters
        if self.wildcard.is_alphanumeric() {
            return Err(ConfigError::ValidationError(format!(
                "wildcard must not be alphanumeric: {:?}",
                self.wildcard
            )));
        }

        if self.min_stem_length == 0 {
            return Err(ConfigError::ValidationError(
                "min_stem_length must be greater than 0".to_string(),
            ));
        }

        if self.max_near_distance == 0 {
            return Err(ConfigError::ValidationError(
                "max_near_distance must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
