//! Query defaults for [`VocabularyIndex`](crate::index::VocabularyIndex).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for similarity and autocomplete queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Maximum edit distance for similarity and fuzzy queries.
    pub max_distance: usize,

    /// Maximum number of suggestions returned by autocomplete queries.
    pub limit: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            max_distance: 2,
            limit: 10,
        }
    }
}

impl IndexConfig {
    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: IndexConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject values that would make every query return nothing.
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(Error::invalid_config("limit must be at least 1"));
        }
        Ok(())
    }
}
