//! JSON configuration.
//!
//! Every field is optional. Missing fields fall back to the reference setup:
//! queries `1..=10000` against `{7: mere, 8: pere, 3: capsuni, 21: gutui}`,
//! the threads strategy and the sentinel missing-file policy. Input paths
//! have no default and are always supplied by the caller.
use crate::aggregate::MissingFilePolicy;
use crate::divisors::{Mapping, QueryRange};
use crate::error::ConfigError;
use crate::scanner::ExecutionStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub divisors: DivisorConfig,
    pub aggregator: AggregatorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DivisorConfig {
    pub start: u64,
    pub end: u64,
    pub mapping: Mapping,
}

impl Default for DivisorConfig {
    fn default() -> Self {
        Self {
            start: QueryRange::REFERENCE_START,
            end: QueryRange::REFERENCE_END,
            mapping: Mapping::reference(),
        }
    }
}

impl DivisorConfig {
    /// The validated query range.
    pub fn range(&self) -> Result<QueryRange, ConfigError> {
        QueryRange::new(self.start, self.end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregatorConfig {
    pub paths: Vec<PathBuf>,
    pub strategy: ExecutionStrategy,
    pub missing: MissingFilePolicy,
}

impl Config {
    /// Parse and validate a JSON document. `origin` only labels errors.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.divisors.range()?;
        self.divisors.mapping.validate()
    }
}
