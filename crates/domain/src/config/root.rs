use super::{ConfigError, ExtractRule, InputConfig, LoggingConfig, QueryConfig, ResolverConfig};
use crate::{RecordClass, RecordType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; each one set wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub record_type: Option<RecordType>,
    pub record_class: Option<RecordClass>,
    pub max_in_flight: Option<usize>,
    pub seed_name: Option<String>,
    pub input: Option<String>,
    pub field: Option<ExtractRule>,
    pub upstreams: Vec<String>,
    pub query_timeout_ms: Option<u64>,
    pub attempts: Option<u32>,
    pub worker_threads: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(record_type) = overrides.record_type {
            self.query.record_type = record_type;
        }
        if let Some(record_class) = overrides.record_class {
            self.query.record_class = record_class;
        }
        if let Some(max) = overrides.max_in_flight {
            self.query.max_in_flight = max;
        }
        if let Some(seed) = overrides.seed_name {
            self.query.seed_name = seed;
        }
        if let Some(input) = overrides.input {
            self.input.path = Some(input);
        }
        if let Some(field) = overrides.field {
            self.input.field = field;
        }
        if !overrides.upstreams.is_empty() {
            self.resolver.upstreams = overrides.upstreams;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(attempts) = overrides.attempts {
            self.resolver.attempts = attempts;
        }
        if let Some(threads) = overrides.worker_threads {
            self.resolver.worker_threads = threads;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.max_in_flight == 0 {
            return Err(ConfigError::Validation(
                "query.max_in_flight must be at least 1".into(),
            ));
        }
        if self.query.seed_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "query.seed_name cannot be empty".into(),
            ));
        }
        if self.resolver.worker_threads == 0 {
            return Err(ConfigError::Validation(
                "resolver.worker_threads must be at least 1".into(),
            ));
        }
        if self.resolver.attempts == 0 {
            return Err(ConfigError::Validation(
                "resolver.attempts must be at least 1".into(),
            ));
        }
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be greater than 0".into(),
            ));
        }
        if self.resolver.max_pending < self.query.max_in_flight {
            return Err(ConfigError::Validation(format!(
                "resolver.max_pending ({}) must not be smaller than query.max_in_flight ({})",
                self.resolver.max_pending, self.query.max_in_flight
            )));
        }
        self.resolver.upstream_addrs()?;
        Ok(())
    }
}
