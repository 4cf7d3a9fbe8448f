//! Configuration module for massresolve
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `query`: Record type, class, admission window and seed query
//! - `input`: Input source and hostname extraction rule
//! - `resolver`: Upstream servers, timeouts and worker pool
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod input;
pub mod logging;
pub mod query;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use input::{ExtractRule, InputConfig};
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
