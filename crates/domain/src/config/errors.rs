use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported record type: {0} (expected one of A, AAAA, TXT, NS, CNAME, PTR)")]
    UnsupportedRecordType(String),

    #[error("Unsupported record class: {0} (expected one of IN, CH, HS)")]
    UnsupportedRecordClass(String),

    #[error("Invalid extraction rule: {0} (expected one of line, first, last)")]
    InvalidExtractRule(String),

    #[error("Invalid upstream address: {0}")]
    InvalidUpstream(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}
