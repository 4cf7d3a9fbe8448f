use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Submission rejected for {name}: {reason}")]
    SubmissionRejected { name: String, reason: String },

    #[error("Resolution failed for {name}: {reason}")]
    ResolutionFailed { name: String, reason: String },

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Failed to decode DNS answer: {0}")]
    DecodeFailed(String),

    #[error("Setup failed: {0}")]
    SetupFailed(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
