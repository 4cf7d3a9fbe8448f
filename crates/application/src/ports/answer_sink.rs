use massresolve_domain::{DomainError, ResolvedAnswer};

/// Destination for answer lines.
///
/// A batch is written without interleaving with batches written from other
/// threads, then flushed.
pub trait AnswerSink: Send + Sync {
    fn write_batch(&self, answers: &[ResolvedAnswer]) -> Result<(), DomainError>;
}
