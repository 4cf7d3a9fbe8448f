use async_trait::async_trait;
use massresolve_domain::{CompletionEvent, DnsQuery, DomainError};

/// Continuation run once when a submitted query completes.
pub type CompletionHandler = Box<dyn FnOnce(CompletionEvent) + Send + 'static>;

/// Asynchronous resolving service.
///
/// Implementations run their own workers and call completion handlers from
/// any of them, concurrently with each other and with the submitting thread.
#[async_trait]
pub trait ResolverService: Send + Sync {
    /// Queue `query` for resolution.
    ///
    /// On `Ok`, `on_complete` is invoked exactly once. On `Err` it is dropped
    /// without being called.
    fn submit(&self, query: DnsQuery, on_complete: CompletionHandler) -> Result<(), DomainError>;

    /// Resolves once no accepted submission is left whose handler has not returned.
    async fn run_until_idle(&self);

    /// Submissions accepted but not yet completed.
    fn outstanding(&self) -> usize;
}
