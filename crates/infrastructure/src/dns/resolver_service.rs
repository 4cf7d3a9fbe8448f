//! UDP forwarding resolver service
//!
//! Forwards each submitted query to a recursive upstream and hands the raw
//! answer to the submitter's completion handler. Handlers run on the tokio
//! blocking pool, so they may block (read input, write output) without
//! stalling the I/O workers.

use super::forwarding::MessageBuilder;
use super::transport::{DnsTransport, TcpTransport, TransportResponse, UdpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use massresolve_application::ports::{CompletionHandler, ResolverService};
use crate::system::system_nameservers;
use massresolve_domain::config::ResolverConfig;
use massresolve_domain::{CompletionEvent, DnsQuery, DomainError, Outcome};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tracing::{debug, error, info};

/// Tunables of the resolver service.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    pub query_timeout: Duration,
    pub attempts: u32,
    pub max_pending: usize,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_millis(2000),
            attempts: 2,
            max_pending: 4096,
        }
    }
}

impl From<&ResolverConfig> for ResolverSettings {
    fn from(config: &ResolverConfig) -> Self {
        Self {
            query_timeout: Duration::from_millis(config.query_timeout_ms),
            attempts: config.attempts,
            max_pending: config.max_pending,
        }
    }
}

pub struct UdpResolverService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    handle: Handle,
    transports: Vec<UdpTransport>,
    /// TCP fallback per upstream, same order as `transports`
    tcp_transports: Vec<TcpTransport>,
    next_upstream: AtomicUsize,
    settings: ResolverSettings,
    outstanding: AtomicUsize,
    idle: Notify,
}

impl UdpResolverService {
    /// Spawns work on `handle`; fails when no upstream is given.
    pub fn new(
        handle: Handle,
        upstreams: Vec<SocketAddr>,
        settings: ResolverSettings,
    ) -> Result<Self, DomainError> {
        if upstreams.is_empty() {
            return Err(DomainError::SetupFailed(
                "no upstream resolver configured".into(),
            ));
        }

        debug!(
            upstreams = ?upstreams,
            timeout_ms = settings.query_timeout.as_millis() as u64,
            attempts = settings.attempts,
            max_pending = settings.max_pending,
            "Resolver service created"
        );

        Ok(Self {
            inner: Arc::new(ServiceInner {
                handle,
                transports: upstreams.iter().copied().map(UdpTransport::new).collect(),
                tcp_transports: upstreams.into_iter().map(TcpTransport::new).collect(),
                next_upstream: AtomicUsize::new(0),
                settings,
                outstanding: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        })
    }

    /// Build from configuration, falling back to the system nameservers
    /// when no upstream is configured.
    pub fn from_config(handle: Handle, config: &ResolverConfig) -> Result<Self, DomainError> {
        let mut upstreams = config
            .upstream_addrs()
            .map_err(|e| DomainError::SetupFailed(e.to_string()))?;

        if upstreams.is_empty() {
            upstreams = system_nameservers()?;
            info!(upstreams = ?upstreams, "Using nameservers from /etc/resolv.conf");
        }

        Self::new(handle, upstreams, ResolverSettings::from(config))
    }

    pub fn upstreams(&self) -> Vec<SocketAddr> {
        self.inner.transports.iter().map(|t| t.server_addr()).collect()
    }

    fn reserve(&self) -> bool {
        let max = self.inner.settings.max_pending;
        self.inner
            .outstanding
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| (c < max).then_some(c + 1))
            .is_ok()
    }
}

impl ServiceInner {
    async fn resolve(&self, query: &DnsQuery, message_id: u16, message: &[u8]) -> Outcome {
        let mut last_error = DomainError::QueryTimeout;

        for attempt in 1..=self.settings.attempts {
            let index = self.next_upstream.fetch_add(1, Ordering::Relaxed) % self.transports.len();
            let transport = &self.transports[index];
            let start = Instant::now();

            let result = match transport
                .send(message, message_id, self.settings.query_timeout)
                .await
            {
                Ok(response) if response.truncated => {
                    debug!(
                        name = %query.name,
                        server = %transport.server_addr(),
                        "Response truncated (TC bit), retrying via TCP"
                    );
                    self.retry_over_tcp(index, message, message_id, start).await
                }
                other => other,
            };

            match result {
                Ok(response) => {
                    debug!(
                        name = %query.name,
                        server = %transport.server_addr(),
                        protocol = response.protocol_used,
                        attempt = attempt,
                        "Upstream answered"
                    );
                    return Outcome::Success(Bytes::from(response.bytes));
                }
                Err(e) => {
                    debug!(
                        name = %query.name,
                        server = %transport.server_addr(),
                        protocol = transport.protocol_name(),
                        attempt = attempt,
                        error = %e,
                        "Upstream attempt failed"
                    );
                    last_error = e;
                }
            }
        }

        Outcome::Failure(DomainError::ResolutionFailed {
            name: query.name.to_string(),
            reason: last_error.to_string(),
        })
    }

    /// Re-ask upstream `index` over TCP within what is left of the attempt's timeout.
    async fn retry_over_tcp(
        &self,
        index: usize,
        message: &[u8],
        message_id: u16,
        start: Instant,
    ) -> Result<TransportResponse, DomainError> {
        let remaining = self
            .settings
            .query_timeout
            .checked_sub(start.elapsed())
            .unwrap_or(Duration::from_millis(500));

        self.tcp_transports[index]
            .send(message, message_id, remaining)
            .await
            .map_err(|e| DomainError::IoError(format!("truncated answer, TCP retry failed: {}", e)))
    }

    fn finish(&self) {
        if self.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.idle.notify_waiters();
        }
    }
}

#[async_trait]
impl ResolverService for UdpResolverService {
    fn submit(&self, query: DnsQuery, on_complete: CompletionHandler) -> Result<(), DomainError> {
        let (message_id, message) =
            MessageBuilder::build_query(&query).map_err(|e| DomainError::SubmissionRejected {
                name: query.name.to_string(),
                reason: e.to_string(),
            })?;

        if !self.reserve() {
            return Err(DomainError::SubmissionRejected {
                name: query.name.to_string(),
                reason: "queue full".into(),
            });
        }

        let inner = Arc::clone(&self.inner);
        self.inner.handle.spawn(async move {
            let outcome = inner.resolve(&query, message_id, &message).await;
            let event = CompletionEvent { query, outcome };

            if let Err(e) = tokio::task::spawn_blocking(move || on_complete(event)).await {
                error!(error = %e, "Completion handler panicked");
            }
            inner.finish();
        });

        Ok(())
    }

    async fn run_until_idle(&self) {
        loop {
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.inner.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }

    fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Acquire)
    }
}
