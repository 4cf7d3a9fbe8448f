#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use massresolve_application::ports::{
    AnswerSink, CompletionHandler, DecodedRecord, DnsCodec, ResolverService,
};
use massresolve_domain::{
    CompletionEvent, DnsQuery, DomainError, RecordType, ResolvedAnswer,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::Notify;

// ============================================================================
// Mock ResolverService
// ============================================================================

#[derive(Debug, Clone)]
pub enum MockAnswer {
    Packet(Bytes),
    Fail(String),
}

impl MockAnswer {
    /// Packet in the `TextCodec` format: `type;ttl;value|type;ttl;value`
    pub fn packet(text: &str) -> Self {
        MockAnswer::Packet(Bytes::copy_from_slice(text.as_bytes()))
    }
}

/// Resolver service that answers from a table after a short delay and
/// delivers completions on the blocking pool, like the real adapter.
pub struct MockResolverService {
    handle: Handle,
    answers: HashMap<String, MockAnswer>,
    default_answer: MockAnswer,
    rejected: HashSet<String>,
    delay: Duration,
    outstanding: Arc<AtomicUsize>,
    resolving: Arc<AtomicUsize>,
    max_resolving: Arc<AtomicUsize>,
    submitted: Arc<Mutex<Vec<String>>>,
    idle: Arc<Notify>,
}

impl MockResolverService {
    /// Must be called inside a tokio runtime.
    pub fn new() -> Self {
        Self {
            handle: Handle::current(),
            answers: HashMap::new(),
            default_answer: MockAnswer::packet(""),
            rejected: HashSet::new(),
            delay: Duration::from_millis(2),
            outstanding: Arc::new(AtomicUsize::new(0)),
            resolving: Arc::new(AtomicUsize::new(0)),
            max_resolving: Arc::new(AtomicUsize::new(0)),
            submitted: Arc::new(Mutex::new(Vec::new())),
            idle: Arc::new(Notify::new()),
        }
    }

    pub fn with_answer(mut self, name: &str, answer: MockAnswer) -> Self {
        self.answers.insert(name.to_string(), answer);
        self
    }

    pub fn with_default_answer(mut self, answer: MockAnswer) -> Self {
        self.default_answer = answer;
        self
    }

    pub fn rejecting(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Names accepted, in submission order
    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    /// Most queries ever accepted but not yet handed to their handler
    pub fn max_resolving(&self) -> usize {
        self.max_resolving.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResolverService for MockResolverService {
    fn submit(&self, query: DnsQuery, on_complete: CompletionHandler) -> Result<(), DomainError> {
        if self.rejected.contains(query.name.as_ref()) {
            return Err(DomainError::SubmissionRejected {
                name: query.name.to_string(),
                reason: "rejected by mock".into(),
            });
        }

        self.outstanding.fetch_add(1, Ordering::SeqCst);
        let resolving = self.resolving.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_resolving.fetch_max(resolving, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(query.name.to_string());

        let answer = self
            .answers
            .get(query.name.as_ref())
            .cloned()
            .unwrap_or_else(|| self.default_answer.clone());
        let delay = self.delay;
        let outstanding = Arc::clone(&self.outstanding);
        let resolving = Arc::clone(&self.resolving);
        let idle = Arc::clone(&self.idle);

        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;

            let event = match answer {
                MockAnswer::Packet(bytes) => CompletionEvent::success(query, bytes),
                MockAnswer::Fail(reason) => {
                    let name = query.name.to_string();
                    CompletionEvent::failure(query, DomainError::ResolutionFailed { name, reason })
                }
            };

            resolving.fetch_sub(1, Ordering::SeqCst);
            let _ = tokio::task::spawn_blocking(move || on_complete(event)).await;

            if outstanding.fetch_sub(1, Ordering::SeqCst) == 1 {
                idle.notify_waiters();
            }
        });

        Ok(())
    }

    async fn run_until_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.outstanding.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Mock DnsCodec
// ============================================================================

/// Decodes `type;ttl;value` records separated by `|`; the empty packet has no records.
pub struct TextCodec;

impl DnsCodec for TextCodec {
    type Value = String;

    fn decode(&self, packet: &[u8]) -> Result<Vec<DecodedRecord<String>>, DomainError> {
        let text =
            std::str::from_utf8(packet).map_err(|e| DomainError::DecodeFailed(e.to_string()))?;
        if text.is_empty() {
            return Ok(Vec::new());
        }

        text.split('|')
            .map(|rr| {
                let mut parts = rr.splitn(3, ';');
                let (Some(code), Some(ttl), Some(value)) = (parts.next(), parts.next(), parts.next())
                else {
                    return Err(DomainError::DecodeFailed(format!("malformed record: {rr}")));
                };
                Ok(DecodedRecord {
                    owner: Arc::from("owner.test"),
                    type_code: code
                        .parse()
                        .map_err(|_| DomainError::DecodeFailed(format!("bad type: {code}")))?,
                    ttl: ttl
                        .parse()
                        .map_err(|_| DomainError::DecodeFailed(format!("bad ttl: {ttl}")))?,
                    value: value.to_string(),
                })
            })
            .collect()
    }

    fn render_value(&self, _record_type: RecordType, value: &String) -> Result<String, DomainError> {
        Ok(value.clone())
    }
}

// ============================================================================
// Memory AnswerSink
// ============================================================================

#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    batches: AtomicUsize,
}

impl MemorySink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn batches(&self) -> usize {
        self.batches.load(Ordering::SeqCst)
    }
}

impl AnswerSink for MemorySink {
    fn write_batch(&self, answers: &[ResolvedAnswer]) -> Result<(), DomainError> {
        let mut lines = self.lines.lock().unwrap();
        lines.extend(answers.iter().map(|a| a.to_string()));
        self.batches.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
