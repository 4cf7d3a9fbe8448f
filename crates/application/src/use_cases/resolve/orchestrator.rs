use super::admission_window::AdmissionWindow;
use super::answer_processor::{AnswerProcessor, ProcessOutcome};
use super::input_feed::InputFeed;
use crate::ports::{DnsCodec, ResolverService};
use massresolve_domain::{
    CompletionEvent, DnsQuery, DomainError, RecordClass, RecordType, RunSummary,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Submitting and awaiting completions
    Draining,
    /// Window empty and input exhausted
    Done,
}

/// Fixed per-run parameters.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    pub record_type: RecordType,
    pub record_class: RecordClass,
    pub max_in_flight: usize,
    pub seed_name: String,
}

#[derive(Default)]
struct RunStats {
    submitted: AtomicU64,
    completed: AtomicU64,
    resolution_failures: AtomicU64,
    decode_failures: AtomicU64,
    rejected: AtomicU64,
    answers: AtomicU64,
}

/// Keeps up to `max_in_flight` resolutions outstanding until the input runs dry.
///
/// Every completion handler holds an `Arc` to the orchestrator; the handler
/// processes the answer, releases its slot, then refills the window from the
/// feed on whichever worker thread it was called from.
pub struct Orchestrator<C: DnsCodec> {
    config: OrchestratorConfig,
    resolver: Arc<dyn ResolverService>,
    processor: AnswerProcessor<C>,
    window: AdmissionWindow,
    feed: Mutex<InputFeed>,
    input_exhausted: AtomicBool,
    stats: RunStats,
}

impl<C: DnsCodec> Orchestrator<C> {
    pub fn new(
        config: OrchestratorConfig,
        resolver: Arc<dyn ResolverService>,
        processor: AnswerProcessor<C>,
        feed: InputFeed,
    ) -> Arc<Self> {
        Arc::new(Self {
            window: AdmissionWindow::new(config.max_in_flight),
            config,
            resolver,
            processor,
            feed: Mutex::new(feed),
            input_exhausted: AtomicBool::new(false),
            stats: RunStats::default(),
        })
    }

    /// Submit the seed query and wait until every resolution has completed.
    pub async fn run(self: &Arc<Self>) -> Result<RunSummary, DomainError> {
        self.start()?;
        self.resolver.run_until_idle().await;

        let summary = self.summary();
        let lines_read = self
            .feed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .lines_read();
        info!(
            lines_read = lines_read,
            submitted = summary.submitted,
            completed = summary.completed,
            answers = summary.answers,
            peak_in_flight = summary.peak_in_flight,
            state = ?self.state(),
            "Bulk resolution finished"
        );
        Ok(summary)
    }

    /// Submit the seed query that bootstraps the completion loop.
    ///
    /// A rejected seed is a setup failure.
    pub fn start(self: &Arc<Self>) -> Result<(), DomainError> {
        let query = self.query_for(self.config.seed_name.as_str());
        info!(
            seed = %query.name,
            record_type = %self.config.record_type,
            max_in_flight = self.config.max_in_flight,
            "Starting bulk resolution"
        );

        if self.window.try_admit().is_none() {
            return Err(DomainError::SetupFailed(
                "admission window has no capacity for the seed query".into(),
            ));
        }

        if let Err(e) = self.submit(query) {
            self.window.decrement();
            return Err(DomainError::SetupFailed(format!("seed query rejected: {e}")));
        }
        Ok(())
    }

    /// Continuation for every accepted submission.
    pub fn handle_completion(self: &Arc<Self>, event: CompletionEvent) {
        match self.processor.process(&event) {
            ProcessOutcome::Answered(lines) => {
                self.stats.answers.fetch_add(lines as u64, Ordering::Relaxed);
            }
            ProcessOutcome::ResolutionFailed => {
                self.stats.resolution_failures.fetch_add(1, Ordering::Relaxed);
            }
            ProcessOutcome::DecodeFailed => {
                self.stats.decode_failures.fetch_add(1, Ordering::Relaxed);
            }
            ProcessOutcome::OutputFailed => {}
        }
        self.stats.completed.fetch_add(1, Ordering::Relaxed);

        let current = self.window.decrement();
        debug!(name = %event.query.name, in_flight = current, "Resolution completed");

        self.refill();
    }

    /// Admit names until the window is full or the feed is exhausted.
    fn refill(self: &Arc<Self>) {
        while self.window.try_admit().is_some() {
            let Some(name) = self.next_name() else {
                self.window.decrement();
                break;
            };

            let query = self.query_for(name.as_str());
            if let Err(e) = self.submit(query) {
                self.window.decrement();
                self.stats.rejected.fetch_add(1, Ordering::Relaxed);
                warn!(name = %name, error = %e, "resolve error");
            }
        }
    }

    fn submit(self: &Arc<Self>, query: DnsQuery) -> Result<(), DomainError> {
        let this = Arc::clone(self);
        self.resolver
            .submit(query, Box::new(move |event| this.handle_completion(event)))?;
        self.stats.submitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn next_name(&self) -> Option<String> {
        if self.input_exhausted.load(Ordering::Acquire) {
            return None;
        }

        let mut feed = self.feed.lock().unwrap_or_else(PoisonError::into_inner);
        let name = feed.next_name();
        if name.is_none() {
            self.input_exhausted.store(true, Ordering::Release);
        }
        name
    }

    fn query_for(&self, name: &str) -> DnsQuery {
        DnsQuery::new(name, self.config.record_type, self.config.record_class)
    }

    pub fn state(&self) -> RunState {
        if self.window.is_empty() && self.input_exhausted.load(Ordering::Acquire) {
            RunState::Done
        } else {
            RunState::Draining
        }
    }

    pub fn window(&self) -> &AdmissionWindow {
        &self.window
    }

    pub fn summary(&self) -> RunSummary {
        let duplicates_skipped = self
            .feed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .duplicates_skipped();

        RunSummary {
            submitted: self.stats.submitted.load(Ordering::Relaxed),
            completed: self.stats.completed.load(Ordering::Relaxed),
            resolution_failures: self.stats.resolution_failures.load(Ordering::Relaxed),
            decode_failures: self.stats.decode_failures.load(Ordering::Relaxed),
            rejected: self.stats.rejected.load(Ordering::Relaxed),
            answers: self.stats.answers.load(Ordering::Relaxed),
            peak_in_flight: self.window.peak(),
            duplicates_skipped,
        }
    }
}
