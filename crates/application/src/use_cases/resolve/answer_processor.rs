use crate::ports::{AnswerSink, DnsCodec};
use massresolve_domain::{CompletionEvent, Outcome, RecordType, ResolvedAnswer};
use std::sync::Arc;
use tracing::{debug, warn};

/// What handling one completion amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Decoded; this many lines were emitted (possibly zero)
    Answered(usize),
    ResolutionFailed,
    DecodeFailed,
    /// Decoded, but the sink refused the batch
    OutputFailed,
}

/// Decodes completed answers, keeps the records of the configured type and
/// writes one line per record.
pub struct AnswerProcessor<C: DnsCodec> {
    codec: C,
    sink: Arc<dyn AnswerSink>,
    record_type: RecordType,
}

impl<C: DnsCodec> AnswerProcessor<C> {
    pub fn new(codec: C, sink: Arc<dyn AnswerSink>, record_type: RecordType) -> Self {
        Self {
            codec,
            sink,
            record_type,
        }
    }

    pub fn process(&self, event: &CompletionEvent) -> ProcessOutcome {
        let packet = match &event.outcome {
            Outcome::Success(packet) => packet,
            Outcome::Failure(e) => {
                warn!(name = %event.query.name, error = %e, "resolve error");
                return ProcessOutcome::ResolutionFailed;
            }
        };

        let records = match self.codec.decode(packet) {
            Ok(records) => records,
            Err(e) => {
                warn!(name = %event.query.name, bytes = packet.len(), error = %e, "decode error");
                return ProcessOutcome::DecodeFailed;
            }
        };

        let answers: Vec<ResolvedAnswer> = records
            .iter()
            .filter(|record| record.is_type(self.record_type))
            .filter_map(|record| {
                match self.codec.render_value(self.record_type, &record.value) {
                    Ok(value) => Some(ResolvedAnswer::new(
                        Arc::clone(&event.query.name),
                        self.record_type,
                        value,
                        record.ttl,
                    )),
                    Err(e) => {
                        warn!(name = %event.query.name, owner = %record.owner, error = %e, "Skipping unrenderable record");
                        None
                    }
                }
            })
            .collect();

        debug!(
            name = %event.query.name,
            records = records.len(),
            matched = answers.len(),
            "Answer processed"
        );

        if answers.is_empty() {
            return ProcessOutcome::Answered(0);
        }

        match self.sink.write_batch(&answers) {
            Ok(()) => ProcessOutcome::Answered(answers.len()),
            Err(e) => {
                warn!(name = %event.query.name, error = %e, "Failed to write answers");
                ProcessOutcome::OutputFailed
            }
        }
    }
}
