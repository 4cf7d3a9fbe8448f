use massresolve_application::ports::AnswerSink;
use massresolve_domain::{DomainError, ResolvedAnswer};
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Writes one `<name> <value> <ttl>` line per answer.
///
/// The writer lock is held for a whole batch and released after the flush,
/// so lines from concurrent completions never interleave.
pub struct LineSink<W: Write + Send> {
    writer: Mutex<W>,
}

pub type StdoutSink = LineSink<Stdout>;

impl LineSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> AnswerSink for LineSink<W> {
    fn write_batch(&self, answers: &[ResolvedAnswer]) -> Result<(), DomainError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        for answer in answers {
            writeln!(writer, "{answer}").map_err(|e| DomainError::Output(e.to_string()))?;
        }
        writer.flush().map_err(|e| DomainError::Output(e.to_string()))
    }
}
