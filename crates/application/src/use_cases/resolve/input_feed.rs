use massresolve_domain::ExtractRule;
use std::io::BufRead;
use tracing::{debug, warn};

/// Lazy, finite sequence of query names read line by line.
///
/// Runs of case-insensitively equal names collapse into one; only the
/// previously emitted name is remembered, not the whole history.
///
/// Not synchronized: callers sharing a feed between threads wrap it in a lock.
pub struct InputFeed {
    reader: Box<dyn BufRead + Send>,
    rule: ExtractRule,
    last_emitted: Option<String>,
    line: Vec<u8>,
    exhausted: bool,
    lines_read: u64,
    duplicates_skipped: u64,
}

impl InputFeed {
    pub fn new(reader: impl BufRead + Send + 'static, rule: ExtractRule) -> Self {
        Self {
            reader: Box::new(reader),
            rule,
            last_emitted: None,
            line: Vec::with_capacity(256),
            exhausted: false,
            lines_read: 0,
            duplicates_skipped: 0,
        }
    }

    /// Next deduplicated name, or `None` once the source is exhausted.
    pub fn next_name(&mut self) -> Option<String> {
        while !self.exhausted {
            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    debug!(lines = self.lines_read, "Input exhausted");
                    self.exhausted = true;
                }
                Ok(_) => {
                    self.lines_read += 1;
                    let raw = String::from_utf8_lossy(&self.line);
                    let line = raw.trim_end_matches('\n').trim_end_matches('\r');

                    let Some(name) = self.rule.extract(line) else {
                        continue;
                    };

                    if let Some(previous) = &self.last_emitted {
                        if previous.eq_ignore_ascii_case(name) {
                            self.duplicates_skipped += 1;
                            continue;
                        }
                    }

                    let name = name.to_string();
                    self.last_emitted = Some(name.clone());
                    return Some(name);
                }
                Err(e) => {
                    warn!(error = %e, line = self.lines_read + 1, "Failed to read input, treating as end of input");
                    self.exhausted = true;
                }
            }
        }
        None
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    pub fn duplicates_skipped(&self) -> u64 {
        self.duplicates_skipped
    }
}

impl Iterator for InputFeed {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_name()
    }
}
