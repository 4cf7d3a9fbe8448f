/// Counters collected over one bulk run, logged when the run finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Accepted submissions, seed included
    pub submitted: u64,
    /// Completion events handled
    pub completed: u64,
    pub resolution_failures: u64,
    pub decode_failures: u64,
    pub rejected: u64,
    /// Answer lines written to the sink
    pub answers: u64,
    pub peak_in_flight: usize,
    pub duplicates_skipped: u64,
}

impl RunSummary {
    /// Every accepted submission received its completion.
    pub fn is_balanced(&self) -> bool {
        self.submitted == self.completed
    }
}
