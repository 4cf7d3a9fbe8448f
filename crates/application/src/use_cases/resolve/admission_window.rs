use std::sync::atomic::{AtomicUsize, Ordering};

/// Atomic count of resolutions currently in flight, bounded by `limit`.
///
/// Counting only, never blocks. `increment` is unconditional; `try_admit`
/// refuses once the window is full, so admission through it keeps
/// `count <= limit` no matter how many threads race.
#[derive(Debug)]
pub struct AdmissionWindow {
    count: AtomicUsize,
    peak: AtomicUsize,
    limit: usize,
}

impl AdmissionWindow {
    pub fn new(limit: usize) -> Self {
        Self {
            count: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            limit,
        }
    }

    /// Returns the post-increment count.
    pub fn increment(&self) -> usize {
        let current = self.count.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak.fetch_max(current, Ordering::Relaxed);
        current
    }

    /// Returns the post-decrement count; at zero this is a no-op returning 0.
    pub fn decrement(&self) -> usize {
        match self
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| c.checked_sub(1))
        {
            Ok(previous) => previous - 1,
            Err(_) => 0,
        }
    }

    /// Takes a slot if one is free, returning the post-increment count.
    pub fn try_admit(&self) -> Option<usize> {
        let limit = self.limit;
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| {
                (c < limit).then_some(c + 1)
            })
            .ok()
            .map(|previous| {
                let current = previous + 1;
                self.peak.fetch_max(current, Ordering::Relaxed);
                current
            })
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Highest count observed since creation.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
