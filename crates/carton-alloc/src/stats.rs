//! Allocation bookkeeping.

/// Running totals for an allocation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocStats {
    /// Bytes currently acquired and not yet released.
    pub bytes_allocated: usize,
    /// Number of successful acquisitions.
    pub allocation_count: usize,
    /// Number of releases.
    pub deallocation_count: usize,
    /// Highest value `bytes_allocated` has reached.
    pub peak_bytes: usize,
    /// Number of refused acquisitions.
    pub failed_allocations: usize,
}

impl AllocStats {
    /// Create empty statistics.
    pub const fn new() -> Self {
        Self {
            bytes_allocated: 0,
            allocation_count: 0,
            deallocation_count: 0,
            peak_bytes: 0,
            failed_allocations: 0,
        }
    }

    /// Record a successful acquisition of `size` bytes.
    pub fn record_alloc(&mut self, size: usize) {
        self.bytes_allocated += size;
        self.allocation_count += 1;
        self.peak_bytes = self.peak_bytes.max(self.bytes_allocated);
    }

    /// Record a release of `size` bytes.
    pub fn record_dealloc(&mut self, size: usize) {
        self.bytes_allocated = self.bytes_allocated.saturating_sub(size);
        self.deallocation_count += 1;
    }

    /// Record a refused acquisition.
    pub fn record_failure(&mut self) {
        self.failed_allocations += 1;
    }

    /// Number of regions acquired and not yet released.
    pub fn live_allocations(&self) -> usize {
        self.allocation_count.saturating_sub(self.deallocation_count)
    }
}
