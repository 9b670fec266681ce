//! Lifetime counters for a registry.

/// Registry statistics for observability.
///
/// Counters cover the whole lifetime of the registry and survive
/// [`Registry::clear`](crate::Registry::clear).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub(crate) allocations: u64,
    pub(crate) releases: u64,
    pub(crate) exhaustions: u64,
    pub(crate) peak: usize,
}

impl RegistryStats {
    /// Number of ids that became active (via `add` or an upserting `update`).
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Number of ids released by `remove` or `clear`.
    pub fn releases(&self) -> u64 {
        self.releases
    }

    /// Number of `add` calls rejected because the registry was full.
    pub fn exhaustions(&self) -> u64 {
        self.exhaustions
    }

    /// Highest number of simultaneously active ids observed.
    pub fn peak(&self) -> usize {
        self.peak
    }

    /// Ids currently held, derived from the counters.
    pub fn live(&self) -> u64 {
        self.allocations - self.releases
    }

    pub(crate) fn record_allocation(&mut self, len: usize) {
        self.allocations += 1;
        self.peak = self.peak.max(len);
    }

    pub(crate) fn record_releases(&mut self, count: usize) {
        self.releases += count as u64;
    }

    pub(crate) fn record_exhaustion(&mut self) {
        self.exhaustions += 1;
    }
}
