//! Authoritative per-zone population counts.
//!
//! # Invariant
//!
//! The sum over all zones equals the fixed total population at every
//! observable instant.  [`PopulationState::transfer`] conserves the sum by
//! construction, counts are unsigned so negative populations are
//! unrepresentable, and all access from concurrent contexts goes through
//! the owning simulator's mutex — the state itself carries no lock.

use footfall_core::ZoneId;

/// Mutable mapping of zone → population count, plus the fixed total.
pub struct PopulationState {
    /// Current population of each zone.  Indexed by `ZoneId`.
    counts: Vec<u32>,
    /// The fixed total the counts always sum to.
    total: u32,
}

impl PopulationState {
    /// Distribute `total` people as evenly as possible across `zone_count`
    /// zones: every zone gets `total / zone_count`, and the first
    /// `total % zone_count` zones (in enumeration order) get one extra.
    ///
    /// # Panics
    /// Panics if `zone_count` is 0.  Simulator construction rejects empty
    /// topologies before this is reached.
    pub fn distribute_evenly(total: u32, zone_count: usize) -> Self {
        let base = total / zone_count as u32;
        let remainder = (total - base * zone_count as u32) as usize;
        let counts = (0..zone_count)
            .map(|i| base + u32::from(i < remainder))
            .collect();
        Self { counts, total }
    }

    /// Current population of `zone`.
    #[inline]
    pub fn count(&self, zone: ZoneId) -> u32 {
        self.counts[zone.index()]
    }

    /// All per-zone counts, indexed by `ZoneId`.
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// The fixed total population this state was initialized with.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Actual sum over all zones.  Equals [`total`](Self::total) unless the
    /// conservation invariant has been violated — used by tests to assert it
    /// hasn't.
    pub fn sum(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Test scaffolding: adopt explicit per-zone counts.
    #[cfg(test)]
    pub(crate) fn from_counts(counts: Vec<u32>) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Move `people` from `from` to `to`.  The sum is conserved by
    /// construction.  Callers must hold the owning mutex and must have
    /// verified `people <= count(from)` under that same lock acquisition.
    pub(crate) fn transfer(&mut self, from: ZoneId, to: ZoneId, people: u32) {
        debug_assert!(people <= self.counts[from.index()]);
        self.counts[from.index()] -= people;
        self.counts[to.index()] += people;
    }
}
