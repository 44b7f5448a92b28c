//! Snapshot wire types.
//!
//! A snapshot is an immutable point-in-time copy of every zone total, taken
//! strictly between two quiescent points of the mutator (see
//! [`Simulator::snapshot`][crate::Simulator::snapshot]).  The types here are
//! shaped for direct JSON encoding by the transport layer; fresh values are
//! produced per call and carry no identity beyond it.

use serde::Serialize;

/// Point-in-time copy of all zone totals.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    /// Wall-clock stamp of the copy (`YYYY-MM-DD HH:MM:SS`).
    pub timestamp: String,
    /// One entry per zone, in fixed topology order.
    pub zones: Vec<ZoneTotal>,
}

/// Aggregate population of one zone.
#[derive(Clone, Debug, Serialize)]
pub struct ZoneTotal {
    /// Zone display name.
    pub zone: String,
    /// Current population of the zone.
    pub total_foot_count: u32,
}

impl Snapshot {
    /// Sum of all zone totals — equals the configured total population for
    /// any snapshot taken outside a mutation critical section.
    pub fn total(&self) -> u64 {
        self.zones.iter().map(|z| u64::from(z.total_foot_count)).sum()
    }
}
