//! The weighted random movement step.
//!
//! # Selection rules
//!
//! - **Source**: weighted by current population, so busy zones shed people
//!   proportionally and empty zones are never drained further.  When the
//!   whole campus is at zero (degenerate), the source is uniform instead.
//! - **Destination**: every zone weighs 1, the cycle's hot zone weighs
//!   `1 + hot_zone_bonus` to bias inflow, and the source weighs 0 — a move
//!   never targets its own source, even when the source is the hot zone.
//!   If no weight survives (single-zone topology), fall back to a uniform
//!   choice among the non-source zones; with none available the step is a
//!   no-op.
//! - **Quantity**: uniform in `1..=min(max_move_size, source population)`,
//!   sampled under the same lock acquisition that applies the transfer.

use std::sync::Mutex;

use footfall_core::{SimParams, SimRng, ZoneId};

use crate::population::PopulationState;

/// One applied movement: `people` left `from` and arrived at `to`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveEvent {
    pub from:   ZoneId,
    pub to:     ZoneId,
    pub people: u32,
}

// ── Selection helpers ─────────────────────────────────────────────────────────

/// Pick the source zone, population-weighted; uniform when the campus is
/// empty.  `counts` must be non-empty.
pub(crate) fn select_source(counts: &[u32], rng: &mut SimRng) -> ZoneId {
    match rng.choose_weighted(counts) {
        Some(i) => ZoneId(i as u16),
        // Everyone is nowhere: no zone has weight, pick uniformly.  The
        // transfer below re-checks the population and no-ops at zero.
        None => ZoneId(rng.gen_range(0..counts.len()) as u16),
    }
}

/// Pick the destination zone for a move out of `source` during a cycle whose
/// hot zone is `hot_zone`.  Returns `None` when no destination exists
/// (single-zone topology).
pub(crate) fn select_destination(
    zone_count: usize,
    source:     ZoneId,
    hot_zone:   ZoneId,
    bonus:      u32,
    rng:        &mut SimRng,
) -> Option<ZoneId> {
    let mut weights = vec![1u32; zone_count];
    weights[hot_zone.index()] += bonus;
    // Self-exclusion wins over the hot-zone bonus.
    weights[source.index()] = 0;

    match rng.choose_weighted(&weights) {
        Some(i) => Some(ZoneId(i as u16)),
        None => {
            let candidates: Vec<ZoneId> = (0..zone_count)
                .map(|i| ZoneId(i as u16))
                .filter(|&z| z != source)
                .collect();
            rng.choose(&candidates).copied()
        }
    }
}

// ── Movement step ─────────────────────────────────────────────────────────────

/// Perform one weighted movement against `populations`.
///
/// Reads all zone counts under the lock, selects source and destination
/// lock-free, then re-acquires the lock to sample the quantity against the
/// *current* source population and apply the transfer atomically.  Returns
/// `None` when the step degenerates to a no-op (empty source, or nowhere to
/// move to).
pub(crate) fn movement_step(
    populations: &Mutex<PopulationState>,
    hot_zone:    ZoneId,
    params:      &SimParams,
    rng:         &mut SimRng,
) -> Option<MoveEvent> {
    // Jointly consistent read of every zone's population.
    let counts: Vec<u32> = populations
        .lock()
        .expect("population lock poisoned")
        .counts()
        .to_vec();

    let from = select_source(&counts, rng);
    let to = select_destination(counts.len(), from, hot_zone, params.hot_zone_bonus, rng)?;

    // The degenerate fallbacks above can select an empty source, so the
    // population is re-checked under the same lock acquisition that mutates.
    let mut state = populations.lock().expect("population lock poisoned");
    let available = state.count(from);
    if available == 0 {
        return None;
    }
    let people = rng.gen_range(1..=available.min(params.max_move_size));
    state.transfer(from, to, people);
    Some(MoveEvent { from, to, people })
}
