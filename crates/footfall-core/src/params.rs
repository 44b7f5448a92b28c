//! Simulation parameters.
//!
//! All tuning knobs of the redistribution model live here so applications
//! and tests construct simulators from one plain struct.  `Default` yields
//! the standard campus profile: 1,000 people, a 5-second cycle, 20–50 moves
//! per cycle in batches of up to 50, a +3 hot-zone inflow bonus, and ±3
//! per-device display jitter.

use crate::{FootfallError, FootfallResult};

/// Tuning parameters for the population-redistribution simulation.
#[derive(Clone, Debug)]
pub struct SimParams {
    /// Fixed total campus population.  Conserved across every movement.
    pub total_people: u32,

    /// Pause between simulation cycles, in milliseconds.
    pub cycle_interval_ms: u64,

    /// Inclusive lower bound on movement steps per cycle.
    pub min_moves_per_cycle: u32,

    /// Inclusive upper bound on movement steps per cycle.
    pub max_moves_per_cycle: u32,

    /// Largest number of people one movement step may transfer.  The actual
    /// quantity is uniform in `1..=min(max_move_size, source population)`.
    pub max_move_size: u32,

    /// Extra destination weight for the cycle's hot zone (base weight is 1,
    /// so the hot zone is selected with weight `1 + hot_zone_bonus`).
    pub hot_zone_bonus: u32,

    /// Per-device display jitter: each estimate is perturbed by a value
    /// uniform in `[-max_jitter, +max_jitter]`, then clamped at zero.
    pub max_jitter: i32,

    /// Master RNG seed.  The same seed and topology always produce the same
    /// movement sequence.
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            total_people:        1_000,
            cycle_interval_ms:   5_000,
            min_moves_per_cycle: 20,
            max_moves_per_cycle: 50,
            max_move_size:       50,
            hot_zone_bonus:      3,
            max_jitter:          3,
            seed:                42,
        }
    }
}

impl SimParams {
    /// Fail fast on parameter combinations that would make the simulation
    /// loop or its sampling ranges ill-formed.
    pub fn validate(&self) -> FootfallResult<()> {
        if self.min_moves_per_cycle > self.max_moves_per_cycle {
            return Err(FootfallError::Config(format!(
                "min_moves_per_cycle {} exceeds max_moves_per_cycle {}",
                self.min_moves_per_cycle, self.max_moves_per_cycle
            )));
        }
        if self.max_move_size == 0 {
            return Err(FootfallError::Config(
                "max_move_size must be at least 1".into(),
            ));
        }
        if self.max_jitter < 0 {
            return Err(FootfallError::Config(format!(
                "max_jitter must be non-negative, got {}",
                self.max_jitter
            )));
        }
        Ok(())
    }
}
