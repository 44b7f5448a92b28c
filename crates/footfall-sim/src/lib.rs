//! `footfall-sim` — the concurrent population-redistribution simulator.
//!
//! # One simulation cycle
//!
//! ```text
//! loop:
//!   ① Hot zone   — pick one zone uniformly; it gets biased inflow all cycle.
//!   ② Movement   — 20–50 weighted random steps:
//!                    source ∝ population, destination 1/zone (+bonus for the
//!                    hot zone, 0 for the source), quantity ≤ min(50, source).
//!   ③ Projection — recompute every device's occupancy estimate from the
//!                    zone totals (floor split + remainder + jitter, ≥ 0).
//!   ④ Pause      — coarse sleep for cycle_interval_ms, then repeat.
//! ```
//!
//! # Concurrency
//!
//! One background worker (started idempotently via [`Simulator::start`])
//! mutates the population under a single mutex; snapshot readers take the
//! same mutex for the duration of their copy.  The derived device map is
//! replaced wholesale under a second mutex.  A snapshot taken mid-cycle
//! reflects some prefix of that cycle's moves — per-step atomicity is
//! guaranteed, cycle-level atomicity is deliberately not.
//!
//! # Crate layout
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`population`] | `PopulationState`                                |
//! | [`mover`]      | `MoveEvent`, weighted source/destination selection |
//! | [`projector`]  | `DeviceEstimate`, `project_devices`              |
//! | [`simulator`]  | `Simulator`, `CycleSummary`, background loop     |
//! | [`snapshot`]   | `Snapshot`, `ZoneTotal` wire types               |
//! | [`error`]      | `SimError`, `SimResult<T>`                       |

pub mod error;
pub mod mover;
pub mod population;
pub mod projector;
pub mod simulator;
pub mod snapshot;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use mover::MoveEvent;
pub use population::PopulationState;
pub use projector::{project_devices, DeviceEstimate};
pub use simulator::{CycleSummary, Simulator};
pub use snapshot::{Snapshot, ZoneTotal};
