//! `footfall-core` — foundational types for the footfall campus-occupancy
//! simulator.
//!
//! This crate is a dependency of every other `footfall-*` crate.  It
//! intentionally has no `footfall-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`ids`]    | `ZoneId`, `DeviceId`                          |
//! | [`rng`]    | `SimRng` (seeded, with weighted choice)       |
//! | [`params`] | `SimParams`                                   |
//! | [`error`]  | `FootfallError`, `FootfallResult`             |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FootfallError, FootfallResult};
pub use ids::{DeviceId, ZoneId};
pub use params::SimParams;
pub use rng::SimRng;
