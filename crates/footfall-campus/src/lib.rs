//! `footfall-campus` — zone and device topology.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`topology`] | `ZoneTopology`, `ZoneTopologyBuilder`             |
//! | [`loader`]   | `load_topology_csv`, `load_topology_reader`       |
//! | [`error`]    | `CampusError`, `CampusResult<T>`                  |
//!
//! The topology is the static half of the simulation: the ordered set of
//! zone names and, for each zone, its ordered list of device identifiers.
//! It is built once at startup and shared read-only (typically behind an
//! `Arc`) between the simulation loop and every snapshot reader.

pub mod error;
pub mod loader;
pub mod topology;

#[cfg(test)]
mod tests;

pub use error::{CampusError, CampusResult};
pub use loader::{load_topology_csv, load_topology_reader};
pub use topology::{ZoneTopology, ZoneTopologyBuilder};
