//! `footfall-observer` — HTTP observer API for the campus simulation.
//!
//! A thin Axum layer over [`footfall_sim::Simulator`]: it registers routes,
//! encodes snapshots and device estimates as JSON, and sets the transport
//! headers (CORS, cache disabling).  All simulation semantics live in
//! `footfall-sim`; every handler is a read through the simulator's locks.
//!
//! # Crate layout
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`state`]  | `AppState` (shared `Simulator` handle)    |
//! | [`router`] | `build_router` + endpoint handlers        |
//! | [`server`] | `serve` (bind + run until process exit)   |
//! | [`error`]  | `ObserverError`, `ObserverResult<T>`      |

pub mod error;
pub mod router;
pub mod server;
pub mod state;

pub use error::{ObserverError, ObserverResult};
pub use router::build_router;
pub use server::serve;
pub use state::AppState;
