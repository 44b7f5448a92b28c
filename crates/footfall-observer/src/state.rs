//! Shared application state for the observer API.

use footfall_sim::Simulator;

/// State injected into every handler via Axum's `State` extractor.
///
/// [`Simulator`] is already a cheap cloneable `Arc` handle, so the state
/// needs no extra wrapping — every handler reads through the simulator's
/// own locks and never blocks the redistribution loop for more than one
/// O(zones) copy.
#[derive(Clone)]
pub struct AppState {
    pub sim: Simulator,
}

impl AppState {
    pub fn new(sim: Simulator) -> Self {
        Self { sim }
    }
}
