//! Axum router and endpoint handlers for the observer API.
//!
//! # Endpoints
//!
//! | Method | Path        | Description                                      |
//! |--------|-------------|--------------------------------------------------|
//! | `GET`  | `/`         | Service status (cycle count, dimensions)         |
//! | `GET`  | `/get_data` | Current zone-total snapshot, never cached        |
//! | `GET`  | `/devices`  | Latest per-device occupancy estimates            |
//!
//! CORS is configured to allow any origin so dashboards can poll from other
//! hosts during development.  `/get_data` carries cache-disabling headers:
//! every poll must reflect the latest simulation state, never a cached
//! prior response.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use footfall_core::DeviceId;
use footfall_sim::DeviceEstimate;

use crate::state::AppState;

/// Build the complete Axum router for the observer server.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status))
        .route("/get_data", get(get_data))
        .route("/devices", get(get_devices))
        .layer(cors)
        .with_state(state)
}

// ── GET / ─────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct StatusBody {
    running: bool,
    cycles_completed: u64,
    zones: usize,
    devices: usize,
    total_people: u32,
}

async fn status(State(state): State<AppState>) -> Json<StatusBody> {
    let sim = &state.sim;
    Json(StatusBody {
        running: sim.is_running(),
        cycles_completed: sim.cycles_completed(),
        zones: sim.topology().zone_count(),
        devices: sim.topology().device_count_total(),
        total_people: sim.params().total_people,
    })
}

// ── GET /get_data ─────────────────────────────────────────────────────────────

async fn get_data(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.sim.snapshot();
    (
        [
            (
                header::CACHE_CONTROL,
                "no-store, no-cache, must-revalidate, max-age=0",
            ),
            (header::PRAGMA, "no-cache"),
        ],
        Json(snapshot),
    )
}

// ── GET /devices ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DeviceRow {
    device: String,
    zone: String,
    foot_count: u32,
    timestamp: String,
}

async fn get_devices(State(state): State<AppState>) -> Json<Vec<DeviceRow>> {
    let topology = state.sim.topology();

    let mut estimates: Vec<(DeviceId, DeviceEstimate)> =
        state.sim.device_estimates().into_iter().collect();
    estimates.sort_by_key(|&(device, _)| device);

    let rows = estimates
        .into_iter()
        .map(|(device, est)| DeviceRow {
            device: topology.device_name(device).to_owned(),
            zone: topology.zone_name(est.zone).to_owned(),
            foot_count: est.foot_count,
            timestamp: est.timestamp,
        })
        .collect();

    Json(rows)
}
