//! campus — the seven-zone campus demo for the footfall simulator.
//!
//! Boots the standard campus profile (four classroom blocks, the canteen,
//! two dorms — 1,000 people, 90 devices), starts the background
//! redistribution loop, and serves the observer API.
//!
//! # Environment
//!
//! | Variable               | Effect                                        |
//! |------------------------|-----------------------------------------------|
//! | `FOOTFALL_ADDR`        | Listen address (default `0.0.0.0:5000`)       |
//! | `FOOTFALL_DISABLE_SIM` | `1` skips starting the background loop, so a  |
//! |                        | harness can poll the static initial state or  |
//! |                        | drive cycles on its own terms                 |
//! | `RUST_LOG`             | Log filter (default `info`)                   |

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use footfall_campus::load_topology_reader;
use footfall_core::SimParams;
use footfall_observer::{serve, AppState};
use footfall_sim::Simulator;

// ── Campus profile ────────────────────────────────────────────────────────────

// One row per zone; row order is the zone enumeration order everywhere
// (initial distribution, snapshots, device projection).
const CAMPUS_CSV: &str = "\
zone,device_prefix,device_count
Block A,Classroom,15
Block B,Classroom,15
Block C,Classroom,15
Block D,Classroom,15
Canteen,Canteen,5
Dorm-1,Dorm1-WiFi,10
Dorm-2,Dorm2-WiFi,15
";

const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let topology = Arc::new(load_topology_reader(Cursor::new(CAMPUS_CSV))?);
    let sim = Simulator::new(topology, SimParams::default())?;

    if std::env::var("FOOTFALL_DISABLE_SIM").as_deref() == Ok("1") {
        tracing::info!("FOOTFALL_DISABLE_SIM=1 — background loop not started");
    } else {
        sim.start();
    }

    let addr: SocketAddr = std::env::var("FOOTFALL_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    serve(AppState::new(sim), addr).await?;
    Ok(())
}
