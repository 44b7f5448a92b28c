//! The `Simulator` handle and its background redistribution loop.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use chrono::Local;
use rustc_hash::FxHashMap;
use tracing::info;

use footfall_campus::ZoneTopology;
use footfall_core::{DeviceId, SimParams, SimRng, ZoneId};

use crate::mover;
use crate::population::PopulationState;
use crate::projector::{project_devices, DeviceEstimate};
use crate::snapshot::{Snapshot, ZoneTotal};
use crate::SimResult;

// ── CycleSummary ──────────────────────────────────────────────────────────────

/// What one simulation cycle did.  Returned by [`Simulator::run_cycle`] and
/// logged by the background loop.
#[derive(Clone, Debug)]
pub struct CycleSummary {
    /// 1-based count of cycles completed, including this one.
    pub cycle: u64,
    /// The zone that received biased inflow this cycle.
    pub hot_zone: ZoneId,
    /// Movement steps performed (some may have been no-ops).
    pub moves: u32,
    /// Total people transferred across all applied steps.
    pub people_moved: u32,
    /// Sum over all zone populations after the cycle.
    pub total: u64,
}

// ── Simulator ─────────────────────────────────────────────────────────────────

/// Shared state behind the [`Simulator`] handle.
///
/// `populations` is the single authoritative resource; every jointly
/// consistent read and every mutation holds its mutex.  `devices` is derived
/// and replaced wholesale once per cycle, so readers see either the complete
/// prior map or the complete new one, never a mix.
struct SimulatorInner {
    topology:    Arc<ZoneTopology>,
    params:      SimParams,
    populations: Mutex<PopulationState>,
    devices:     Mutex<FxHashMap<DeviceId, DeviceEstimate>>,
    /// Idempotent-start guard: a second background loop would break the
    /// sole-writer discipline, not merely waste a thread.
    started:  AtomicBool,
    shutdown: AtomicBool,
    cycles:   AtomicU64,
}

/// Cloneable handle to one campus simulation.
///
/// Owns the topology, the population state, and the derived device
/// estimates.  The background loop is started explicitly via
/// [`start`](Self::start) — never as a side effect of construction — so
/// tests can drive [`run_cycle`](Self::run_cycle) deterministically with a
/// seeded RNG instead.
#[derive(Clone)]
pub struct Simulator {
    inner: Arc<SimulatorInner>,
}

impl Simulator {
    /// Validate the parameters and initialize the population: `total_people`
    /// spread evenly across the topology's zones, remainder to the first
    /// zones in declared order.  (The topology builder guarantees at least
    /// one zone, so the distribution is always well defined.)
    pub fn new(topology: Arc<ZoneTopology>, params: SimParams) -> SimResult<Self> {
        params.validate()?;

        let populations =
            PopulationState::distribute_evenly(params.total_people, topology.zone_count());

        Ok(Self {
            inner: Arc::new(SimulatorInner {
                topology,
                params,
                populations: Mutex::new(populations),
                devices: Mutex::new(FxHashMap::default()),
                started: AtomicBool::new(false),
                shutdown: AtomicBool::new(false),
                cycles: AtomicU64::new(0),
            }),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn topology(&self) -> &ZoneTopology {
        &self.inner.topology
    }

    pub fn params(&self) -> &SimParams {
        &self.inner.params
    }

    /// Number of completed simulation cycles.
    pub fn cycles_completed(&self) -> u64 {
        self.inner.cycles.load(Ordering::Relaxed)
    }

    /// Whether the background loop has been started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.inner.started.load(Ordering::SeqCst) && !self.inner.shutdown.load(Ordering::SeqCst)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Launch the background loop.  Idempotent: the first call spawns the
    /// worker thread and returns `true`; every later call is a no-op
    /// returning `false`.
    pub fn start(&self) -> bool {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return false;
        }
        let sim = self.clone();
        thread::spawn(move || sim.background_loop());
        true
    }

    /// Signal the background loop to exit at its next cycle boundary.
    pub fn stop(&self) {
        self.inner.shutdown.store(true, Ordering::SeqCst);
    }

    fn background_loop(&self) {
        let mut rng = SimRng::new(self.inner.params.seed);
        let pause = Duration::from_millis(self.inner.params.cycle_interval_ms);

        while !self.inner.shutdown.load(Ordering::SeqCst) {
            let summary = self.run_cycle(&mut rng);
            info!(
                cycle = summary.cycle,
                hot_zone = self.topology().zone_name(summary.hot_zone),
                total = summary.total,
                moves = summary.moves,
                people_moved = summary.people_moved,
                "redistribution cycle complete"
            );
            thread::sleep(pause);
        }
    }

    // ── One simulation cycle ──────────────────────────────────────────────

    /// Run one full cycle: pick a hot zone, perform 20–50 movement steps all
    /// sharing it, then refresh the device estimates.
    ///
    /// Public so harnesses and tests can drive the simulation with their own
    /// seeded [`SimRng`] instead of the background timer.
    pub fn run_cycle(&self, rng: &mut SimRng) -> CycleSummary {
        let params = &self.inner.params;
        let zone_count = self.topology().zone_count();

        // One hot zone per cycle, uniform over all zones; every movement
        // step below shares it.
        let hot_zone = ZoneId(rng.gen_range(0..zone_count) as u16);

        let moves = rng.gen_range(params.min_moves_per_cycle..=params.max_moves_per_cycle);
        let mut people_moved = 0u32;
        for _ in 0..moves {
            if let Some(event) =
                mover::movement_step(&self.inner.populations, hot_zone, params, rng)
            {
                people_moved += event.people;
            }
        }

        // Refresh device estimates: copy the counts under the population
        // lock, derive the new map lock-free, then swap it in wholesale.
        let counts: Vec<u32> = self
            .inner
            .populations
            .lock()
            .expect("population lock poisoned")
            .counts()
            .to_vec();
        let stamp = Local::now().format("%H:%M:%S").to_string();
        let estimates = project_devices(&counts, self.topology(), params.max_jitter, &stamp, rng);
        *self.inner.devices.lock().expect("device lock poisoned") = estimates;

        let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
        let cycle = self.inner.cycles.fetch_add(1, Ordering::Relaxed) + 1;

        CycleSummary { cycle, hot_zone, moves, people_moved, total }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Atomic, consistent copy of every zone total in fixed topology order.
    ///
    /// The entire read happens under the population lock, strictly between
    /// two movement critical sections — a snapshot never reflects a
    /// partially applied transfer.
    pub fn snapshot(&self) -> Snapshot {
        let state = self.inner.populations.lock().expect("population lock poisoned");
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let zones = self
            .topology()
            .zone_ids()
            .map(|z| ZoneTotal {
                zone: self.topology().zone_name(z).to_owned(),
                total_foot_count: state.count(z),
            })
            .collect();
        Snapshot { timestamp, zones }
    }

    /// Copy of the current device→estimate map (the last completed
    /// projection; empty before the first cycle).
    pub fn device_estimates(&self) -> FxHashMap<DeviceId, DeviceEstimate> {
        self.inner.devices.lock().expect("device lock poisoned").clone()
    }
}
