//! Per-device occupancy projection.
//!
//! Device counts are an *estimate* layered on top of the authoritative zone
//! totals: each zone's population is split across its devices by floor
//! division (earlier devices absorb the remainder), then each device gets an
//! independent display jitter and a clamp at zero.  The jittered values are
//! not reconciled back to the zone total — cosmetic variation is the point,
//! and the authoritative numbers live in the zone counts.
//!
//! The whole map is recomputed from scratch every cycle and swapped in
//! wholesale; previous estimates are discarded.

use rustc_hash::FxHashMap;

use footfall_campus::ZoneTopology;
use footfall_core::{DeviceId, SimRng, ZoneId};

/// Estimated occupancy for one device at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceEstimate {
    /// The zone the device belongs to.
    pub zone: ZoneId,
    /// Jittered, zero-clamped occupancy estimate.
    pub foot_count: u32,
    /// Wall-clock stamp of the projection cycle (`HH:MM:SS`).
    pub timestamp: String,
}

/// Derive a fresh device→estimate map from per-zone populations.
///
/// `counts` is indexed by `ZoneId` and must match `topology.zone_count()`.
/// Zones with no configured devices contribute no records (and divide by a
/// single phantom slot rather than by zero).
pub fn project_devices(
    counts:     &[u32],
    topology:   &ZoneTopology,
    max_jitter: i32,
    timestamp:  &str,
    rng:        &mut SimRng,
) -> FxHashMap<DeviceId, DeviceEstimate> {
    let mut estimates =
        FxHashMap::with_capacity_and_hasher(topology.device_count_total(), Default::default());

    for zone in topology.zone_ids() {
        let population = counts[zone.index()];
        let slots = (topology.device_count(zone).max(1)) as u32;
        let base = population / slots;
        let remainder = (population - base * slots) as usize;

        for (i, device) in topology.device_ids_in(zone).enumerate() {
            let assigned = base + u32::from(i < remainder);
            let jitter = rng.gen_range(-max_jitter..=max_jitter);
            let foot_count = (i64::from(assigned) + i64::from(jitter)).max(0) as u32;
            estimates.insert(
                device,
                DeviceEstimate { zone, foot_count, timestamp: timestamp.to_owned() },
            );
        }
    }

    estimates
}
