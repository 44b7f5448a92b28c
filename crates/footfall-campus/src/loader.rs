//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per zone, in the order zones should be enumerated:
//!
//! ```csv
//! zone,device_prefix,device_count
//! Block A,Classroom,15
//! Canteen,Canteen,5
//! Dorm-1,Dorm1-WiFi,10
//! ```
//!
//! Each zone's devices are named `{device_prefix}-{i}` for `i` in
//! `1..=device_count`.  A `device_count` of 0 declares a zone with no
//! devices — it still holds population but emits no device estimates.
//!
//! Zones needing irregular device lists can be assembled directly with
//! [`ZoneTopologyBuilder::add_zone`][crate::ZoneTopologyBuilder::add_zone].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::topology::{ZoneTopology, ZoneTopologyBuilder};
use crate::{CampusError, CampusResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ZoneRecord {
    zone:          String,
    device_prefix: String,
    device_count:  u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ZoneTopology`] from a CSV file.
pub fn load_topology_csv(path: &Path) -> CampusResult<ZoneTopology> {
    let file = std::fs::File::open(path).map_err(CampusError::Io)?;
    load_topology_reader(file)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedding a default
/// topology as a string constant in application binaries.
pub fn load_topology_reader<R: Read>(reader: R) -> CampusResult<ZoneTopology> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = ZoneTopologyBuilder::new();

    for result in csv_reader.deserialize::<ZoneRecord>() {
        let row = result.map_err(|e| CampusError::Parse(e.to_string()))?;
        builder.add_numbered_zone(row.zone, &row.device_prefix, row.device_count);
    }

    builder.build()
}
