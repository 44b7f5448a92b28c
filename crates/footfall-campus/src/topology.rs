//! Campus topology representation and builder.
//!
//! # Data layout
//!
//! Device names are stored in one flat `Vec<String>`, grouped by zone.
//! Given a `ZoneId z`, its devices occupy the slice:
//!
//! ```text
//! device_names[ zone_device_start[z] .. zone_device_start[z+1] ]
//! ```
//!
//! so a zone's devices form a contiguous `DeviceId` range and iteration is a
//! contiguous memory scan.  Zone order is declaration order and is the fixed
//! enumeration order used everywhere else (initial population distribution,
//! snapshots, device projection).
//!
//! The topology is immutable after [`ZoneTopologyBuilder::build`]; zones and
//! their device lists never change for the lifetime of the process.

use footfall_core::{DeviceId, ZoneId};

use crate::{CampusError, CampusResult};

// ── ZoneTopology ──────────────────────────────────────────────────────────────

/// The fixed catalog of zones and the device identifiers within each zone.
///
/// Do not construct directly; use [`ZoneTopologyBuilder`], which validates
/// the configuration.
pub struct ZoneTopology {
    /// Zone display names, indexed by `ZoneId`.  Declaration order.
    zone_names: Vec<String>,

    /// Flat device-name storage, grouped by zone.  Indexed by `DeviceId`.
    device_names: Vec<String>,

    /// Row pointer: devices of zone `z` are at DeviceIds
    /// `zone_device_start[z] .. zone_device_start[z+1]`.
    /// Length = `zone_count + 1`.
    zone_device_start: Vec<u32>,
}

impl ZoneTopology {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn zone_count(&self) -> usize {
        self.zone_names.len()
    }

    pub fn device_count_total(&self) -> usize {
        self.device_names.len()
    }

    // ── Zone accessors ────────────────────────────────────────────────────

    /// Iterator over all `ZoneId`s in declaration order.
    pub fn zone_ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        (0..self.zone_names.len()).map(|i| ZoneId(i as u16))
    }

    /// Display name of `zone`.
    ///
    /// # Panics
    /// Panics if `zone` is out of range for this topology.
    #[inline]
    pub fn zone_name(&self, zone: ZoneId) -> &str {
        &self.zone_names[zone.index()]
    }

    /// Look a zone up by display name.  O(zones) — fine at campus scale.
    pub fn find_zone(&self, name: &str) -> Option<ZoneId> {
        self.zone_names
            .iter()
            .position(|n| n == name)
            .map(|i| ZoneId(i as u16))
    }

    // ── Device accessors ──────────────────────────────────────────────────

    /// Device names of `zone`, in their fixed enumeration order.
    #[inline]
    pub fn devices_in(&self, zone: ZoneId) -> &[String] {
        let start = self.zone_device_start[zone.index()] as usize;
        let end   = self.zone_device_start[zone.index() + 1] as usize;
        &self.device_names[start..end]
    }

    /// Iterator over the `DeviceId`s of `zone`'s devices.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn device_ids_in(&self, zone: ZoneId) -> impl Iterator<Item = DeviceId> + '_ {
        let start = self.zone_device_start[zone.index()];
        let end   = self.zone_device_start[zone.index() + 1];
        (start..end).map(DeviceId)
    }

    /// Number of devices configured in `zone`.  May be zero.
    #[inline]
    pub fn device_count(&self, zone: ZoneId) -> usize {
        self.devices_in(zone).len()
    }

    /// Display name of `device`.
    ///
    /// # Panics
    /// Panics if `device` is out of range for this topology.
    #[inline]
    pub fn device_name(&self, device: DeviceId) -> &str {
        &self.device_names[device.index()]
    }

    /// The zone `device` belongs to.  Binary search over the row pointer.
    pub fn zone_of(&self, device: DeviceId) -> ZoneId {
        // partition_point returns the count of start offsets <= device.0,
        // which is one past the owning zone's index.
        let i = self.zone_device_start.partition_point(|&s| s <= device.0);
        ZoneId((i - 1) as u16)
    }
}

// ── ZoneTopologyBuilder ───────────────────────────────────────────────────────

/// Construct a [`ZoneTopology`] incrementally, then call [`build`](Self::build).
///
/// Zones are enumerated in the order they are added.  `build()` validates
/// that at least one zone exists and that zone names are unique; device
/// names are not required to be unique across zones (identity is the
/// `DeviceId`, not the display name).
#[derive(Default)]
pub struct ZoneTopologyBuilder {
    zones: Vec<(String, Vec<String>)>,
}

impl ZoneTopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zone with an explicit device list.  Empty lists are legal —
    /// such zones hold population but emit no device estimates.
    pub fn add_zone(
        &mut self,
        name: impl Into<String>,
        devices: Vec<String>,
    ) -> &mut Self {
        self.zones.push((name.into(), devices));
        self
    }

    /// Add a zone whose devices are named `{prefix}-{i}` for `i` in
    /// `1..=count` (1-based, matching sensor naming conventions like
    /// `Classroom-1` … `Classroom-15`).
    pub fn add_numbered_zone(
        &mut self,
        name: impl Into<String>,
        prefix: &str,
        count: u32,
    ) -> &mut Self {
        let devices = (1..=count).map(|i| format!("{prefix}-{i}")).collect();
        self.add_zone(name, devices)
    }

    /// Validate and build the immutable topology.
    pub fn build(self) -> CampusResult<ZoneTopology> {
        if self.zones.is_empty() {
            return Err(CampusError::EmptyTopology);
        }
        for (i, (name, _)) in self.zones.iter().enumerate() {
            if self.zones[..i].iter().any(|(other, _)| other == name) {
                return Err(CampusError::DuplicateZone(name.clone()));
            }
        }

        let mut zone_names = Vec::with_capacity(self.zones.len());
        let mut device_names = Vec::new();
        let mut zone_device_start = Vec::with_capacity(self.zones.len() + 1);

        zone_device_start.push(0);
        for (name, devices) in self.zones {
            zone_names.push(name);
            device_names.extend(devices);
            zone_device_start.push(device_names.len() as u32);
        }

        Ok(ZoneTopology { zone_names, device_names, zone_device_start })
    }
}
