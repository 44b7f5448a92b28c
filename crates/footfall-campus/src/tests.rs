//! Unit tests for the campus topology and its CSV loader.

use std::io::Cursor;

use footfall_core::{DeviceId, ZoneId};

use crate::{load_topology_reader, CampusError, ZoneTopology, ZoneTopologyBuilder};

fn two_zone_topology() -> ZoneTopology {
    let mut b = ZoneTopologyBuilder::new();
    b.add_zone("Library", vec!["L-1".into(), "L-2".into(), "L-3".into()]);
    b.add_zone("Gym", vec!["G-1".into()]);
    b.build().unwrap()
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn zones_enumerate_in_declaration_order() {
        let topo = two_zone_topology();
        assert_eq!(topo.zone_count(), 2);
        assert_eq!(topo.zone_name(ZoneId(0)), "Library");
        assert_eq!(topo.zone_name(ZoneId(1)), "Gym");
        let ids: Vec<ZoneId> = topo.zone_ids().collect();
        assert_eq!(ids, vec![ZoneId(0), ZoneId(1)]);
    }

    #[test]
    fn devices_form_contiguous_ranges() {
        let topo = two_zone_topology();
        assert_eq!(topo.device_count_total(), 4);
        assert_eq!(topo.devices_in(ZoneId(0)), ["L-1", "L-2", "L-3"]);
        assert_eq!(topo.devices_in(ZoneId(1)), ["G-1"]);

        let ids: Vec<DeviceId> = topo.device_ids_in(ZoneId(1)).collect();
        assert_eq!(ids, vec![DeviceId(3)]);
        assert_eq!(topo.device_name(DeviceId(3)), "G-1");
    }

    #[test]
    fn zone_of_maps_devices_back() {
        let topo = two_zone_topology();
        assert_eq!(topo.zone_of(DeviceId(0)), ZoneId(0));
        assert_eq!(topo.zone_of(DeviceId(2)), ZoneId(0));
        assert_eq!(topo.zone_of(DeviceId(3)), ZoneId(1));
    }

    #[test]
    fn zone_of_skips_empty_zones() {
        let mut b = ZoneTopologyBuilder::new();
        b.add_zone("Empty", vec![]);
        b.add_zone("Full", vec!["F-1".into(), "F-2".into()]);
        let topo = b.build().unwrap();

        assert_eq!(topo.device_count(ZoneId(0)), 0);
        assert!(topo.devices_in(ZoneId(0)).is_empty());
        assert_eq!(topo.zone_of(DeviceId(0)), ZoneId(1));
    }

    #[test]
    fn find_zone_by_name() {
        let topo = two_zone_topology();
        assert_eq!(topo.find_zone("Gym"), Some(ZoneId(1)));
        assert_eq!(topo.find_zone("Pool"), None);
    }

    #[test]
    fn numbered_devices_are_one_based() {
        let mut b = ZoneTopologyBuilder::new();
        b.add_numbered_zone("Canteen", "Canteen", 3);
        let topo = b.build().unwrap();
        assert_eq!(topo.devices_in(ZoneId(0)), ["Canteen-1", "Canteen-2", "Canteen-3"]);
    }

    #[test]
    fn empty_topology_rejected() {
        let result = ZoneTopologyBuilder::new().build();
        assert!(matches!(result, Err(CampusError::EmptyTopology)));
    }

    #[test]
    fn duplicate_zone_rejected() {
        let mut b = ZoneTopologyBuilder::new();
        b.add_zone("Library", vec![]);
        b.add_zone("Library", vec![]);
        assert!(matches!(b.build(), Err(CampusError::DuplicateZone(_))));
    }

    #[test]
    fn duplicate_device_names_across_zones_are_legal() {
        // Identity is the DeviceId; display names may repeat across zones.
        let mut b = ZoneTopologyBuilder::new();
        b.add_numbered_zone("Block A", "Classroom", 2);
        b.add_numbered_zone("Block B", "Classroom", 2);
        let topo = b.build().unwrap();
        assert_eq!(topo.device_name(DeviceId(0)), "Classroom-1");
        assert_eq!(topo.device_name(DeviceId(2)), "Classroom-1");
        assert_eq!(topo.zone_of(DeviceId(2)), ZoneId(1));
    }
}

#[cfg(test)]
mod loader {
    use super::*;

    const CSV: &str = "\
zone,device_prefix,device_count
Block A,Classroom,15
Canteen,Canteen,5
Dorm-1,Dorm1-WiFi,10
";

    #[test]
    fn loads_zones_in_file_order() {
        let topo = load_topology_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(topo.zone_count(), 3);
        assert_eq!(topo.zone_name(ZoneId(0)), "Block A");
        assert_eq!(topo.zone_name(ZoneId(2)), "Dorm-1");
        assert_eq!(topo.device_count_total(), 30);
        assert_eq!(topo.devices_in(ZoneId(1))[0], "Canteen-1");
        assert_eq!(topo.devices_in(ZoneId(2))[9], "Dorm1-WiFi-10");
    }

    #[test]
    fn zero_device_zone_loads() {
        let csv = "zone,device_prefix,device_count\nQuad,None,0\nHall,H,2\n";
        let topo = load_topology_reader(Cursor::new(csv)).unwrap();
        assert_eq!(topo.device_count(ZoneId(0)), 0);
        assert_eq!(topo.device_count(ZoneId(1)), 2);
    }

    #[test]
    fn malformed_count_is_parse_error() {
        let csv = "zone,device_prefix,device_count\nQuad,Q,many\n";
        let result = load_topology_reader(Cursor::new(csv));
        assert!(matches!(result, Err(CampusError::Parse(_))));
    }

    #[test]
    fn empty_file_is_empty_topology_error() {
        let csv = "zone,device_prefix,device_count\n";
        let result = load_topology_reader(Cursor::new(csv));
        assert!(matches!(result, Err(CampusError::EmptyTopology)));
    }
}
