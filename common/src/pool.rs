//! Candidate device identities the simulator draws from.

use std::net::Ipv4Addr;

use crate::device::DeviceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    pub ip: Ipv4Addr,
    pub mac: &'static str,
    pub vendor: &'static str,
    pub kind: DeviceType,
}

impl PoolEntry {
    const fn new(ip: Ipv4Addr, mac: &'static str, vendor: &'static str, kind: DeviceType) -> Self {
        Self { ip, mac, vendor, kind }
    }
}

pub const DEVICE_POOL: [PoolEntry; 7] = [
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 101), "B8:27:EB:01:23:45", "Raspberry Pi Foundation", DeviceType::Unknown),
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 105), "00:1A:2B:3C:4D:5E", "TP-Link", DeviceType::Router),
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 110), "F8:E0:79:12:34:56", "Wyze Labs", DeviceType::Camera),
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 112), "D8:F1:5B:78:9A:BC", "Philips", DeviceType::Lightbulb),
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 115), "A0:20:A6:DE:F0:12", "Belkin", DeviceType::SmartPlug),
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 120), "18:B4:30:34:56:78", "Google Inc.", DeviceType::Thermostat),
    PoolEntry::new(Ipv4Addr::new(192, 168, 1, 121), "C0:A1:B2:C3:D4:E5", "Generic IoT", DeviceType::Unknown),
];

/// Looks up a pool entry by dotted address.
pub fn find(ip: &str) -> Option<&'static PoolEntry> {
    let ip: Ipv4Addr = ip.parse().ok()?;
    DEVICE_POOL.iter().find(|entry| entry.ip == ip)
}
