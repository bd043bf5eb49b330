use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;

use crate::pool::PoolEntry;
use crate::vulnerability::{Finding, Severity, Vulnerability};

/// Ports every simulated device exposes regardless of findings.
pub const BASELINE_PORTS: [u16; 2] = [80, 443];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Router,
    Camera,
    Lightbulb,
    SmartPlug,
    Thermostat,
    Unknown,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Router => "Router",
            DeviceType::Camera => "Camera",
            DeviceType::Lightbulb => "Lightbulb",
            DeviceType::SmartPlug => "Smart-Plug",
            DeviceType::Thermostat => "Thermostat",
            DeviceType::Unknown => "Unknown",
        }
    }

    /// Whether `finding` can occur on this kind of device. Telnet is only
    /// checked on cameras and FTP only on routers.
    pub fn admits(self, finding: Finding) -> bool {
        match finding {
            Finding::UnsecuredTelnet => self == DeviceType::Camera,
            Finding::UnsecuredFtp => self == DeviceType::Router,
            _ => true,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered device with its assessed findings.
///
/// Only [`Device::assess`] builds one, so the risk level and the open ports
/// always agree with the vulnerability list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: String,
    ip: Ipv4Addr,
    mac: String,
    vendor: String,
    kind: DeviceType,
    risk: Severity,
    open_ports: BTreeSet<u16>,
    vulnerabilities: Vec<Vulnerability>,
}

impl Device {
    /// Builds a device from a pool identity and the findings that fired on it.
    ///
    /// Findings the device type does not admit are dropped. When nothing is
    /// left the informational [`Finding::StandardPortsOpen`] entry stands in,
    /// so a device is never clean of notes.
    pub fn assess(entry: &PoolEntry, findings: &[Finding]) -> Self {
        let mut findings: Vec<Finding> = findings
            .iter()
            .copied()
            .filter(|finding| entry.kind.admits(*finding))
            .collect();
        if findings.is_empty() {
            findings.push(Finding::StandardPortsOpen);
        }

        let mut open_ports: BTreeSet<u16> = BTreeSet::from(BASELINE_PORTS);
        open_ports.extend(findings.iter().filter_map(Finding::port));

        let risk: Severity = findings
            .iter()
            .map(Finding::severity)
            .max()
            .unwrap_or(Severity::Low);

        Self {
            id: entry.mac.to_string(),
            ip: entry.ip,
            mac: entry.mac.to_string(),
            vendor: entry.vendor.to_string(),
            kind: entry.kind,
            risk,
            open_ports,
            vulnerabilities: findings.iter().map(Finding::vulnerability).collect(),
        }
    }

    /// Stable identifier, derived from the hardware address.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    pub fn mac(&self) -> &str {
        &self.mac
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn kind(&self) -> DeviceType {
        self.kind
    }

    pub fn risk(&self) -> Severity {
        self.risk
    }

    pub fn open_ports(&self) -> &BTreeSet<u16> {
        &self.open_ports
    }

    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    /// True when `needle` is this device's address or hardware address.
    pub fn matches(&self, needle: &str) -> bool {
        self.ip.to_string() == needle || self.mac.eq_ignore_ascii_case(needle)
    }
}

/// Sorts devices by their dotted address string, the order reports use.
pub fn sort_by_address(devices: &mut [Device]) {
    devices.sort_by_cached_key(|device| device.ip.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool;

    fn camera() -> &'static PoolEntry {
        pool::find("192.168.1.110").expect("camera is in the pool")
    }

    #[test]
    fn forced_credentials_and_telnet_on_camera() {
        let device = Device::assess(
            camera(),
            &[Finding::DefaultCredentials, Finding::UnsecuredTelnet],
        );

        assert_eq!(device.risk(), Severity::High);
        assert_eq!(
            device.open_ports().iter().copied().collect::<Vec<u16>>(),
            vec![22, 23, 80, 443]
        );
        assert_eq!(device.vendor(), "Wyze Labs");
        assert_eq!(device.kind(), DeviceType::Camera);
        assert_eq!(device.id(), "F8:E0:79:12:34:56");
    }

    #[test]
    fn no_findings_yields_standard_ports_note() {
        let device = Device::assess(camera(), &[]);

        assert_eq!(device.vulnerabilities().len(), 1);
        assert_eq!(device.vulnerabilities()[0].name, "Standard Ports Open");
        assert_eq!(device.risk(), Severity::Low);
        assert_eq!(
            device.open_ports().iter().copied().collect::<Vec<u16>>(),
            vec![80, 443]
        );
    }

    #[test]
    fn high_finding_dominates_mediums() {
        let device = Device::assess(
            camera(),
            &[
                Finding::UnencryptedAdminPanel,
                Finding::OutdatedFirmware,
                Finding::DefaultCredentials,
            ],
        );
        assert_eq!(device.risk(), Severity::High);
    }

    #[test]
    fn medium_only_findings_are_medium() {
        let device = Device::assess(camera(), &[Finding::OutdatedFirmware]);
        assert_eq!(device.risk(), Severity::Medium);
        assert!(device.open_ports().contains(&80));
        assert!(device.open_ports().contains(&443));
    }

    #[test]
    fn sorts_lexically_by_address() {
        let mut devices: Vec<Device> = pool::DEVICE_POOL
            .iter()
            .rev()
            .map(|entry| Device::assess(entry, &[]))
            .collect();

        sort_by_address(&mut devices);

        let ips: Vec<String> = devices.iter().map(|d| d.ip().to_string()).collect();
        let mut expected = ips.clone();
        expected.sort();
        assert_eq!(ips, expected);
        assert_eq!(ips[0], "192.168.1.101");
    }

    #[test]
    fn service_findings_stay_on_their_device_type() {
        let router = pool::find("192.168.1.105").expect("router is in the pool");

        let camera = Device::assess(camera(), &[Finding::UnsecuredFtp]);
        assert_eq!(camera.vulnerabilities()[0].name, "Standard Ports Open");
        assert!(!camera.open_ports().contains(&21));
        assert_eq!(camera.risk(), Severity::Low);

        let router = Device::assess(router, &[Finding::UnsecuredTelnet, Finding::UnsecuredFtp]);
        assert_eq!(router.vulnerabilities().len(), 1);
        assert_eq!(router.vulnerabilities()[0].name, "Unsecured FTP");
        assert!(router.open_ports().contains(&21));
        assert!(!router.open_ports().contains(&23));
    }

    #[test]
    fn matches_address_or_mac() {
        let device = Device::assess(camera(), &[]);
        assert!(device.matches("192.168.1.110"));
        assert!(device.matches("f8:e0:79:12:34:56"));
        assert!(!device.matches("192.168.1.11"));
    }
}
