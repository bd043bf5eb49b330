//! # Scan Session
//!
//! The presentation state of one scanner front end: whether a scan is running,
//! how far it got, what it found and which device the user picked.
//!
//! The state only moves through [`ScanSession::start`], [`ScanSession::apply`]
//! and [`ScanSession::select`]; callers read it but never write it directly.

use std::collections::BTreeMap;

use iotscan_common::device::Device;
use iotscan_common::error::SessionError;
use iotscan_common::vulnerability::Severity;

use crate::scanner::ScanEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Completed,
}

/// Number of devices at each risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskSummary {
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanSession {
    phase: ScanPhase,
    progress: f64,
    devices: Vec<Device>,
    selected: Option<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new scan, discarding the previous results.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase == ScanPhase::Scanning {
            return Err(SessionError::ScanInProgress);
        }
        self.phase = ScanPhase::Scanning;
        self.progress = 0.0;
        self.devices.clear();
        self.selected = None;
        Ok(())
    }

    /// Folds one scanner event into the state.
    pub fn apply(&mut self, event: ScanEvent) -> Result<(), SessionError> {
        if self.phase != ScanPhase::Scanning {
            return Err(SessionError::NotScanning);
        }
        match event {
            ScanEvent::ProgressUpdated { percent } => {
                self.progress = self.progress.max(percent.min(100.0));
            }
            ScanEvent::DeviceDiscovered(device) => {
                if !self.devices.iter().any(|known| known.id() == device.id()) {
                    self.devices.push(device);
                }
            }
            ScanEvent::ScanCompleted(devices) => {
                self.devices = devices;
                self.progress = 100.0;
                self.phase = ScanPhase::Completed;
            }
        }
        Ok(())
    }

    /// Selects a discovered device by address or hardware address.
    pub fn select(&mut self, needle: &str) -> Result<&Device, SessionError> {
        if self.phase != ScanPhase::Completed {
            return Err(SessionError::NotCompleted);
        }
        let device = self
            .devices
            .iter()
            .find(|device| device.matches(needle))
            .ok_or_else(|| SessionError::UnknownDevice(needle.to_string()))?;
        self.selected = Some(device.id().to_string());
        Ok(device)
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn selected(&self) -> Option<&Device> {
        let id = self.selected.as_deref()?;
        self.devices.iter().find(|device| device.id() == id)
    }

    pub fn risk_summary(&self) -> RiskSummary {
        self.devices
            .iter()
            .fold(RiskSummary::default(), |mut summary, device| {
                match device.risk() {
                    Severity::High => summary.high += 1,
                    Severity::Medium => summary.medium += 1,
                    Severity::Low => summary.low += 1,
                }
                summary
            })
    }

    /// How many devices carry each vulnerability, keyed by name.
    pub fn finding_tally(&self) -> BTreeMap<&'static str, usize> {
        let mut tally: BTreeMap<&'static str, usize> = BTreeMap::new();
        for vuln in self.devices.iter().flat_map(Device::vulnerabilities) {
            *tally.entry(vuln.name).or_default() += 1;
        }
        tally
    }

    pub fn status_line(&self) -> String {
        match self.phase {
            ScanPhase::Scanning => {
                format!("Scanning Network... ({}%)", self.progress.round() as u32)
            }
            ScanPhase::Completed if !self.devices.is_empty() => {
                format!("Scan Complete: {} devices found", self.devices.len())
            }
            _ => String::from("Ready to Scan"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotscan_common::pool;
    use iotscan_common::vulnerability::Finding;

    fn device(ip: &str, findings: &[Finding]) -> Device {
        Device::assess(pool::find(ip).expect("pool entry"), findings)
    }

    #[test]
    fn start_is_refused_while_scanning() {
        let mut session = ScanSession::new();
        assert!(!session.is_scanning());
        session.start().expect("first start");
        assert!(session.is_scanning());
        assert_eq!(session.start(), Err(SessionError::ScanInProgress));
    }

    #[test]
    fn events_need_a_running_scan() {
        let mut session = ScanSession::new();
        assert_eq!(
            session.apply(ScanEvent::ProgressUpdated { percent: 5.0 }),
            Err(SessionError::NotScanning)
        );
    }

    #[test]
    fn discoveries_accumulate_without_duplicates() {
        let mut session = ScanSession::new();
        session.start().expect("start");
        let camera = device("192.168.1.110", &[]);

        session.apply(ScanEvent::DeviceDiscovered(camera.clone())).expect("apply");
        session.apply(ScanEvent::DeviceDiscovered(camera)).expect("apply");
        session.apply(ScanEvent::ProgressUpdated { percent: 40.0 }).expect("apply");
        session.apply(ScanEvent::ProgressUpdated { percent: 35.0 }).expect("apply");

        assert_eq!(session.devices().len(), 1);
        assert_eq!(session.progress(), 40.0);
        assert_eq!(session.status_line(), "Scanning Network... (40%)");
    }

    #[test]
    fn completion_freezes_and_restart_clears() {
        let mut session = ScanSession::new();
        session.start().expect("start");
        let devices = vec![
            device("192.168.1.105", &[Finding::DefaultCredentials]),
            device("192.168.1.110", &[Finding::OutdatedFirmware]),
            device("192.168.1.112", &[]),
        ];
        session.apply(ScanEvent::ScanCompleted(devices)).expect("apply");

        assert_eq!(session.phase(), ScanPhase::Completed);
        assert!(!session.is_scanning());
        assert_eq!(session.status_line(), "Scan Complete: 3 devices found");
        assert_eq!(
            session.risk_summary(),
            RiskSummary { high: 1, medium: 1, low: 1 }
        );
        assert_eq!(session.finding_tally().get("Default Credentials"), Some(&1));

        let picked = session.select("192.168.1.110").expect("select").id().to_string();
        assert_eq!(session.selected().map(Device::id), Some(picked.as_str()));

        session.start().expect("restart");
        assert!(session.devices().is_empty());
        assert!(session.selected().is_none());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn selection_errors() {
        let mut session = ScanSession::new();
        assert_eq!(
            session.select("192.168.1.110").err(),
            Some(SessionError::NotCompleted)
        );

        session.start().expect("start");
        session.apply(ScanEvent::ScanCompleted(Vec::new())).expect("apply");
        assert_eq!(
            session.select("10.0.0.1").err(),
            Some(SessionError::UnknownDevice("10.0.0.1".to_string()))
        );
        assert_eq!(session.status_line(), "Ready to Scan");
    }
}
