//! Assigns simulated findings to a pool identity.

use iotscan_common::device::{Device, DeviceType};
use iotscan_common::pool::PoolEntry;
use iotscan_common::vulnerability::Finding;

use crate::random::RandomSource;

/// Probability of each independent draw, in draw order.
pub const DEFAULT_CREDENTIALS_CHANCE: f64 = 0.5;
pub const TELNET_CHANCE: f64 = 0.7;
pub const FTP_CHANCE: f64 = 0.4;
pub const ADMIN_PANEL_CHANCE: f64 = 0.6;
pub const OUTDATED_FIRMWARE_CHANCE: f64 = 0.8;

/// Draws the findings for `entry` and builds the resulting [`Device`].
///
/// Telnet is only drawn for cameras and FTP only for routers, so those types
/// consume one extra draw from `random`.
pub fn assess(entry: &PoolEntry, random: &mut dyn RandomSource) -> Device {
    let mut findings: Vec<Finding> = Vec::new();

    if random.chance(DEFAULT_CREDENTIALS_CHANCE) {
        findings.push(Finding::DefaultCredentials);
    }
    if entry.kind == DeviceType::Camera && random.chance(TELNET_CHANCE) {
        findings.push(Finding::UnsecuredTelnet);
    }
    if entry.kind == DeviceType::Router && random.chance(FTP_CHANCE) {
        findings.push(Finding::UnsecuredFtp);
    }
    if random.chance(ADMIN_PANEL_CHANCE) {
        findings.push(Finding::UnencryptedAdminPanel);
    }
    if random.chance(OUTDATED_FIRMWARE_CHANCE) {
        findings.push(Finding::OutdatedFirmware);
    }

    Device::assess(entry, &findings)
}
