//! The central **abstraction** for scan execution.
//!
//! A scan is any [`DeviceScanner`]: it runs to completion, streams its
//! progress to exactly one subscriber over an mpsc channel of [`ScanEvent`]s,
//! and resolves with the final device list.
//!
//! Event order is part of the contract:
//! * every device is announced by one `DeviceDiscovered` event,
//! * discoveries of a tick come before that tick's `ProgressUpdated`,
//! * `ScanCompleted` is always the last event.

use async_trait::async_trait;
use iotscan_common::device::Device;
use tokio::sync::mpsc;

mod simulated;

pub use simulated::SimulatedScanner;

/// Capacity of the channel returned by [`event_channel`].
pub const EVENT_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// Overall progress in percent, from the first step up to exactly 100.
    ProgressUpdated { percent: f64 },
    DeviceDiscovered(Device),
    /// All discovered devices, sorted by address.
    ScanCompleted(Vec<Device>),
}

#[async_trait]
pub trait DeviceScanner: Send {
    /// Runs a full scan, reporting through `events`.
    ///
    /// A closed receiver does not stop the scan.
    async fn scan(&mut self, events: mpsc::Sender<ScanEvent>) -> Vec<Device>;
}

pub fn event_channel() -> (mpsc::Sender<ScanEvent>, mpsc::Receiver<ScanEvent>) {
    mpsc::channel(EVENT_BUFFER)
}
