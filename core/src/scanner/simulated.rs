use async_trait::async_trait;
use iotscan_common::config::ScanTiming;
use iotscan_common::device::{self, Device};
use iotscan_common::pool::{DEVICE_POOL, PoolEntry};
use tokio::sync::mpsc::Sender;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use super::{DeviceScanner, ScanEvent};
use crate::assessment;
use crate::random::{self, RandomSource};

const MIN_DEVICES: usize = 2;
const MAX_DEVICES: usize = 5;
/// Chance that a tick reveals one pending device.
const DISCOVERY_CHANCE: f64 = 0.5;

/// Timer-driven scan over the static device pool.
pub struct SimulatedScanner {
    timing: ScanTiming,
    random: Box<dyn RandomSource>,
    pool: Vec<PoolEntry>,
}

impl SimulatedScanner {
    pub fn new(timing: ScanTiming, random: Box<dyn RandomSource>) -> Self {
        Self {
            timing,
            random,
            pool: DEVICE_POOL.to_vec(),
        }
    }

    /// Replaces the candidate pool.
    pub fn with_pool(mut self, pool: Vec<PoolEntry>) -> Self {
        self.pool = pool;
        self
    }

    /// Picks between two and five distinct pool entries in random order.
    fn select_targets(&mut self) -> Vec<PoolEntry> {
        let mut targets: Vec<PoolEntry> = random::shuffled(&self.pool, self.random.as_mut());
        let wanted: usize = MIN_DEVICES + self.random.below(MAX_DEVICES - MIN_DEVICES + 1);
        targets.truncate(wanted);
        targets
    }

    async fn discover(&mut self, entry: PoolEntry, found: &mut Vec<Device>, events: &Sender<ScanEvent>) {
        let device: Device = assessment::assess(&entry, self.random.as_mut());
        info!(
            "Discovered {} at {} ({} risk)",
            device.kind(),
            device.ip(),
            device.risk()
        );
        found.push(device.clone());
        emit(events, ScanEvent::DeviceDiscovered(device)).await;
    }
}

#[async_trait]
impl DeviceScanner for SimulatedScanner {
    async fn scan(&mut self, events: Sender<ScanEvent>) -> Vec<Device> {
        let steps: u32 = self.timing.steps();
        let started = Instant::now();
        let mut pending: Vec<PoolEntry> = self.select_targets();
        let mut found: Vec<Device> = Vec::with_capacity(pending.len());

        debug!("Simulating {} devices over {steps} steps", pending.len());

        for step in 1..=steps {
            time::sleep_until(started + self.timing.offset(step)).await;

            if !pending.is_empty() && self.random.chance(DISCOVERY_CHANCE) {
                if let Some(entry) = pending.pop() {
                    self.discover(entry, &mut found, &events).await;
                }
            }

            // Whatever is left is flushed so progress never reaches 100 with
            // devices still unannounced.
            if step == steps {
                while let Some(entry) = pending.pop() {
                    self.discover(entry, &mut found, &events).await;
                }
            }

            let percent: f64 = progress_at(step, steps);
            debug!("Scan progress {percent:.0}%");
            emit(&events, ScanEvent::ProgressUpdated { percent }).await;
        }

        device::sort_by_address(&mut found);
        info!("Scan complete, {} devices found", found.len());
        emit(&events, ScanEvent::ScanCompleted(found.clone())).await;
        found
    }
}

fn progress_at(step: u32, steps: u32) -> f64 {
    if step >= steps {
        return 100.0;
    }
    f64::from(step) * 100.0 / f64::from(steps)
}

async fn emit(events: &Sender<ScanEvent>, event: ScanEvent) {
    if events.send(event).await.is_err() {
        debug!("Scan event dropped, no subscriber");
    }
}
