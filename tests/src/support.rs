#![cfg(test)]
use std::collections::VecDeque;

use iotscan_core::random::RandomSource;
use iotscan_core::scanner::ScanEvent;
use tokio::sync::mpsc::Receiver;

/// Replays fixed outcomes; `chance` falls back to `false` and `below` to 0.
#[derive(Default)]
pub struct ScriptedRandom {
    pub chances: VecDeque<bool>,
    pub picks: VecDeque<usize>,
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn below(&mut self, upper: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(upper - 1)
    }
}

pub fn drain(rx: &mut Receiver<ScanEvent>) -> Vec<ScanEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
