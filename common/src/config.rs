use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub struct Config {
    /// Suppresses headers and decorations, twice also drops the device tree.
    pub quiet: u8,
    pub no_banner: bool,
    pub timing: ScanTiming,
    /// Fixed seed for reproducible scans; entropy when unset.
    pub seed: Option<u64>,
    /// Directory that exported reports are written into.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            timing: ScanTiming::default(),
            seed: None,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Wall-clock shape of a simulated scan: a total duration split into equal steps.
///
/// The interval sets how many steps there are. When it does not divide the
/// total evenly the steps are stretched so the last one still lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTiming {
    total: Duration,
    interval: Duration,
}

impl ScanTiming {
    pub const DEFAULT_TOTAL: Duration = Duration::from_millis(5000);
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(250);

    pub fn new(total: Duration, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if interval > total {
            return Err(ConfigError::IntervalExceedsDuration { interval, total });
        }
        Ok(Self { total, interval })
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks in a scan, never zero.
    pub fn steps(&self) -> u32 {
        let steps = self.total.as_nanos() / self.interval.as_nanos();
        u32::try_from(steps).unwrap_or(u32::MAX).max(1)
    }

    /// Time from the start of a scan to the end of `step`.
    pub fn offset(&self, step: u32) -> Duration {
        let steps = u128::from(self.steps());
        let step = u128::from(step).min(steps);
        let nanos = self.total.as_nanos() * step / steps;
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            total: Self::DEFAULT_TOTAL,
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}
