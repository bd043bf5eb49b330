use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Invalid transitions of the scan session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a scan is already in progress")]
    ScanInProgress,
    #[error("no scan is running")]
    NotScanning,
    #[error("the scan has not completed yet")]
    NotCompleted,
    #[error("no discovered device matches '{0}'")]
    UnknownDevice(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("scan interval must be greater than zero")]
    ZeroInterval,
    #[error("scan interval {interval:?} is longer than the total duration {total:?}")]
    IntervalExceedsDuration { interval: Duration, total: Duration },
}
