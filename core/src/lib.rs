//! Scan simulation, session state and report rendering for `iotscan`.

pub mod assessment;
pub mod export;
pub mod random;
pub mod report;
pub mod scanner;
pub mod session;
