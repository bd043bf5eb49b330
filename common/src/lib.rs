//! Shared data model for the simulated IoT security scanner.

pub mod config;
pub mod device;
pub mod error;
pub mod pool;
pub mod vulnerability;
