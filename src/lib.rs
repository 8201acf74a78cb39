//! Host Check - HTTP Endpoint Benchmarking
//!
//! A command-line tool providing:
//! - Host list resolution from a comma-separated argument or a file
//! - Validation of hosts against a bare https URL shape
//! - Sequential GET probing with per-request latency timing
//! - Aggregated success/failure/error counts and latency statistics
//! - Fixed-format text reports to stdout or a file

pub mod config;
pub mod error;
pub mod hosts;
pub mod probe;
pub mod report;
pub mod stats;

pub use config::{HostSource, RunConfig};
pub use error::Error;
pub use probe::Prober;
pub use stats::{Bucket, HostStats, ProbeAttempt};

/// Application result type
pub type Result<T> = anyhow::Result<T>;
