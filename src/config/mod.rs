//! Run configuration for host-check
//!
//! The CLI flags are parsed once into an immutable `RunConfig` that is
//! passed explicitly to the resolver and prober. There is no ambient or
//! global state.

use std::path::PathBuf;

/// Where the raw host list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
    /// Comma-separated list given on the command line
    List(String),
    /// Path to a newline-delimited hosts file
    File(PathBuf),
}

/// Configuration for one benchmarking run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Source of the raw host strings
    pub source: HostSource,
    /// Number of GET requests per host (always >= 1, enforced at parse time)
    pub count: u32,
    /// Report destination; stdout when `None`
    pub output: Option<PathBuf>,
}

impl RunConfig {
    /// Create a new run configuration
    pub fn new(source: HostSource, count: u32, output: Option<PathBuf>) -> Self {
        Self {
            source,
            count,
            output,
        }
    }
}
