//! Error types for the failure modes that end or degrade a run
//!
//! Per-request transport failures are not errors in this sense; they are
//! absorbed into the per-host statistics by the prober.

use std::path::PathBuf;
use thiserror::Error;

/// Run-level errors
#[derive(Debug, Error)]
pub enum Error {
    /// The hosts file could not be opened or read. Fatal.
    #[error("failed to read hosts file {}", .path.display())]
    HostsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every supplied host failed validation. Fatal.
    #[error("no valid hosts to probe")]
    NoValidHosts,

    /// The report could not be written to the configured output file.
    /// Reported to the user without changing the exit code.
    #[error("failed to write report to {}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
