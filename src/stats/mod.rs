//! Probe outcome types and aggregation
//!
//! Records the outcome of every request attempt and folds a host's
//! attempts into summary statistics.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classification of one probe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    /// Response with a 200-399 status
    Success,
    /// Response with a 400-599 status
    Failure,
    /// Transport-level failure, no status received
    Error,
    /// Response with a status below 200 or at 600 and above; counted in
    /// no counter, latency still sampled
    Unclassified,
}

impl Bucket {
    /// Bucket a received status code by range
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=399 => Bucket::Success,
            400..=599 => Bucket::Failure,
            _ => Bucket::Unclassified,
        }
    }
}

/// Outcome of a single GET request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeAttempt {
    /// Request index (1-based)
    pub index: u32,
    /// Classification of the attempt
    pub bucket: Bucket,
    /// Response status code (if received)
    pub status_code: Option<u16>,
    /// Wall-clock latency; `None` exactly when no status was received
    pub elapsed: Option<Duration>,
    /// Error message (transport failures only)
    pub error: Option<String>,
}

/// Aggregated statistics for one host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostStats {
    /// The probed host URL
    pub host: String,
    /// Attempts with a 200-399 status
    pub success: u32,
    /// Attempts with a 400-599 status
    pub failed: u32,
    /// Attempts that failed in transport
    pub errors: u32,
    /// Minimum latency over the timed attempts
    pub min: Duration,
    /// Maximum latency over the timed attempts
    pub max: Duration,
    /// Average latency over the timed attempts
    pub avg: Duration,
    /// Individual attempt outcomes
    pub attempts: Vec<ProbeAttempt>,
}

impl HostStats {
    /// Fold per-attempt outcomes into summary statistics.
    ///
    /// Latency statistics cover exactly the attempts that produced a
    /// status code; transport errors contribute no sample. With no
    /// samples, min, max and avg are all zero.
    pub fn from_attempts(host: impl Into<String>, attempts: Vec<ProbeAttempt>) -> Self {
        let mut success = 0;
        let mut failed = 0;
        let mut errors = 0;
        for attempt in &attempts {
            match attempt.bucket {
                Bucket::Success => success += 1,
                Bucket::Failure => failed += 1,
                Bucket::Error => errors += 1,
                Bucket::Unclassified => {}
            }
        }

        let samples: Vec<Duration> = attempts.iter().filter_map(|a| a.elapsed).collect();
        let (min, max, avg) = if samples.is_empty() {
            (Duration::ZERO, Duration::ZERO, Duration::ZERO)
        } else {
            let min = samples.iter().copied().min().unwrap_or(Duration::ZERO);
            let max = samples.iter().copied().max().unwrap_or(Duration::ZERO);
            let total: Duration = samples.iter().sum();
            (min, max, total / samples.len() as u32)
        };

        Self {
            host: host.into(),
            success,
            failed,
            errors,
            min,
            max,
            avg,
            attempts,
        }
    }

    /// Number of latency samples behind the min/max/avg figures
    pub fn sample_count(&self) -> usize {
        self.attempts.iter().filter(|a| a.elapsed.is_some()).count()
    }
}
