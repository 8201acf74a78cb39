//! Host probing
//!
//! Issues sequential GET requests against a host and records the outcome
//! of every attempt. All per-request failures are absorbed into the
//! statistics; nothing raises past an attempt.

use crate::stats::{Bucket, HostStats, ProbeAttempt};
use reqwest::Client;
use std::time::{Duration, Instant};

/// Sequential GET prober over a shared HTTP client
pub struct Prober {
    client: Client,
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober {
    /// Create a new prober
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Build a prober around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Issue `count` sequential GET requests against `url`.
    ///
    /// Each request waits for completion before the next begins, with no
    /// delay or retry in between. Transport failures are counted, never
    /// propagated; the returned statistics cover exactly `count` attempts.
    pub async fn probe_host(&self, url: &str, count: u32) -> HostStats {
        tracing::info!(host = %url, count = %count, "probing host");

        let mut attempts = Vec::with_capacity(count as usize);
        for i in 0..count {
            let index = i + 1;
            let start = Instant::now();

            let attempt = match self.client.get(url).send().await {
                Ok(response) => {
                    let elapsed = start.elapsed();
                    let status = response.status().as_u16();
                    tracing::debug!(
                        host = %url,
                        index = %index,
                        status = %status,
                        elapsed_s = %elapsed.as_secs_f64(),
                        "request completed"
                    );

                    ProbeAttempt {
                        index,
                        bucket: Bucket::from_status(status),
                        status_code: Some(status),
                        elapsed: Some(elapsed),
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::debug!(host = %url, index = %index, error = %e, "request failed");

                    ProbeAttempt {
                        index,
                        bucket: Bucket::Error,
                        status_code: None,
                        elapsed: None,
                        error: Some(e.to_string()),
                    }
                }
            };

            attempts.push(attempt);
        }

        let stats = HostStats::from_attempts(url, attempts);
        tracing::info!(
            host = %url,
            success = %stats.success,
            failed = %stats.failed,
            errors = %stats.errors,
            "host probed"
        );

        stats
    }
}
