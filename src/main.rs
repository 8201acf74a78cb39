//! Host Check - Main Application
//!
//! A command-line tool that benchmarks HTTP endpoints with sequential GET
//! requests and reports per-host latency statistics.

use clap::{ArgGroup, Parser};
use host_check::{
    config::{HostSource, RunConfig},
    error::Error,
    hosts::{resolve_hosts, validate_hosts},
    probe::Prober,
    report,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Host Check - benchmark HTTP endpoints with sequential GET requests
#[derive(Parser, Debug)]
#[command(name = "host-check")]
#[command(about = "Benchmark HTTP endpoints with sequential GET requests")]
#[command(version)]
#[command(group(ArgGroup::new("source").required(true).args(["hosts", "file"])))]
struct Cli {
    /// Comma-separated list of host URLs
    #[arg(short = 'H', long)]
    hosts: Option<String>,

    /// Path to a newline-delimited file of host URLs
    #[arg(short = 'F', long)]
    file: Option<PathBuf>,

    /// Number of requests per host
    #[arg(
        short = 'C',
        long,
        default_value = "1",
        env = "HOST_CHECK_COUNT",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    count: u32,

    /// File path for the report; stdout when omitted
    #[arg(short = 'O', long, env = "HOST_CHECK_OUTPUT")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let source = match (self.hosts, self.file) {
            (Some(list), None) => HostSource::List(list),
            (None, Some(path)) => HostSource::File(path),
            // The "source" ArgGroup guarantees exactly one of the two.
            _ => unreachable!("clap enforces exactly one host source"),
        };
        RunConfig::new(source, self.count, self.output)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env-backed flags see it.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("host_check={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.into_config();

    let raw = resolve_hosts(&config.source)?;
    let hosts = validate_hosts(raw);
    if hosts.is_empty() {
        return Err(Error::NoValidHosts.into());
    }

    let prober = Prober::new();
    let mut results = Vec::with_capacity(hosts.len());
    for host in &hosts {
        results.push(prober.probe_host(host.as_str(), config.count).await);
    }

    let rendered = report::render_all(&results);
    if let Err(e) = report::write_report(&rendered, config.output.as_deref()) {
        // Results are simply not persisted; the run itself succeeded.
        tracing::error!(error = %e, "failed to write report");
    }

    Ok(())
}
