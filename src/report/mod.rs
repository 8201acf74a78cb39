//! Report rendering and output
//!
//! Pure text formatting of per-host statistics, written to stdout or to a
//! configured report file.

use crate::error::Error;
use crate::stats::HostStats;
use std::fs;
use std::path::Path;

/// Render one host's statistics as a fixed-format text block
pub fn render(stats: &HostStats) -> String {
    format!(
        "Host: {}\n\
         Success: {}\n\
         Failed: {}\n\
         Errors: {}\n\
         Min: {:.3} s\n\
         Max: {:.3} s\n\
         Avg: {:.3} s",
        stats.host,
        stats.success,
        stats.failed,
        stats.errors,
        stats.min.as_secs_f64(),
        stats.max.as_secs_f64(),
        stats.avg.as_secs_f64(),
    )
}

/// Render all host blocks, separated by blank lines
pub fn render_all(all: &[HostStats]) -> String {
    all.iter().map(render).collect::<Vec<_>>().join("\n\n")
}

/// Write the report to `output`, or to stdout when no file is configured.
///
/// A failed file write is returned to the caller; the report is not
/// re-printed to stdout in that case.
pub fn write_report(report: &str, output: Option<&Path>) -> Result<(), Error> {
    match output {
        Some(path) => {
            fs::write(path, format!("{report}\n")).map_err(|source| Error::ReportWrite {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(path = %path.display(), "report saved");
            Ok(())
        }
        None => {
            println!("{report}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Bucket, ProbeAttempt};
    use std::time::Duration;

    fn sample_stats() -> HostStats {
        HostStats::from_attempts(
            "https://example.com",
            vec![
                ProbeAttempt {
                    index: 1,
                    bucket: Bucket::Success,
                    status_code: Some(200),
                    elapsed: Some(Duration::from_millis(125)),
                    error: None,
                },
                ProbeAttempt {
                    index: 2,
                    bucket: Bucket::Failure,
                    status_code: Some(500),
                    elapsed: Some(Duration::from_millis(375)),
                    error: None,
                },
                ProbeAttempt {
                    index: 3,
                    bucket: Bucket::Error,
                    status_code: None,
                    elapsed: None,
                    error: Some("dns error".to_string()),
                },
            ],
        )
    }

    #[test]
    fn test_render_block_format() {
        let block = render(&sample_stats());
        assert_eq!(
            block,
            "Host: https://example.com\n\
             Success: 1\n\
             Failed: 1\n\
             Errors: 1\n\
             Min: 0.125 s\n\
             Max: 0.375 s\n\
             Avg: 0.250 s"
        );
    }

    #[test]
    fn test_render_zero_latency_host() {
        let stats = HostStats::from_attempts("https://down.example.com", vec![]);
        let block = render(&stats);
        assert!(block.contains("Min: 0.000 s"));
        assert!(block.contains("Max: 0.000 s"));
        assert!(block.contains("Avg: 0.000 s"));
    }

    #[test]
    fn test_render_all_separates_blocks_with_blank_line() {
        let stats = sample_stats();
        let report = render_all(&[stats.clone(), stats]);
        assert_eq!(report.matches("Host: https://example.com").count(), 2);
        assert!(report.contains("Avg: 0.250 s\n\nHost: https://example.com"));
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_report("Host: https://example.com", Some(&path)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Host: https://example.com\n");
    }

    #[test]
    fn test_write_report_failure_surfaces_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file.
        let err = write_report("report", Some(dir.path())).unwrap_err();
        assert!(matches!(err, Error::ReportWrite { .. }));
    }
}
