//! Host list resolution and validation
//!
//! Resolves the raw host strings from the configured source and filters
//! them down to entries that look like bare https URLs. Invalid entries
//! are warned about and dropped, never fatal individually.

use crate::config::HostSource;
use crate::error::Error;
use std::fmt;
use std::fs;

/// A host URL that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// The underlying URL string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the raw host strings from the configured source.
///
/// Comma-list entries are passed through verbatim, duplicates and order
/// preserved. File lines are trimmed and blank lines skipped; a file that
/// cannot be read is fatal.
pub fn resolve_hosts(source: &HostSource) -> Result<Vec<String>, Error> {
    match source {
        HostSource::List(list) => Ok(list.split(',').map(str::to_string).collect()),
        HostSource::File(path) => {
            let contents = fs::read_to_string(path).map_err(|source| Error::HostsFile {
                path: path.clone(),
                source,
            })?;
            Ok(contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect())
        }
    }
}

/// Keep the entries that satisfy [`is_valid_host_url`], warning about the
/// rest. Order is preserved.
pub fn validate_hosts(raw: Vec<String>) -> Vec<Host> {
    let mut valid = Vec::with_capacity(raw.len());
    for entry in raw {
        if is_valid_host_url(&entry) {
            valid.push(Host(entry));
        } else {
            tracing::warn!(host = %entry, "invalid host URL, skipping");
        }
    }
    valid
}

/// Check that a string has the shape `https://<host>` where `<host>` uses
/// only word characters, dots and hyphens and contains an interior dot.
///
/// The scheme must be exactly `https`. Ports, paths, queries and embedded
/// whitespace all fail the character check. `https://localhost` (no dot),
/// `https://.com` (leading dot only) and `https://example.` (trailing dot
/// only) are all rejected; `https://a.b.c` passes.
pub fn is_valid_host_url(url: &str) -> bool {
    let Some(host) = url.strip_prefix("https://") else {
        return false;
    };
    if host.is_empty() {
        return false;
    }
    if !host
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
    {
        return false;
    }
    // Require a dot with at least one character on each side.
    host.char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < host.len())
}
