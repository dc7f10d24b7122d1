//! Distribution version resolution.
//!
//! The default marker under the installation is required; without it no
//! distribution is installed. The per-user marker under `~/.ballerina` only
//! overrides it when it names a distribution that is actually installed; a
//! missing user marker means there is no override.

use crate::error::{LauncherError, Result};
use crate::layout::{Layout, user_version_marker};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Strip one trailing line ending.
pub fn trim_marker(raw: &str) -> &str {
    match raw.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => raw,
    }
}

/// Read a required marker file.
pub fn read_marker(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map(|raw| trim_marker(&raw).to_string())
        .map_err(|source| LauncherError::MarkerRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Read an optional marker file. Absent or empty yields `None`.
pub fn read_override(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(raw) => {
            let version = trim_marker(&raw);
            Ok((!version.is_empty()).then(|| version.to_string()))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(LauncherError::MarkerRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// The effective distribution version. An installation without a default
/// marker has no distribution at all.
pub fn resolve_distribution_version(layout: &Layout, home: Option<&Path>) -> Result<String> {
    let default = match read_marker(&layout.version_marker()) {
        Ok(version) => version,
        Err(LauncherError::MarkerRead { source, .. }) if source.kind() == ErrorKind::NotFound => {
            return Err(LauncherError::MissingDistribution);
        }
        Err(err) => return Err(err),
    };

    let Some(home) = home else {
        debug!("home directory unknown, no user override");
        return Ok(default);
    };

    let marker = user_version_marker(home);
    match read_override(&marker)? {
        Some(version) if layout.distribution_home(&version).is_dir() => {
            debug!(%version, "using user override");
            Ok(version)
        }
        Some(version) => {
            debug!(
                %version,
                %default,
                marker = %marker.display(),
                "ignoring user override, distribution is not installed"
            );
            Ok(default)
        }
        None => Ok(default),
    }
}
