//! Launcher configuration.
//!
//! Every field has a built-in default, so the file is optional. Lookup
//! order: `$BAL_LAUNCHER_CONFIG`, then `<prefix>/conf/launcher.toml`.
//!
//! ```toml
//! runtimes = ["jdk-21.0.2+13-jre", "jdk-17.0.7+7-jre"]
//! runtime_exe = "java"
//! distribution_executables = ["ball", "ballerina"]
//! ```

use crate::error::{LauncherError, Result};
use crate::layout::Layout;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "BAL_LAUNCHER_CONFIG";

/// Managed runtime directories, highest priority first.
pub const DEFAULT_RUNTIMES: &[&str] = &[
    "jdk-17.0.7+7-jre",
    "jdk-11.0.18+10-jre",
    "jdk-11.0.15+10-jre",
    "jdk-11.0.8+10-jre",
    "jdk8u265-b01-jre",
];

pub const DEFAULT_RUNTIME_EXE: &str = "java";

/// Distribution entry points under `<distribution>/bin`, preferred first.
pub const DEFAULT_DISTRIBUTION_EXECUTABLES: &[&str] = &["ball", "ballerina"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    pub runtimes: Vec<String>,
    pub runtime_exe: String,
    pub distribution_executables: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            runtimes: DEFAULT_RUNTIMES.iter().map(|s| s.to_string()).collect(),
            runtime_exe: DEFAULT_RUNTIME_EXE.to_string(),
            distribution_executables: DEFAULT_DISTRIBUTION_EXECUTABLES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LauncherConfig {
    /// Load the configuration for `layout`.
    ///
    /// An explicit `$BAL_LAUNCHER_CONFIG` must exist; the layout's own file
    /// may be absent.
    pub fn load(layout: &Layout) -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::read(Path::new(&path)),
            None => {
                let path = layout.config_file();
                if path.is_file() {
                    Self::read(&path)
                } else {
                    debug!(path = %path.display(), "no launcher configuration, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LauncherError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&raw).map_err(|source| LauncherError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded launcher configuration");
        Ok(config)
    }

    pub fn parse(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn runtime_dirs(&self, dependencies: &Path) -> Vec<PathBuf> {
        self.runtimes.iter().map(|r| dependencies.join(r)).collect()
    }
}
