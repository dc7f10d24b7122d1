//! On-disk installation layout, addressed relative to the launcher's
//! directory.
//!
//! ```text
//! <prefix>/bin/bal                                   launcher (installation root)
//! <prefix>/dependencies/<runtime>/bin/java           managed runtimes
//! <prefix>/lib/ballerina-command-<VERSION>.jar       command archive
//! <prefix>/distributions/ballerina-version           default version marker
//! <prefix>/distributions/<version>/bin/{ball,ballerina}
//! <prefix>/scripts/bal_completion.bash
//! <prefix>/ballerina-command-tmp/install             update staging
//! <prefix>/conf/launcher.toml                        optional configuration
//! ```

use std::path::{Path, PathBuf};

pub const VERSION_MARKER: &str = "ballerina-version";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    prefix: PathBuf,
}

impl Layout {
    /// `root` is the directory containing the launcher binary.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let prefix = root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join(".."));
        Self { root, prefix }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn dependencies(&self) -> PathBuf {
        self.prefix.join("dependencies")
    }

    pub fn distributions(&self) -> PathBuf {
        self.prefix.join("distributions")
    }

    pub fn version_marker(&self) -> PathBuf {
        self.distributions().join(VERSION_MARKER)
    }

    pub fn distribution_home(&self, version: &str) -> PathBuf {
        self.distributions().join(version)
    }

    pub fn command_archive(&self, tool_version: &str) -> PathBuf {
        self.prefix
            .join("lib")
            .join(format!("ballerina-command-{tool_version}.jar"))
    }

    pub fn completion_script(&self) -> PathBuf {
        self.prefix.join("scripts").join("bal_completion.bash")
    }

    pub fn update_staging(&self) -> PathBuf {
        self.prefix.join("ballerina-command-tmp")
    }

    pub fn config_file(&self) -> PathBuf {
        self.prefix.join("conf").join("launcher.toml")
    }
}

/// Location of the per-user override marker under `home`.
pub fn user_version_marker(home: &Path) -> PathBuf {
    home.join(".ballerina").join(VERSION_MARKER)
}
