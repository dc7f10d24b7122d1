//! Runtime locator.
//!
//! Resolution is a chain: the first candidate directory that exists under
//! `<prefix>/dependencies` wins, otherwise the bare executable name is left
//! to the process search path. A missing ambient runtime is only noticed
//! when the launch fails.

use crate::config::LauncherConfig;
use crate::layout::Layout;
use bal_shim::{PairResolver, TargetResolver};
use std::env::consts::EXE_SUFFIX;
use std::path::PathBuf;
use tracing::debug;

/// Runtimes bundled with the installation, in priority order.
pub struct ManagedRuntime {
    candidates: Vec<PathBuf>,
}

impl ManagedRuntime {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }
}

impl TargetResolver for ManagedRuntime {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        let dir = self.candidates.iter().find(|dir| dir.exists())?;
        debug!(runtime = %dir.display(), "using managed runtime");
        Some(dir.join("bin").join(format!("{command}{EXE_SUFFIX}")))
    }
}

/// Runtime found through `PATH` by the OS at launch time.
pub struct AmbientRuntime;

impl TargetResolver for AmbientRuntime {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        debug!(command, "no managed runtime, relying on the search path");
        Some(PathBuf::from(command))
    }
}

pub fn locate_runtime(layout: &Layout, config: &LauncherConfig) -> PathBuf {
    let resolver = PairResolver::new(
        ManagedRuntime::new(config.runtime_dirs(&layout.dependencies())),
        AmbientRuntime,
    );
    resolver
        .resolve(&config.runtime_exe)
        .unwrap_or_else(|| PathBuf::from(&config.runtime_exe))
}
