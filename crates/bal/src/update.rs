//! Post-update step of `bal update`.
//!
//! The command archive may leave a staging directory holding an `install`
//! script. It is run once, and the directory is removed whatever happens.

use crate::error::Result;
use crate::exit_codes::{FAILURE, OK};
use crate::layout::Layout;
use bal_shim::{Delegate, DispatchPlan};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Existing staging directory, removed on drop.
pub struct StagingDir(PathBuf);

impl StagingDir {
    /// `None` when nothing was staged.
    pub fn open(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        path.is_dir().then_some(Self(path))
    }

    pub fn install_script(&self) -> PathBuf {
        self.0.join("install")
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        if self.0.exists()
            && let Err(err) = std::fs::remove_dir_all(&self.0)
        {
            warn!(path = %self.0.display(), %err, "failed to remove update staging directory");
        }
    }
}

/// Run the staged installer, if any, and report the outcome on `out`.
pub fn finish(layout: &Layout, delegate: &mut dyn Delegate, out: &mut dyn Write) -> Result<i32> {
    let Some(staging) = StagingDir::open(layout.update_staging()) else {
        debug!("no staged update");
        return Ok(OK);
    };

    let code = match delegate.execute(&DispatchPlan::new(staging.install_script())) {
        Ok(code) => code,
        Err(err) => {
            warn!(%err, "staged installer could not be started");
            FAILURE
        }
    };

    if code != OK {
        writeln!(out, "Update failed due to errors")?;
        return Ok(code);
    }

    drop(staging);
    writeln!(out, "Update successfully completed")?;
    writeln!(out)?;
    writeln!(
        out,
        "If you want to update the Ballerina distribution, use 'bal dist update'"
    )?;
    Ok(OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    struct FixedCode(std::result::Result<i32, ()>, Vec<PathBuf>);

    impl Delegate for FixedCode {
        fn execute(&mut self, plan: &DispatchPlan) -> bal_shim::Result<i32> {
            self.1.push(plan.program().to_path_buf());
            self.0.map_err(|()| bal_shim::Error::Launch {
                program: plan.program().to_path_buf(),
                source: bal_platform::Error::NoParent(plan.program().to_path_buf()),
            })
        }
    }

    fn staged_layout(dir: &Path) -> Layout {
        let layout = Layout::new(dir.join("bin"));
        std::fs::create_dir_all(layout.update_staging()).unwrap();
        std::fs::write(layout.update_staging().join("install"), b"").unwrap();
        layout
    }

    #[test]
    fn test_staging_dir_removed_on_drop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ballerina-command-tmp");
        std::fs::create_dir_all(path.join("nested")).unwrap();

        let staging = StagingDir::open(&path).unwrap();
        assert_eq!(staging.install_script(), path.join("install"));
        drop(staging);

        assert!(!path.exists());
    }

    #[test]
    fn test_staging_dir_absent() {
        let dir = tempdir().unwrap();
        assert!(StagingDir::open(dir.path().join("missing")).is_none());
    }

    #[test]
    fn test_nothing_staged() {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path().join("bin"));
        let mut delegate = FixedCode(Ok(0), Vec::new());
        let mut out = Vec::new();

        assert_eq!(finish(&layout, &mut delegate, &mut out).unwrap(), OK);
        assert!(delegate.1.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_successful_install() {
        let dir = tempdir().unwrap();
        let layout = staged_layout(dir.path());
        let mut delegate = FixedCode(Ok(0), Vec::new());
        let mut out = Vec::new();

        assert_eq!(finish(&layout, &mut delegate, &mut out).unwrap(), OK);
        assert_eq!(delegate.1, [layout.update_staging().join("install")]);
        assert!(!layout.update_staging().exists());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Update successfully completed\n\n\
If you want to update the Ballerina distribution, use 'bal dist update'\n"
        );
    }

    #[test]
    fn test_failed_install_propagates_code() {
        let dir = tempdir().unwrap();
        let layout = staged_layout(dir.path());
        let mut delegate = FixedCode(Ok(7), Vec::new());
        let mut out = Vec::new();

        assert_eq!(finish(&layout, &mut delegate, &mut out).unwrap(), 7);
        assert!(!layout.update_staging().exists());
        assert_eq!(String::from_utf8(out).unwrap(), "Update failed due to errors\n");
    }

    #[test]
    fn test_unstartable_install_exits_one() {
        let dir = tempdir().unwrap();
        let layout = staged_layout(dir.path());
        let mut delegate = FixedCode(Err(()), Vec::new());
        let mut out = Vec::new();

        assert_eq!(finish(&layout, &mut delegate, &mut out).unwrap(), FAILURE);
        assert!(!layout.update_staging().exists());
    }
}
