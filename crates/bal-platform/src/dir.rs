//! User and installation directories.

use crate::error::{Error, Result};
use crate::os::OS;
use std::path::{Path, PathBuf};
use tracing::debug;

/// User's home directory.
pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Directory containing the running launcher executable.
pub fn current_installation_root(os: OS) -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::CurrentExe)?;
    installation_root(&exe, os)
}

/// Directory containing `exe`, symlink-resolved unless `os` is exempt.
pub fn installation_root(exe: &Path, os: OS) -> Result<PathBuf> {
    let dir = exe
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| Error::NoParent(exe.to_path_buf()))?;

    if !os.resolves_symlinks() {
        return Ok(dir.to_path_buf());
    }

    let resolved = dir.canonicalize().map_err(|source| Error::Canonicalize {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), resolved = %resolved.display(), "resolved installation root");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_user_home_matches_environment() {
        if let Some(home) = user_home() {
            let env_home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
            if let Some(env_home) = env_home {
                assert_eq!(home, PathBuf::from(env_home));
            }
        }
    }

    #[test]
    fn test_installation_root_is_parent_of_exe() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin).unwrap();

        let root = installation_root(&bin.join("bal"), OS::Linux).unwrap();
        assert_eq!(root, bin.canonicalize().unwrap());
    }

    #[test]
    fn test_installation_root_exempt_os_keeps_path() {
        let root = installation_root(Path::new("/not/resolved/bin/bal"), OS::Macos).unwrap();
        assert_eq!(root, PathBuf::from("/not/resolved/bin"));
    }

    #[test]
    fn test_installation_root_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let exe = dir.path().join("missing").join("bal");
        let err = installation_root(&exe, OS::Linux).unwrap_err();
        assert!(matches!(err, Error::Canonicalize { .. }));
    }

    #[test]
    fn test_installation_root_without_parent() {
        let err = installation_root(Path::new("bal"), OS::Linux).unwrap_err();
        assert!(matches!(err, Error::NoParent(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_installation_root_follows_symlinked_dir() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("usr/lib/ballerina/bin");
        std::fs::create_dir_all(&real).unwrap();
        let link = dir.path().join("linked-bin");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let root = installation_root(&link.join("bal"), OS::Linux).unwrap();
        assert_eq!(root, real.canonicalize().unwrap());
    }
}
