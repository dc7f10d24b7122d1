use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to start command: {cmd}")]
    CommandFailed {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to locate the running executable")]
    CurrentExe(#[source] std::io::Error),

    #[error("failed to resolve symlinks in {}", .path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("executable has no parent directory: {}", .0.display())]
    NoParent(PathBuf),
}
