//! Error types for shim operations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to launch {}", .program.display())]
    Launch {
        program: PathBuf,
        #[source]
        source: bal_platform::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
