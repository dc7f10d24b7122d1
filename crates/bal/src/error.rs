use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LauncherError>;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("failed to read version marker {}", .path.display())]
    MarkerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Distribution does not exist, use 'bal dist pull <version>'")]
    MissingDistribution,

    #[error("Completion scripts not found")]
    CompletionScriptMissing,

    #[error("Failed to generate the completion script")]
    CompletionScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ballerina: unknown command '{0}'")]
    UnknownCommand(String),

    #[error("failed to read launcher configuration {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid launcher configuration {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Platform(#[from] bal_platform::Error),

    #[error(transparent)]
    Launch(#[from] bal_shim::Error),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl LauncherError {
    /// Usage mistakes, as opposed to resolution or launch failures.
    pub fn is_usage(&self) -> bool {
        matches!(self, LauncherError::UnknownCommand(_))
    }
}
