use std::path::PathBuf;
use thiserror::Error;

/// Failures from the filesystem side of the app (config file, picked files).
/// None of these are fatal: callers log them and carry on.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
