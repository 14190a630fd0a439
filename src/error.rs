use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The host runtime refused a window or tray command.
    #[error("host command `{command}` failed: {message}")]
    Host {
        command: &'static str,
        message: String,
    },

    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to determine config directory")]
    ConfigDir,
}

impl Error {
    pub fn host(command: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Host {
            command,
            message: err.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
