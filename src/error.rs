use std::path::PathBuf;
use thiserror::Error;

/// Errors from the ambient layer: settings persistence, document I/O and
/// editor addressing.
///
/// Failing to find a video link is not an error anywhere in this crate; those
/// paths return `None` or a pass-through outcome instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode settings for {path}: {source}")]
    SettingsEncode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown setting `{0}`")]
    UnknownSetting(String),

    #[error("position {line}:{ch} is outside the document")]
    OutOfBounds { line: usize, ch: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
