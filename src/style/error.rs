use std::path::PathBuf;

/// Errors that may occur while reading computed style declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("computed style declarations are unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("failed to open style snapshot `{path}`: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize style snapshot `{path}`: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
