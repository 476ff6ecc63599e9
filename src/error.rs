use std::path::PathBuf;

/// Failures of the glue around the parser. Parsing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported language '{0}' (expected 'en' or 'ko')")]
    UnsupportedLanguage(String),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize episode: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
