use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("directory not found or is not a directory: {}", .0.display())]
    Root(PathBuf),
    #[error("extension filter error: {0}")]
    Extension(String),
}
impl DigestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }
}
