use std::path::PathBuf;

/// Errors that can occur while saving a dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// The capture file could not be created or written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl DumpError {
    /// The underlying I/O error.
    pub fn io(&self) -> &std::io::Error {
        match self {
            DumpError::Write { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DumpError>;
