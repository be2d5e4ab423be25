use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for flattening operations
pub type Result<T> = std::result::Result<T, FlattenError>;

/// Errors that can occur while resolving or writing a flattened file
#[derive(Error, Debug)]
pub enum FlattenError {
    /// The entry file or a resolved dependency does not exist
    #[error("no file exists at {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure (permissions, disk full, ...)
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlattenError {
    /// Wrap an I/O error, mapping `NotFound` to the dedicated variant.
    pub fn from_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// True if this error names a missing file.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
