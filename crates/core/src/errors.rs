//! Error types shared by the role parsers.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading role files.
///
/// None of the parsers recover locally: every variant aborts the
/// documentation run and names the offending file.
#[derive(Debug, Error)]
pub enum RoleDocError {
    /// Expected file or directory is absent.
    #[error("file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// Error reading a file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid YAML.
    #[error("invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Parsed content lacks the expected shape.
    #[error("unexpected structure in {}: {message}", path.display())]
    Schema { path: PathBuf, message: String },

    /// Error walking a directory tree.
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl RoleDocError {
    pub(crate) fn schema(path: &Path, message: impl Into<String>) -> Self {
        Self::Schema { path: path.to_path_buf(), message: message.into() }
    }

    pub(crate) fn parse(path: &Path, source: serde_yaml::Error) -> Self {
        Self::Parse { path: path.to_path_buf(), source }
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingFile { path }
            | Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::Schema { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }
}

/// Read a whole file, mapping absence and I/O failures onto [`RoleDocError`].
pub(crate) fn read_to_string(path: &Path) -> Result<String, RoleDocError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RoleDocError::MissingFile { path: path.to_path_buf() }
        } else {
            RoleDocError::Io { path: path.to_path_buf(), source: e }
        }
    })
}
