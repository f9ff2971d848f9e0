//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a render or the write of its result.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A directory could not be enumerated (missing, not a directory, permission denied).
    #[error("cannot read directory '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendered tree could not be written to its output file.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error, untouched.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Filesystem { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
