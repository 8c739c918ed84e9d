use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of an [`EnvironmentError`], for callers that branch on the failure
/// rather than print it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Malformed,
    Io,
    EmptyIdentifiers,
    InvalidEntryPoint,
    InvalidState,
    AlreadyLinked,
    NotLinked,
    InvalidName,
}

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("package {name} is not installed (no manifest at {path:?})")]
    NotFound { name: String, path: PathBuf },

    #[error("manifest {path:?} could not be decoded")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("package is missing a name and/or entry point")]
    EmptyIdentifiers,

    #[error("package {name} has an invalid entry point: {path:?}")]
    InvalidEntryPoint { name: String, path: PathBuf },

    #[error("package {name} is in an invalid state")]
    InvalidState {
        name: String,
        #[source]
        reason: Option<Box<EnvironmentError>>,
    },

    #[error("package {name} is already linked")]
    AlreadyLinked { name: String },

    #[error("package {name} is not linked")]
    NotLinked { name: String },

    #[error("{name:?} is not a valid package name")]
    InvalidName { name: String },
}

impl EnvironmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvironmentError::NotFound { .. } => ErrorKind::NotFound,
            EnvironmentError::Malformed { .. } => ErrorKind::Malformed,
            EnvironmentError::Io { .. } => ErrorKind::Io,
            EnvironmentError::EmptyIdentifiers => ErrorKind::EmptyIdentifiers,
            EnvironmentError::InvalidEntryPoint { .. } => ErrorKind::InvalidEntryPoint,
            EnvironmentError::InvalidState { .. } => ErrorKind::InvalidState,
            EnvironmentError::AlreadyLinked { .. } => ErrorKind::AlreadyLinked,
            EnvironmentError::NotLinked { .. } => ErrorKind::NotLinked,
            EnvironmentError::InvalidName { .. } => ErrorKind::InvalidName,
        }
    }

    /// Wrap a runtime failure, keeping the underlying `io::Error` when there is one.
    pub(crate) fn io(path: impl Into<PathBuf>, error: anyhow::Error) -> Self {
        let source = match error.downcast::<std::io::Error>() {
            Ok(io) => io,
            Err(other) => std::io::Error::other(format!("{:#}", other)),
        };
        EnvironmentError::Io {
            path: path.into(),
            source,
        }
    }
}
