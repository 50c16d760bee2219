//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use qbank_core::{ParseError, ProgressError};
use storage::sqlite::SqliteInitError;

/// The question source could not be fetched or decoded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode question source: {0}")]
    Decode(String),
}

/// Errors emitted while loading a study session. Both are terminal for the session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("could not load questions: {0}")]
    Transport(#[from] TransportError),
    #[error("could not use questions: {0}")]
    Content(#[from] ParseError),
}

/// Errors emitted by steady-state study operations.
///
/// Persistence failures are not here: they are logged and the in-memory state stays authoritative.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
