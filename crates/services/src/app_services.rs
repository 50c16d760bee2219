use std::sync::Arc;

use qbank_core::FilterSet;
use storage::repository::Storage;

use crate::error::{AppServicesError, LoadError};
use crate::progress_service::ProgressService;
use crate::source::{DeckSource, Decoder};
use crate::study::StudySession;

/// Assembles app-facing services over one storage backend and progress slot.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, slot: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, slot))
    }

    /// Build services over an existing storage aggregate.
    #[must_use]
    pub fn from_storage(storage: &Storage, slot: &str) -> Self {
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.progress), slot));
        Self { progress }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    /// Load a study session from `source` with the configured progress slot.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` for transport or content failures.
    pub async fn open_session(
        &self,
        source: &dyn DeckSource,
        decoder: &dyn Decoder,
        filter: FilterSet,
    ) -> Result<StudySession, LoadError> {
        StudySession::load(source, decoder, ProgressService::clone(&self.progress), filter).await
    }
}
