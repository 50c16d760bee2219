use std::sync::Arc;

use qbank_core::ProgressMap;
use storage::repository::ProgressRepository;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "questionBankProgress";

/// Loads and saves the progress map for one named slot.
///
/// Read problems never fail a load: they degrade to an empty map that is then
/// reconciled. Write problems are logged and reported as `false`.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    slot: String,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>, slot: impl Into<String>) -> Self {
        Self {
            repo,
            slot: slot.into(),
        }
    }

    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Restore the persisted map, reconcile it to `record_count` and write the result back.
    pub async fn load(&self, record_count: usize) -> ProgressMap {
        let mut map = self.read().await;

        let summary = map.reconcile(record_count);
        tracing::debug!(
            slot = %self.slot,
            records = record_count,
            inserted = summary.inserted,
            removed = summary.removed,
            "reconciled progress"
        );

        self.save(&map).await;
        map
    }

    /// Persist the whole map. Returns `false` if the write failed.
    pub async fn save(&self, map: &ProgressMap) -> bool {
        let payload = match map.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "failed to encode progress");
                return false;
            }
        };

        match self.repo.save_progress(&self.slot, &payload).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "failed to save progress");
                false
            }
        }
    }

    async fn read(&self) -> ProgressMap {
        let payload = match self.repo.load_progress(&self.slot).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return ProgressMap::new(),
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "failed to read progress, starting fresh");
                return ProgressMap::new();
            }
        };

        match ProgressMap::from_json(&payload) {
            Ok(decoded) => {
                if !decoded.skipped.is_empty() {
                    tracing::warn!(
                        slot = %self.slot,
                        skipped = decoded.skipped.len(),
                        "dropped unreadable progress entries"
                    );
                }
                decoded.map
            }
            Err(err) => {
                tracing::warn!(slot = %self.slot, error = %err, "ignoring malformed progress");
                ProgressMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbank_core::Rating;
    use storage::repository::InMemoryRepository;

    async fn stored(repo: &InMemoryRepository) -> Option<String> {
        repo.load_progress(DEFAULT_SLOT).await.unwrap()
    }

    #[tokio::test]
    async fn absent_slot_loads_all_unrated_and_is_written_back() {
        let repo = InMemoryRepository::new();
        let service = ProgressService::new(Arc::new(repo.clone()), DEFAULT_SLOT);

        let map = service.load(3).await;

        assert_eq!(map.len(), 3);
        assert!(map.iter().all(|(_, rating)| rating == Rating::Unrated));
        assert_eq!(
            stored(&repo).await.as_deref(),
            Some(r#"{"0":"notyet","1":"notyet","2":"notyet"}"#)
        );
    }

    #[tokio::test]
    async fn malformed_payload_degrades_to_empty_and_is_repaired() {
        let repo = InMemoryRepository::new()
            .with_slot(DEFAULT_SLOT, "{{not json")
            .unwrap();
        let service = ProgressService::new(Arc::new(repo.clone()), DEFAULT_SLOT);

        let map = service.load(2).await;

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(0), Rating::Unrated);
        assert_eq!(
            stored(&repo).await.as_deref(),
            Some(r#"{"0":"notyet","1":"notyet"}"#)
        );
    }

    #[tokio::test]
    async fn shrinking_deck_prunes_stale_entries() {
        let repo = InMemoryRepository::new()
            .with_slot(DEFAULT_SLOT, r#"{"0":"good","1":"poor","5":"fair"}"#)
            .unwrap();
        let service = ProgressService::new(Arc::new(repo.clone()), DEFAULT_SLOT);

        let map = service.load(2).await;

        assert_eq!(map.get(0), Rating::Good);
        assert_eq!(map.get(1), Rating::Poor);
        assert_eq!(map.len(), 2);
        assert_eq!(stored(&repo).await.as_deref(), Some(r#"{"0":"good","1":"poor"}"#));
    }
}
