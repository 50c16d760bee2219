use rand::Rng;

use qbank_core::{
    FilterSet, NavigationError, Navigator, ProgressMap, Rating, RatingCounts, Record,
    compute_filtered, parse_record_number, parse_records,
};

use crate::error::{LoadError, StudyError};
use crate::progress_service::ProgressService;
use crate::source::{DeckSource, Decoder};

//
// ─── STUDY SESSION ─────────────────────────────────────────────────────────────
//

/// The whole study state: parsed deck, ratings, active filter and cursor.
///
/// The filtered list and cursor are derived from the deck, ratings and filter.
/// Every mutation goes through this type so the derived state is recomputed in
/// one place.
pub struct StudySession {
    records: Vec<Record>,
    progress: ProgressMap,
    filter: FilterSet,
    navigator: Navigator,
    store: ProgressService,
}

impl StudySession {
    /// Fetch, decode and parse the deck, then restore and reconcile its progress.
    ///
    /// Nothing is returned unless every step succeeds.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Transport` if the source cannot be read or decoded, and
    /// `LoadError::Content` if the decoded text holds no usable records.
    pub async fn load(
        source: &dyn DeckSource,
        decoder: &dyn Decoder,
        store: ProgressService,
        filter: FilterSet,
    ) -> Result<Self, LoadError> {
        let raw = source.fetch().await?;
        let text = decoder.decode(raw)?;
        let records = parse_records(&text)?;

        let progress = store.load(records.len()).await;
        tracing::info!(records = records.len(), slot = store.slot(), "loaded question deck");

        Ok(Self::from_parts(records, progress, filter, store))
    }

    /// Assemble a session from an already reconciled progress map.
    #[must_use]
    pub fn from_parts(
        records: Vec<Record>,
        progress: ProgressMap,
        filter: FilterSet,
        store: ProgressService,
    ) -> Self {
        let navigator = Navigator::new(compute_filtered(records.len(), &progress, &filter));
        Self {
            records,
            progress,
            filter,
            navigator,
            store,
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Record under the cursor, or `None` when nothing matches the filter.
    #[must_use]
    pub fn current_record(&self) -> Option<&Record> {
        self.navigator
            .current_global()
            .and_then(|index| self.records.get(index))
    }

    #[must_use]
    pub fn current_rating(&self) -> Option<Rating> {
        self.navigator
            .current_global()
            .map(|index| self.progress.get(index))
    }

    /// 1-based number of the record under the cursor.
    #[must_use]
    pub fn current_record_number(&self) -> Option<usize> {
        self.navigator.current_global().map(|index| index + 1)
    }

    #[must_use]
    pub fn counts(&self) -> RatingCounts {
        RatingCounts::tally(self.records.len(), &self.progress)
    }

    #[must_use]
    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    #[must_use]
    pub fn filtered_indices(&self) -> &[usize] {
        self.navigator.indices()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    pub fn next(&mut self) {
        self.navigator.next();
    }

    pub fn prev(&mut self) {
        self.navigator.prev();
    }

    pub fn random(&mut self) {
        self.random_with(&mut rand::rng());
    }

    pub fn random_with<R: Rng>(&mut self, rng: &mut R) {
        self.navigator.random(rng);
    }

    /// Jump to the 1-based record number typed by the user.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError` if the input is not a record number or the
    /// record is hidden by the filter. State is unchanged on error.
    pub fn jump_to_record(&mut self, raw: &str) -> Result<(), NavigationError> {
        let total = self.records.len();
        let record = parse_record_number(raw, total)?;
        self.navigator.jump_to_record(record, total)
    }

    //
    // ─── MUTATIONS ─────────────────────────────────────────────────────────────
    //

    /// Rate the record under the cursor and persist before returning.
    ///
    /// Returns `false` without touching anything when the cursor is parked. The
    /// filtered list is recomputed afterwards: the record stays in view while its
    /// new rating is still shown, otherwise the cursor falls back to the first
    /// match or parks.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Progress` if the cursor points outside the reconciled map.
    pub async fn rate(&mut self, rating: Rating) -> Result<bool, StudyError> {
        let Some(index) = self.navigator.current_global() else {
            return Ok(false);
        };

        self.progress.set(index, rating)?;
        tracing::debug!(index, %rating, "rated question");
        self.refilter();
        self.store.save(&self.progress).await;
        Ok(true)
    }

    /// Show or hide one rating category, keeping the current record in view if it stays visible.
    pub fn set_filter(&mut self, rating: Rating, enabled: bool) {
        if self.filter.set(rating, enabled) {
            tracing::debug!(%rating, enabled, "filter changed");
        }
        self.refilter();
    }

    /// Replace the whole active filter set.
    pub fn replace_filter(&mut self, filter: FilterSet) {
        self.filter = filter;
        self.refilter();
    }

    fn refilter(&mut self) {
        let previous = self.navigator.current_global();
        let indices = compute_filtered(self.records.len(), &self.progress, &self.filter);
        self.navigator.rebase(indices, previous);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
