//! Per-record mastery ratings and their persisted form.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ProgressError;
use crate::model::Rating;

//
// ─── PROGRESS MAP ─────────────────────────────────────────────────────────────
//

/// Mapping from record index to rating.
///
/// After [`ProgressMap::reconcile`] the key set is exactly `0..record_count`.
/// Indices without an entry read as [`Rating::Unrated`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressMap {
    entries: BTreeMap<usize, Rating>,
}

/// What a reconciliation pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub inserted: usize,
    pub removed: usize,
}

impl Reconciliation {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.removed == 0
    }
}

/// A decoded payload plus the keys that had to be dropped while decoding it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedProgress {
    pub map: ProgressMap,
    pub skipped: Vec<String>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rating for `index`, defaulting to `Unrated` when there is no entry.
    #[must_use]
    pub fn get(&self, index: usize) -> Rating {
        self.entries.get(&index).copied().unwrap_or_default()
    }

    /// Overwrite the rating of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::IndexOutOfRange` if `index` is not a reconciled key.
    pub fn set(&mut self, index: usize, rating: Rating) -> Result<(), ProgressError> {
        match self.entries.get_mut(&index) {
            Some(slot) => {
                *slot = rating;
                Ok(())
            }
            None => Err(ProgressError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            }),
        }
    }

    /// Bring the key set to exactly `0..record_count`.
    ///
    /// Missing indices are backfilled as `Unrated`; indices at or past
    /// `record_count` are dropped. Running it twice changes nothing the second time.
    pub fn reconcile(&mut self, record_count: usize) -> Reconciliation {
        let stale = self.entries.split_off(&record_count);

        let mut inserted = 0;
        for index in 0..record_count {
            if let std::collections::btree_map::Entry::Vacant(entry) = self.entries.entry(index) {
                entry.insert(Rating::Unrated);
                inserted += 1;
            }
        }

        Reconciliation {
            inserted,
            removed: stale.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Rating)> + '_ {
        self.entries.iter().map(|(index, rating)| (*index, *rating))
    }

    /// Decode a flat `{"<index>": "<rating>"}` object.
    ///
    /// Keys that are not canonical decimal integers (no sign, no leading zero)
    /// and values that are not known rating names are dropped and reported in
    /// `skipped`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Malformed` if the payload is not a JSON object.
    pub fn from_json(payload: &str) -> Result<DecodedProgress, ProgressError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|err| ProgressError::Malformed(err.to_string()))?;
        let Value::Object(object) = value else {
            return Err(ProgressError::Malformed("expected a JSON object".into()));
        };

        let mut decoded = DecodedProgress::default();
        for (key, value) in object {
            let index = parse_index(&key);
            let rating = value.as_str().and_then(|name| name.parse::<Rating>().ok());
            match (index, rating) {
                (Some(index), Some(rating)) => {
                    decoded.map.entries.insert(index, rating);
                }
                _ => decoded.skipped.push(key),
            }
        }
        Ok(decoded)
    }

    /// Encode the whole map as a flat object, keys in ascending numeric order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, ProgressError> {
        serde_json::to_string(&self.entries).map_err(|err| ProgressError::Malformed(err.to_string()))
    }
}

impl FromIterator<(usize, Rating)> for ProgressMap {
    fn from_iter<T: IntoIterator<Item = (usize, Rating)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// Canonical decimal only: "01" would alias "1".
fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse().ok()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
