//! Active-filter bookkeeping and the derived filtered index list.

use std::collections::BTreeSet;

use crate::model::Rating;
use crate::progress::ProgressMap;

/// The rating categories currently visible. May be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    active: BTreeSet<Rating>,
}

impl FilterSet {
    /// Every category visible.
    #[must_use]
    pub fn all() -> Self {
        Rating::ALL.into_iter().collect()
    }

    /// Nothing visible.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, rating: Rating) -> bool {
        self.active.contains(&rating)
    }

    /// Turn one category on or off. Returns `true` if the set changed.
    pub fn set(&mut self, rating: Rating, enabled: bool) -> bool {
        if enabled {
            self.active.insert(rating)
        } else {
            self.active.remove(&rating)
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active ratings in display order.
    pub fn iter(&self) -> impl Iterator<Item = Rating> + '_ {
        Rating::ALL.into_iter().filter(|rating| self.contains(*rating))
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Rating> for FilterSet {
    fn from_iter<T: IntoIterator<Item = Rating>>(iter: T) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

/// Indices in `0..record_count`, ascending, whose rating is active.
#[must_use]
pub fn compute_filtered(record_count: usize, progress: &ProgressMap, filter: &FilterSet) -> Vec<usize> {
    (0..record_count)
        .filter(|index| filter.contains(progress.get(*index)))
        .collect()
}

/// Per-rating totals over the whole deck, independent of any filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingCounts {
    counts: [usize; Rating::ALL.len()],
    total: usize,
}

impl RatingCounts {
    #[must_use]
    pub fn tally(record_count: usize, progress: &ProgressMap) -> Self {
        let mut counts = [0; Rating::ALL.len()];
        for index in 0..record_count {
            counts[progress.get(index).ordinal()] += 1;
        }
        Self {
            counts,
            total: record_count,
        }
    }

    #[must_use]
    pub fn get(&self, rating: Rating) -> usize {
        self.counts[rating.ordinal()]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(rating, count)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        Rating::ALL.into_iter().map(|rating| (rating, self.get(rating)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(ratings: &[Rating]) -> ProgressMap {
        ratings.iter().copied().enumerate().collect()
    }

    #[test]
    fn keeps_exactly_the_active_ratings_in_order() {
        use Rating::*;
        let map = progress(&[Good, Unrated, Good, Poor, Fair, Good]);
        let filter: FilterSet = [Good, Poor].into_iter().collect();

        let filtered = compute_filtered(6, &map, &filter);

        assert_eq!(filtered, vec![0, 2, 3, 5]);
        assert!(filtered.windows(2).all(|pair| pair[0] < pair[1]));
        for index in 0..6 {
            assert_eq!(filtered.contains(&index), filter.contains(map.get(index)));
        }
    }

    #[test]
    fn empty_filter_yields_nothing() {
        let map = progress(&[Rating::Good, Rating::Unrated]);
        assert!(compute_filtered(2, &map, &FilterSet::empty()).is_empty());
    }

    #[test]
    fn missing_entries_count_as_unrated() {
        let map = progress(&[Rating::Excellent]);
        let filter: FilterSet = [Rating::Unrated].into_iter().collect();
        assert_eq!(compute_filtered(3, &map, &filter), vec![1, 2]);
    }

    #[test]
    fn counts_cover_all_records_regardless_of_filter() {
        use Rating::*;
        let map = progress(&[Good, Good, Poor]);

        let counts = RatingCounts::tally(5, &map);

        assert_eq!(counts.get(Good), 2);
        assert_eq!(counts.get(Poor), 1);
        assert_eq!(counts.get(Unrated), 2);
        assert_eq!(counts.get(Excellent), 0);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), counts.total());
    }

    #[test]
    fn set_reports_changes() {
        let mut filter = FilterSet::all();
        assert!(!filter.set(Rating::Good, true));
        assert!(filter.set(Rating::Good, false));
        assert!(!filter.contains(Rating::Good));
        assert_eq!(filter.iter().count(), 4);
    }
}
