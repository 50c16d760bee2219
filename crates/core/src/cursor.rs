//! Navigation cursor over the filtered index list.

use rand::Rng;

use crate::error::NavigationError;

/// Owns the filtered index list and a position within it.
///
/// The position is `None` ("parked") exactly when the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    indices: Vec<usize>,
    position: Option<usize>,
}

impl Navigator {
    /// Start at the first entry of `indices`, or parked if there is none.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        let position = if indices.is_empty() { None } else { Some(0) };
        Self { indices, position }
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Global record index under the cursor.
    #[must_use]
    pub fn current_global(&self) -> Option<usize> {
        self.position.and_then(|pos| self.indices.get(pos).copied())
    }

    pub fn next(&mut self) {
        if let Some(pos) = self.position {
            self.position = Some((pos + 1) % self.indices.len());
        }
    }

    pub fn prev(&mut self) {
        if let Some(pos) = self.position {
            let len = self.indices.len();
            self.position = Some((pos + len - 1) % len);
        }
    }

    /// Jump to a uniformly chosen position.
    pub fn random<R: Rng>(&mut self, rng: &mut R) {
        if self.position.is_some() {
            self.position = Some(rng.random_range(0..self.indices.len()));
        }
    }

    /// Move to the 1-based record number `record`.
    ///
    /// The cursor is left untouched when this fails.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::OutOfRange` if `record` is outside
    /// `1..=record_count`, and `NavigationError::FilteredOut` if the record
    /// exists but is not part of the filtered list.
    pub fn jump_to_record(&mut self, record: i64, record_count: usize) -> Result<(), NavigationError> {
        let global = usize::try_from(record)
            .ok()
            .filter(|n| (1..=record_count).contains(n))
            .map(|n| n - 1)
            .ok_or(NavigationError::OutOfRange {
                requested: Some(record),
                total: record_count,
            })?;

        let pos = self
            .indices
            .binary_search(&global)
            .map_err(|_| NavigationError::FilteredOut { record: global + 1 })?;
        self.position = Some(pos);
        Ok(())
    }

    /// Replace the list after a filter change, keeping `previous_global` in view if possible.
    pub fn rebase(&mut self, indices: Vec<usize>, previous_global: Option<usize>) {
        self.position = if indices.is_empty() {
            None
        } else {
            Some(
                previous_global
                    .and_then(|global| indices.binary_search(&global).ok())
                    .unwrap_or(0),
            )
        };
        self.indices = indices;
    }
}

// Integral decimals beyond this lose precision as f64.
const MAX_EXACT_DECIMAL: f64 = 9_007_199_254_740_991.0;

/// Parse raw jump input into a record number.
///
/// Decimal spellings of a whole number (`3.0`, `1e1`) are accepted as that
/// number.
///
/// # Errors
///
/// Returns `NavigationError::OutOfRange` with `requested: None` when the text
/// is not a whole number.
pub fn parse_record_number(raw: &str, record_count: usize) -> Result<i64, NavigationError> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse::<i64>() {
        return Ok(number);
    }

    let not_whole = NavigationError::OutOfRange {
        requested: None,
        total: record_count,
    };
    let value: f64 = raw.parse().map_err(|_| not_whole.clone())?;
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_EXACT_DECIMAL {
        return Err(not_whole);
    }
    #[allow(clippy::cast_possible_truncation)]
    let number = value as i64;
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn next_and_prev_wrap_around() {
        let mut nav = Navigator::new(vec![1, 4, 6]);
        for _ in 0..3 {
            nav.next();
        }
        assert_eq!(nav.position(), Some(0));

        nav.prev();
        assert_eq!(nav.current_global(), Some(6));
        for _ in 0..3 {
            nav.prev();
        }
        assert_eq!(nav.current_global(), Some(6));
    }

    #[test]
    fn empty_list_is_parked_and_inert() {
        let mut nav = Navigator::new(Vec::new());
        nav.next();
        nav.prev();
        nav.random(&mut StdRng::seed_from_u64(7));
        assert_eq!(nav.position(), None);
        assert_eq!(nav.current_global(), None);
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut nav = Navigator::new(vec![0, 2, 3, 9]);
        for _ in 0..100 {
            nav.random(&mut rng);
            assert!(nav.position().is_some_and(|pos| pos < 4));
        }
    }

    #[test]
    fn jump_boundaries() {
        // five records, global index 2 filtered out
        let mut nav = Navigator::new(vec![0, 1, 3, 4]);

        assert_eq!(
            nav.jump_to_record(0, 5),
            Err(NavigationError::OutOfRange { requested: Some(0), total: 5 })
        );
        assert_eq!(
            nav.jump_to_record(6, 5),
            Err(NavigationError::OutOfRange { requested: Some(6), total: 5 })
        );
        assert_eq!(
            nav.jump_to_record(-1, 5),
            Err(NavigationError::OutOfRange { requested: Some(-1), total: 5 })
        );
        assert_eq!(nav.jump_to_record(3, 5), Err(NavigationError::FilteredOut { record: 3 }));
        assert_eq!(nav.position(), Some(0));

        nav.jump_to_record(4, 5).unwrap();
        assert_eq!(nav.current_global(), Some(3));
    }

    #[test]
    fn jump_succeeds_when_target_is_visible() {
        let mut nav = Navigator::new(vec![0, 1, 2, 3, 4]);
        nav.jump_to_record(3, 5).unwrap();
        assert_eq!(nav.current_global(), Some(2));
    }

    #[test]
    fn rebase_keeps_previous_record_when_present() {
        let mut nav = Navigator::new(vec![0, 2, 5]);
        nav.next();
        let previous = nav.current_global();

        nav.rebase(vec![1, 2, 3], previous);
        assert_eq!(nav.current_global(), Some(2));

        nav.rebase(vec![7, 8], Some(2));
        assert_eq!(nav.position(), Some(0));

        nav.rebase(Vec::new(), Some(7));
        assert_eq!(nav.position(), None);

        nav.rebase(vec![4], None);
        assert_eq!(nav.current_global(), Some(4));
    }

    #[test]
    fn parse_record_number_accepts_whole_decimals() {
        assert_eq!(parse_record_number("3.0", 20), Ok(3));
        assert_eq!(parse_record_number("1e1", 20), Ok(10));
        assert_eq!(parse_record_number("-1", 20), Ok(-1));
        assert_eq!(parse_record_number("+4", 20), Ok(4));
    }

    #[test]
    fn parse_record_number_rejects_non_integers() {
        assert_eq!(parse_record_number(" 12 ", 20), Ok(12));
        for raw in ["inf", "NaN", "1e300", "0.5"] {
            assert!(parse_record_number(raw, 20).is_err(), "{raw} should be rejected");
        }
        assert_eq!(
            parse_record_number("2.5", 20),
            Err(NavigationError::OutOfRange { requested: None, total: 20 })
        );
        assert_eq!(
            parse_record_number("", 20),
            Err(NavigationError::OutOfRange { requested: None, total: 20 })
        );
    }
}
