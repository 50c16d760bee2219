use thiserror::Error;

/// Content errors: the decoded text was present but produced no usable deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("question source is empty")]
    EmptyInput,
    #[error("question source contains no valid `question,answer` lines")]
    NoRecords,
}

/// Errors raised by the progress map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("malformed progress payload: {0}")]
    Malformed(String),
    #[error("record index {index} is out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
}

/// User-facing navigation input errors.
///
/// `requested` is `None` when the input was not an integer at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("enter a whole number between 1 and {total}")]
    OutOfRange { requested: Option<i64>, total: usize },
    #[error("question {record} is hidden by the current filters")]
    FilteredOut { record: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown rating: {0}")]
pub struct RatingParseError(pub String);
