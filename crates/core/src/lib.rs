#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod filter;
pub mod model;
pub mod parser;
pub mod progress;

pub use cursor::{Navigator, parse_record_number};
pub use error::{NavigationError, ParseError, ProgressError, RatingParseError};
pub use filter::{FilterSet, RatingCounts, compute_filtered};
pub use model::{Rating, Record};
pub use parser::{SEPARATOR, parse_records};
pub use progress::{DecodedProgress, ProgressMap, Reconciliation};
