mod rating;
mod record;

pub use rating::Rating;
pub use record::Record;
