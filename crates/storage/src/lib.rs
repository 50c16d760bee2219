#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, ProgressRepository, Storage, StorageError};
pub use sqlite::{MEMORY_URL, SqliteInitError, SqliteRepository};
