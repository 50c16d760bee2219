#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod source;
pub mod study;

pub use app_services::AppServices;
pub use error::{AppServicesError, LoadError, StudyError, TransportError};
pub use progress_service::{DEFAULT_SLOT, ProgressService};
pub use source::{DeckSource, Decoder, FileSource, PlainText, StaticSource};
pub use study::StudySession;
