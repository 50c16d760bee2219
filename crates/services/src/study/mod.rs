mod session;

// Public API of the study subsystem.
pub use crate::error::{LoadError, StudyError};
pub use session::StudySession;
