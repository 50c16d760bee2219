//! Where question text comes from, and how it is turned into plain delimited text.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::TransportError;

/// Fetches the raw transport text for a deck.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `TransportError` if the resource cannot be read.
    async fn fetch(&self) -> Result<String, TransportError>;
}

/// Turns raw transport text into plain `question,answer` lines.
pub trait Decoder: Send + Sync {
    /// # Errors
    ///
    /// Returns `TransportError::Decode` if the payload cannot be decoded.
    fn decode(&self, raw: String) -> Result<String, TransportError>;
}

/// Reads the deck from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DeckSource for FileSource {
    async fn fetch(&self) -> Result<String, TransportError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TransportError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// A deck held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource(String);

impl StaticSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[async_trait]
impl DeckSource for StaticSource {
    async fn fetch(&self) -> Result<String, TransportError> {
        Ok(self.0.clone())
    }
}

/// The transport text is already plain. A leading byte-order mark is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Decoder for PlainText {
    fn decode(&self, raw: String) -> Result<String, TransportError> {
        match raw.strip_prefix('\u{feff}') {
            Some(rest) => Ok(rest.to_owned()),
            None => Ok(raw),
        }
    }
}
