//! Error types for deck construction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building blocks, slides and decks.
///
/// Every variant is raised at construction time. A deck that was built
/// successfully cannot fail later.
#[derive(Error, Debug)]
pub enum Error {
    /// An enumerated parameter (color, size, background, heading level) outside its closed set.
    #[error("Invalid {kind} variant: {value:?}")]
    InvalidVariant {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A slide was assembled from zero content blocks.
    #[error("A slide needs at least one content block")]
    EmptySlide,

    /// A deck was composed from zero slides.
    #[error("A deck needs at least one slide")]
    EmptyDeck,

    /// A URL, image or icon reference was empty where a value is required.
    #[error("Empty reference for {0}")]
    InvalidReference(&'static str),

    /// The slide script is not valid JSON or does not match the script shape.
    #[error("Slide script parsing error: {0}")]
    ScriptParse(String),

    /// Failed to serialize a built deck.
    #[error("Deck serialization error: {0}")]
    Serialize(String),

    /// Failed to read a slide script from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidVariant {
            kind,
            value: value.into(),
        }
    }
}
