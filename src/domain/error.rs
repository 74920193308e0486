//! Error types for the card search plugin.
//!
//! This module defines the centralized error type [`CardSearchError`] and a type
//! alias [`Result`] used throughout the crate. All variants are implemented with
//! the `thiserror` crate.

use thiserror::Error;

/// The main error type for card search operations.
///
/// Everything that can go wrong while turning a response into data is a
/// Fetch-Failure from the user's point of view ([`CardSearchError::is_fetch_failure`]).
/// The remaining variants cover configuration, theming and local I/O.
///
/// # Examples
///
/// ```
/// use cardsearch::domain::CardSearchError;
///
/// let err = CardSearchError::Http { status: 503 };
/// assert!(err.is_fetch_failure());
/// assert_eq!(err.to_string(), "HTTP request failed with status 503");
/// ```
#[derive(Debug, Error)]
pub enum CardSearchError {
    /// The endpoint answered with a non-success status code.
    #[error("HTTP request failed with status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The response body was not the expected JSON array.
    ///
    /// Automatically converts from `serde_json::Error`.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The query string could not be serialized.
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_html_form::ser::Error),

    /// A request result arrived without a usable ticket in its context.
    #[error("Request context error: {0}")]
    Context(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardSearchError {
    /// Returns `true` for errors that stem from a fetch resolving badly.
    ///
    /// These are swallowed by the event handler: the UI keeps showing the
    /// last successfully loaded data.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Decode(_))
    }
}

/// A specialized `Result` type for card search operations.
pub type Result<T> = std::result::Result<T, CardSearchError>;
