//! Error types for Flip Gallery

use thiserror::Error;

/// Main error type for Flip Gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Configuration could not be parsed or failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An image asset could not be retrieved
    #[error("Asset fetch failed for {uri}: {reason}")]
    AssetFetch { uri: String, reason: String },

    /// A bounded wait elapsed
    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// No card with the given index exists in the gallery
    #[error("Card not found: {0}")]
    UnknownCard(u32),

    /// A URL template or page URL did not parse
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

/// Outcome of a native share attempt that did not succeed
#[derive(Error, Debug)]
pub enum ShareError {
    /// The user dismissed the share prompt. Not a failure.
    #[error("Share cancelled by user")]
    Aborted,

    /// The runtime has no native sharing for this payload
    #[error("Native sharing unsupported")]
    Unsupported,

    /// The share target reported an error
    #[error("Share failed: {0}")]
    Failed(String),

    /// Retrieving or packaging assets failed
    #[error("Share asset error: {0}")]
    Asset(#[from] GalleryError),
}

impl ShareError {
    /// True for the user-cancel outcome, which must not trigger any fallback
    pub fn is_abort(&self) -> bool {
        matches!(self, ShareError::Aborted)
    }
}
