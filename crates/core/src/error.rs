//! Error types
//!
//! The advisory core has no I/O of its own, so every error here is data the
//! HTTP layer turns into a structured JSON body. Nothing in this taxonomy is
//! fatal to the caller.

use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the advisory core and its collaborators
#[derive(Debug, Error)]
pub enum Error {
    /// Caller asked for a crop the database does not know
    #[error("crop not found: {0}")]
    CropNotFound(String),

    /// Attached image could not be decoded or analyzed
    #[error("image processing failed: {0}")]
    ImageProcessing(String),

    /// An external data provider failed
    #[error("provider error: {0}")]
    Provider(String),

    /// Invalid caller input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Message suitable for a client-facing error body.
    /// Detail on image failures stays in the logs, not on the wire.
    pub fn client_message(&self) -> String {
        match self {
            Self::ImageProcessing(_) => "Image processing failed".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_client_message_is_fixed() {
        let err = Error::ImageProcessing("bad base64 payload".to_string());
        assert_eq!(err.client_message(), "Image processing failed");
    }

    #[test]
    fn test_crop_not_found_names_the_crop() {
        let err = Error::CropNotFound("quinoa".to_string());
        assert!(err.client_message().contains("quinoa"));
    }
}
