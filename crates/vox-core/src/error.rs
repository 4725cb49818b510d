//! Error types for the VOX showtimes scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for scraper operations
#[derive(Error, Debug)]
pub enum VoxError {
    /// HTTP request failed (network failure or non-success status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Failed to encode records as JSON
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the output file
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, VoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let error = VoxError::Parse("invalid selector".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: invalid selector");
    }

    #[test]
    fn test_error_display_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = VoxError::from(io);
        let display = error.to_string();
        assert!(display.starts_with("Failed to write output:"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_error_display_json() {
        let bad = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = VoxError::from(bad);
        assert!(error.to_string().starts_with("Failed to encode JSON:"));
    }
}
