//! Error types for the Shrike library.
//!
//! All failures are represented by the [`ShrikeError`] enum. Configuration
//! problems (invalid regex patterns, empty pattern sets, malformed threshold
//! tables) are fatal at construction time; extraction and analysis over
//! well-constructed components never fail on unexpected input text.
//!
//! # Examples
//!
//! ```
//! use shrike::error::{Result, ShrikeError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShrikeError::configuration("empty pattern list"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Shrike operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum ShrikeError {
    /// I/O errors (surfaced by reader collaborators feeding the core)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid component configuration (bad regex, empty pattern set,
    /// unordered thresholds)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document content rejected at the ingestion boundary
    #[error("Data input error: {0}")]
    DataInput(String),

    /// A named extractor failed against a specific document
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Analyzer-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ShrikeError.
pub type Result<T> = std::result::Result<T, ShrikeError>;

impl ShrikeError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        ShrikeError::Configuration(msg.into())
    }

    /// Create a new data input error.
    pub fn data_input<S: Into<String>>(msg: S) -> Self {
        ShrikeError::DataInput(msg.into())
    }

    /// Create a new extraction error.
    pub fn extraction<S: Into<String>>(msg: S) -> Self {
        ShrikeError::Extraction(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ShrikeError::Analysis(msg.into())
    }
}
