//! Error types for the ptstem library.
//!
//! All fallible operations return [`StemmerError`] through the crate-wide
//! [`Result`] alias. Errors only ever arise while a stemmer is being built
//! (reading and validating rule definitions, configuration and word lists);
//! stemming a word is total and never fails.
//!
//! # Examples
//!
//! ```
//! use ptstem::error::{Result, StemmerError};
//!
//! fn load() -> Result<()> {
//!     Err(StemmerError::missing_step("orengo", "vowelremoval"))
//! }
//!
//! match load() {
//!     Ok(_) => println!("Loaded"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for ptstem operations.
#[derive(Error, Debug)]
pub enum StemmerError {
    /// I/O errors (rule files, ignore lists, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A rule set does not define a step the algorithm requires
    #[error("Missing step '{step}' in {algorithm} rules")]
    MissingStep { algorithm: String, step: String },

    /// A rule inside a step is malformed
    #[error("Invalid rule in step '{step}': {reason}")]
    InvalidRule { step: String, reason: String },
}

/// Result type alias for operations that may fail with StemmerError.
pub type Result<T> = std::result::Result<T, StemmerError>;

impl StemmerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemmerError::Config(msg.into())
    }

    /// Create a new missing step error.
    pub fn missing_step<A: Into<String>, S: Into<String>>(algorithm: A, step: S) -> Self {
        StemmerError::MissingStep {
            algorithm: algorithm.into(),
            step: step.into(),
        }
    }

    /// Create a new invalid rule error.
    pub fn invalid_rule<S: Into<String>, R: Into<String>>(step: S, reason: R) -> Self {
        StemmerError::InvalidRule {
            step: step.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StemmerError::config("bad capacity");
        assert_eq!(error.to_string(), "Configuration error: bad capacity");

        let error = StemmerError::missing_step("savoy", "finalvowel");
        assert_eq!(
            error.to_string(),
            "Missing step 'finalvowel' in savoy rules"
        );

        let error = StemmerError::invalid_rule("nounreduction", "empty suffix");
        assert_eq!(
            error.to_string(),
            "Invalid rule in step 'nounreduction': empty suffix"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stemmer_error = StemmerError::from(io_error);

        match stemmer_error {
            StemmerError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
