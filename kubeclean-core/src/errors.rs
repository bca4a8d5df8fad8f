//! errors.rs - Custom error types for the kubeclean-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `kubeclean-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KubecleanError {
    /// A `-s` substitution was not given in `from=to` form.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to compile substitution pattern '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Failed to parse input document: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Failed to serialize cleaned document: {0}")]
    SerializationError(String),

    #[error("Field rule validation failed:\n{0}")]
    RuleValidation(String),
}
