//! # Error Types
//!
//! Errors raised while reading a projection configuration. Projection itself
//! never fails: every configuration value maps to a defined formula.

use thiserror::Error;

/// Errors that can occur while parsing configuration input.
///
/// ## Example
///
/// ```rust
/// use uvmap_projection::{parse_strict, ConfigError, Projection};
///
/// match parse_strict::<Projection>("conical") {
///     Ok(projection) => println!("using {}", projection),
///     Err(ConfigError::UnknownName { kind, .. }) => eprintln!("bad {}", kind),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A shape, projection or axis name that matches no variant.
    #[error("unknown {kind} '{name}' (expected one of: {expected})")]
    UnknownName {
        /// What was being parsed ("shape", "projection", "axis")
        kind: &'static str,
        /// The rejected input
        name: String,
        /// Comma-separated accepted names
        expected: String,
    },

    /// Configuration JSON that does not deserialize.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;
