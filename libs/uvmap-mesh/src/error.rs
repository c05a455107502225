//! # Mesh Errors
//!
//! Error types for primitive generation.

use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while generating a primitive.
///
/// The default primitives built from `config` constants never fail; these
/// errors only surface for caller-supplied dimensions.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A dimension that must be strictly positive was not.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A segment count below the primitive's minimum.
    #[error("Too few segments for {primitive}: {count} (min: {min})")]
    TooFewSegments {
        primitive: &'static str,
        count: u32,
        min: u32,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a segment count error.
    pub fn too_few_segments(primitive: &'static str, count: u32, min: u32) -> Self {
        Self::TooFewSegments {
            primitive,
            count,
            min,
        }
    }
}
