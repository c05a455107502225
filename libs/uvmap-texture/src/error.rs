//! # Texture Errors

use thiserror::Error;

/// Result type alias using [`TextureError`].
pub type TextureResult<T> = Result<T, TextureError>;

/// Errors raised while exporting the diagnostic texture.
///
/// Generation itself cannot fail; only encoding can.
#[derive(Debug, Error)]
pub enum TextureError {
    /// The image encoder rejected the pixel buffer.
    #[error("Failed to encode texture: {0}")]
    Encode(#[from] image::ImageError),
}
