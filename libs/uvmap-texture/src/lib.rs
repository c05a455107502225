//! # UV Map Texture
//!
//! Procedural diagnostic texture: an 8x8 grid of colored cells, each
//! labeled with its row letter and column number, so that stretching,
//! mirroring and seams are readable on a projected surface.
//!
//! ## Example
//!
//! ```rust
//! use uvmap_texture::{cell_label, DiagnosticTexture};
//!
//! let texture = DiagnosticTexture::shared();
//! assert_eq!(texture.size(), 1024);
//! assert_eq!(cell_label(7, 7), "H8");
//! ```

pub mod error;
pub mod font;
pub mod grid;
pub mod texture;

pub use error::{TextureError, TextureResult};
pub use grid::{cell_color, cell_label, cell_pattern, cell_size};
pub use texture::DiagnosticTexture;
