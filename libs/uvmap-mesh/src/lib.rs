//! # UV Map Mesh
//!
//! Procedural primitives for the UV mapping lab.
//! Produces the subdivided cube and UV-sphere whose vertices the projection
//! engine assigns texture coordinates to.
//!
//! ## Architecture
//!
//! ```text
//! Shape → uvmap-mesh (Geometry) → uvmap-projection (UVs) → renderer
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use uvmap_mesh::Shape;
//!
//! let geometry = Shape::Cube.generate();
//! assert_eq!(geometry.uvs().len(), geometry.vertex_count());
//! ```

pub mod error;
pub mod geometry;
pub mod primitives;

pub use error::{MeshError, MeshResult};
pub use geometry::Geometry;
pub use primitives::Shape;
