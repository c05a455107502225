//! # Primitives
//!
//! Mesh generation for the two lab primitives: a subdivided cube and a
//! UV-sphere. Vertex layouts match the renderer's box and sphere primitives
//! so that the UV buffer lines up with what the renderer draws.
//!
//! [`Shape::generate`] builds the fixed lab resolutions and cannot fail.
//! [`create_box`] and [`create_uv_sphere`] take caller-chosen dimensions
//! (reduced-resolution meshes for tests and tools) and return
//! [`MeshError`](crate::MeshError) for sizes or segment counts that cannot
//! form a closed surface. [`create_cube`] and [`create_sphere`] are exactly
//! those builders called with the `config` constants.

pub mod cube;
pub mod sphere;

pub use cube::{create_box, create_cube};
pub use sphere::{create_sphere, create_uv_sphere};

use crate::geometry::Geometry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The primitive a projection is applied to.
///
/// # Example
///
/// ```rust
/// use uvmap_mesh::Shape;
///
/// let geometry = Shape::Sphere.generate();
/// assert_eq!(geometry.vertex_count(), 65 * 65);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Cube,
    Sphere,
}

impl Shape {
    /// Every shape, in control-surface order.
    pub const ALL: [Shape; 2] = [Shape::Cube, Shape::Sphere];

    /// Lowercase identifier used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Cube => "cube",
            Shape::Sphere => "sphere",
        }
    }

    /// Generates the primitive at its fixed lab resolution.
    ///
    /// The result carries positions, normals and indices, with every UV
    /// zeroed.
    pub fn generate(self) -> Geometry {
        let geometry = match self {
            Shape::Cube => create_cube(),
            Shape::Sphere => create_sphere(),
        };
        log::info!(
            "generated {} geometry: {} vertices, {} triangles",
            self,
            geometry.vertex_count(),
            geometry.triangle_count()
        );
        geometry
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
