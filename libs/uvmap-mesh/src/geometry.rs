//! # Geometry Data Structure
//!
//! Vertex positions, normals and triangle indices of a generated primitive,
//! plus the per-vertex UV slot filled in by the projection engine.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};

/// A triangle mesh with a parallel UV buffer.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary.
///
/// The UV buffer always holds exactly one coordinate per vertex: adding a
/// vertex adds a zeroed UV, and [`Geometry::set_uvs`] refuses buffers of any
/// other length.
///
/// # Example
///
/// ```rust
/// use uvmap_mesh::Geometry;
/// use glam::DVec3;
///
/// let mut geometry = Geometry::new();
/// geometry.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z);
/// geometry.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
/// geometry.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
/// geometry.add_triangle(0, 1, 2);
/// assert_eq!(geometry.uvs().len(), geometry.vertex_count());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Vertex positions (f64 for precision)
    positions: Vec<DVec3>,
    /// Vertex normals, parallel to `positions`
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Texture coordinates, parallel to `positions`
    uvs: Vec<DVec2>,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            triangles: Vec::new(),
            uvs: Vec::new(),
        }
    }

    /// Creates a geometry with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            uvs: Vec::with_capacity(vertex_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the geometry has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Adds a vertex with its normal and returns its index.
    ///
    /// The vertex's UV starts at the origin until a projection fills it in.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(DVec2::ZERO);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the position at the given index.
    #[inline]
    pub fn position(&self, index: u32) -> DVec3 {
        self.positions[index as usize]
    }

    /// Replaces the UV buffer.
    ///
    /// # Panics
    ///
    /// Panics if `uvs` does not hold exactly one coordinate per vertex. A
    /// mismatched buffer means the projection ran against a different
    /// geometry, which is a programming error rather than a recoverable one.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        assert_eq!(
            uvs.len(),
            self.positions.len(),
            "UV buffer length must match vertex count"
        );
        self.uvs = uvs;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Validates the geometry for correctness.
    ///
    /// Checks:
    /// - Positions, normals and UVs have the same length
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex or has zero area
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.positions.len() || self.uvs.len() != self.positions.len() {
            return false;
        }

        let vertex_count = self.positions.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() > EPSILON
        })
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    values
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}
