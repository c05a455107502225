//! # Mesh Handle
//!
//! WASM-friendly snapshot of a projected mesh that can be transferred to
//! JavaScript.

use glam::DVec2;
use uvmap_mesh::Geometry;
use uvmap_projection::SamplingPolicy;
use wasm_bindgen::prelude::*;

/// Buffers for one projected mesh.
///
/// A handle is a copy: later session updates do not change it, so the
/// renderer can upload it without observing a partial recomputation.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = session.mesh();
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setAttribute('uv', new THREE.BufferAttribute(mesh.uvs(), 2));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Raw projected coordinates as [u, v, u, v, ...]
    uvs: Vec<f32>,
    /// Coordinates scaled by the tiling factor
    sampling_uvs: Vec<f32>,
    /// 1 where the vertex samples the diagnostic color, else 0
    out_of_range: Vec<u8>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the raw UVs as a Float32Array.
    ///
    /// Length: vertex_count * 2
    pub fn uvs(&self) -> Vec<f32> {
        self.uvs.clone()
    }

    /// Returns the UVs multiplied by the tiling factor.
    pub fn sampling_uvs(&self) -> Vec<f32> {
        self.sampling_uvs.clone()
    }

    /// Returns per-vertex diagnostic flags as a Uint8Array.
    pub fn out_of_range(&self) -> Vec<u8> {
        self.out_of_range.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Snapshots `geometry` and its sampling view under `policy`.
    pub fn from_geometry(geometry: &Geometry, policy: SamplingPolicy) -> Self {
        let sampling_uvs = flatten_uvs(&policy.sample_coords(geometry.uvs()));
        let out_of_range = policy
            .out_of_range_flags(geometry.uvs())
            .into_iter()
            .map(u8::from)
            .collect();

        Self {
            positions: geometry.positions_f32(),
            normals: geometry.normals_f32(),
            uvs: geometry.uvs_f32(),
            sampling_uvs,
            out_of_range,
            indices: geometry.indices_u32(),
            vertex_count: geometry.vertex_count() as u32,
            triangle_count: geometry.triangle_count() as u32,
        }
    }
}

fn flatten_uvs(uvs: &[DVec2]) -> Vec<f32> {
    uvs.iter()
        .flat_map(|uv| [uv.x as f32, uv.y as f32])
        .collect()
}
