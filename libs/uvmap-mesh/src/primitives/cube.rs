//! # Cube Primitive
//!
//! Generates a centered, subdivided box. Every face is an independent vertex
//! grid so that face corners can carry their own normals and UVs.

use crate::error::{MeshError, MeshResult};
use crate::geometry::Geometry;
use config::constants::{CUBE_SEGMENTS, CUBE_SIZE, MIN_SEGMENTS};
use glam::DVec3;

/// One face of the box, described in the face's local (u, v, w) frame.
///
/// `u` and `v` are the in-plane axes (0 = x, 1 = y, 2 = z) and `w` is the
/// face normal axis. `depth` is the signed distance of the face along `w`,
/// doubled (the face sits at `depth / 2`).
struct FacePlane {
    u: usize,
    v: usize,
    w: usize,
    u_dir: f64,
    v_dir: f64,
    width: f64,
    height: f64,
    depth: f64,
    grid_x: u32,
    grid_y: u32,
}

/// Creates the lab cube: edge length 2, 32 segments per edge.
///
/// # Example
///
/// ```rust
/// use uvmap_mesh::primitives::create_cube;
///
/// let geometry = create_cube();
/// let (min, max) = geometry.bounding_box();
/// assert_eq!(min.x, -1.0);
/// assert_eq!(max.z, 1.0);
/// ```
pub fn create_cube() -> Geometry {
    build_box(
        DVec3::splat(CUBE_SIZE),
        [CUBE_SEGMENTS, CUBE_SEGMENTS, CUBE_SEGMENTS],
    )
}

/// Creates a centered box with the given size and segments per axis.
///
/// Faces are emitted in the order +X, -X, +Y, -Y, +Z, -Z. Each face holds
/// `(segments_a + 1) * (segments_b + 1)` vertices and two triangles per grid
/// cell.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
/// * `segments` - Grid segments along x, y and z
///
/// # Example
///
/// ```rust
/// use uvmap_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let geometry = create_box(DVec3::splat(2.0), [1, 1, 1]).unwrap();
/// assert_eq!(geometry.vertex_count(), 24);
/// assert_eq!(geometry.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3, segments: [u32; 3]) -> MeshResult<Geometry> {
    if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box size must be positive: {:?}",
            size
        )));
    }

    if let Some(&count) = segments.iter().find(|&&s| s < MIN_SEGMENTS) {
        return Err(MeshError::too_few_segments("box", count, MIN_SEGMENTS));
    }

    Ok(build_box(size, segments))
}

fn build_box(size: DVec3, segments: [u32; 3]) -> Geometry {
    let [sx, sy, sz] = segments;
    let planes = [
        // +X
        FacePlane { u: 2, v: 1, w: 0, u_dir: -1.0, v_dir: -1.0, width: size.z, height: size.y, depth: size.x, grid_x: sz, grid_y: sy },
        // -X
        FacePlane { u: 2, v: 1, w: 0, u_dir: 1.0, v_dir: -1.0, width: size.z, height: size.y, depth: -size.x, grid_x: sz, grid_y: sy },
        // +Y
        FacePlane { u: 0, v: 2, w: 1, u_dir: 1.0, v_dir: 1.0, width: size.x, height: size.z, depth: size.y, grid_x: sx, grid_y: sz },
        // -Y
        FacePlane { u: 0, v: 2, w: 1, u_dir: 1.0, v_dir: -1.0, width: size.x, height: size.z, depth: -size.y, grid_x: sx, grid_y: sz },
        // +Z
        FacePlane { u: 0, v: 1, w: 2, u_dir: 1.0, v_dir: -1.0, width: size.x, height: size.y, depth: size.z, grid_x: sx, grid_y: sy },
        // -Z
        FacePlane { u: 0, v: 1, w: 2, u_dir: -1.0, v_dir: -1.0, width: size.x, height: size.y, depth: -size.z, grid_x: sx, grid_y: sy },
    ];

    let vertex_count: usize = planes
        .iter()
        .map(|p| ((p.grid_x + 1) * (p.grid_y + 1)) as usize)
        .sum();
    let triangle_count: usize = planes
        .iter()
        .map(|p| (p.grid_x * p.grid_y * 2) as usize)
        .sum();

    let mut geometry = Geometry::with_capacity(vertex_count, triangle_count);
    for plane in &planes {
        add_face(&mut geometry, plane);
    }
    geometry
}

fn add_face(geometry: &mut Geometry, plane: &FacePlane) {
    let segment_w = plane.width / plane.grid_x as f64;
    let segment_h = plane.height / plane.grid_y as f64;
    let half_w = plane.width / 2.0;
    let half_h = plane.height / 2.0;
    let half_d = plane.depth / 2.0;
    let row = plane.grid_x + 1;

    let mut normal = [0.0; 3];
    normal[plane.w] = plane.depth.signum();
    let normal = DVec3::from_array(normal);

    let base = geometry.vertex_count() as u32;

    for iy in 0..=plane.grid_y {
        let y = iy as f64 * segment_h - half_h;
        for ix in 0..=plane.grid_x {
            let x = ix as f64 * segment_w - half_w;

            let mut position = [0.0; 3];
            position[plane.u] = x * plane.u_dir;
            position[plane.v] = y * plane.v_dir;
            position[plane.w] = half_d;

            geometry.add_vertex(DVec3::from_array(position), normal);
        }
    }

    for iy in 0..plane.grid_y {
        for ix in 0..plane.grid_x {
            let a = base + ix + row * iy;
            let b = base + ix + row * (iy + 1);
            let c = base + (ix + 1) + row * (iy + 1);
            let d = base + (ix + 1) + row * iy;

            geometry.add_triangle(a, b, d);
            geometry.add_triangle(b, c, d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_vertex_count() {
        let geometry = create_cube();
        assert_eq!(geometry.vertex_count(), 6534);
    }

    #[test]
    fn test_cube_triangle_count() {
        let geometry = create_cube();
        assert_eq!(geometry.triangle_count(), 12288);
    }

    #[test]
    fn test_cube_centered() {
        let (min, max) = create_cube().bounding_box();
        assert_eq!(min, DVec3::splat(-1.0));
        assert_eq!(max, DVec3::splat(1.0));
    }

    #[test]
    fn test_cube_first_vertex_is_corner() {
        // +X face starts at its top-back corner
        let geometry = create_cube();
        assert_eq!(geometry.position(0), DVec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cube_vertices_lie_on_surface() {
        let geometry = create_cube();
        for p in geometry.positions() {
            let max = p.abs().max_element();
            assert_eq!(max, 1.0, "vertex {:?} is not on the cube surface", p);
        }
    }

    #[test]
    fn test_cube_normals_point_outward() {
        let geometry = create_cube();
        for (p, n) in geometry.positions().iter().zip(geometry.normals()) {
            assert_eq!(n.length(), 1.0);
            assert!(p.dot(*n) > 0.0);
        }
    }

    #[test]
    fn test_cube_face_order() {
        let geometry = create_cube();
        let per_face = 33 * 33;
        let expected = [DVec3::X, -DVec3::X, DVec3::Y, -DVec3::Y, DVec3::Z, -DVec3::Z];
        for (face, normal) in expected.iter().enumerate() {
            assert_eq!(geometry.normals()[face * per_face], *normal);
        }
    }

    #[test]
    fn test_cube_validates() {
        assert!(create_cube().validate());
    }

    #[test]
    fn test_box_rectangular() {
        let geometry = create_box(DVec3::new(2.0, 4.0, 6.0), [2, 3, 4]).unwrap();
        let (min, max) = geometry.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
        // x faces: 5*4, y faces: 3*5, z faces: 3*4 vertices, twice each
        assert_eq!(geometry.vertex_count(), 2 * (20 + 15 + 12));
    }

    #[test]
    fn test_box_invalid_size() {
        assert!(create_box(DVec3::new(0.0, 1.0, 1.0), [1, 1, 1]).is_err());
        assert!(create_box(DVec3::new(-1.0, 1.0, 1.0), [1, 1, 1]).is_err());
    }

    #[test]
    fn test_box_zero_segments() {
        let result = create_box(DVec3::ONE, [1, 0, 1]);
        assert!(matches!(result, Err(MeshError::TooFewSegments { count: 0, .. })));
    }
}
