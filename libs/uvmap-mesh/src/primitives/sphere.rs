//! # Sphere Primitive
//!
//! Generates a UV-sphere using latitude/longitude tessellation.

use crate::error::{MeshError, MeshResult};
use crate::geometry::Geometry;
use config::constants::{
    MIN_SPHERE_HEIGHT_SEGMENTS, MIN_SPHERE_WIDTH_SEGMENTS, SPHERE_RADIUS, SPHERE_SEGMENTS,
};
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Creates the lab sphere: radius 1.2, 64 segments in both directions.
///
/// # Example
///
/// ```rust
/// use uvmap_mesh::primitives::create_sphere;
///
/// let geometry = create_sphere();
/// assert_eq!(geometry.vertex_count(), 4225);
/// ```
pub fn create_sphere() -> Geometry {
    build_uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

/// Creates a UV-sphere centered at the origin with +Y as its polar axis.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `width_segments` - Segments around the equator
/// * `height_segments` - Segments from pole to pole
///
/// # Algorithm
///
/// - `(width_segments + 1) * (height_segments + 1)` vertices; the first and
///   last column coincide along the seam and each pole row collapses to a
///   single point
/// - Vertex at (row iy, column ix): polar angle `theta = PI * iy / height`,
///   azimuth `phi = TAU * ix / width`,
///   position `(-r cos(phi) sin(theta), r cos(theta), r sin(phi) sin(theta))`
/// - Pole rows are exact: `sin(theta) = 0` at both ends
/// - The degenerate triangle of each quad touching a pole is omitted
///
/// # Example
///
/// ```rust
/// use uvmap_mesh::primitives::create_uv_sphere;
///
/// let geometry = create_uv_sphere(1.0, 8, 4).unwrap();
/// assert_eq!(geometry.vertex_count(), 9 * 5);
/// assert_eq!(geometry.triangle_count(), 8 * 3 * 2);
/// ```
pub fn create_uv_sphere(
    radius: f64,
    width_segments: u32,
    height_segments: u32,
) -> MeshResult<Geometry> {
    if radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "sphere radius must be positive: {}",
            radius
        )));
    }

    if width_segments < MIN_SPHERE_WIDTH_SEGMENTS {
        return Err(MeshError::too_few_segments(
            "sphere",
            width_segments,
            MIN_SPHERE_WIDTH_SEGMENTS,
        ));
    }

    if height_segments < MIN_SPHERE_HEIGHT_SEGMENTS {
        return Err(MeshError::too_few_segments(
            "sphere",
            height_segments,
            MIN_SPHERE_HEIGHT_SEGMENTS,
        ));
    }

    Ok(build_uv_sphere(radius, width_segments, height_segments))
}

fn build_uv_sphere(radius: f64, width_segments: u32, height_segments: u32) -> Geometry {
    let row = width_segments + 1;
    let vertex_count = (row * (height_segments + 1)) as usize;
    let triangle_count = (width_segments * (height_segments - 1) * 2) as usize;
    let mut geometry = Geometry::with_capacity(vertex_count, triangle_count);

    for iy in 0..=height_segments {
        let (sin_theta, cos_theta) = ring_angle(iy, height_segments);

        for ix in 0..=width_segments {
            let phi = TAU * ix as f64 / width_segments as f64;
            let position = DVec3::new(
                -radius * phi.cos() * sin_theta,
                radius * cos_theta,
                radius * phi.sin() * sin_theta,
            );
            geometry.add_vertex(position, position.normalize_or_zero());
        }
    }

    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                geometry.add_triangle(a, b, d);
            }
            if iy != height_segments - 1 {
                geometry.add_triangle(b, c, d);
            }
        }
    }

    geometry
}

/// Returns (sin, cos) of the polar angle for ring `iy`, exact at the poles.
fn ring_angle(iy: u32, height_segments: u32) -> (f64, f64) {
    if iy == 0 {
        (0.0, 1.0)
    } else if iy == height_segments {
        (0.0, -1.0)
    } else {
        let theta = PI * iy as f64 / height_segments as f64;
        theta.sin_cos()
    }
}
