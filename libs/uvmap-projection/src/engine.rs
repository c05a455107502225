//! # UV Projection Engine
//!
//! Pure functions from positions and a resolved frame to one raw UV per
//! vertex. Results are unbounded; the sampling policy decides what values
//! outside the unit square mean.
//!
//! ## Formulas
//!
//! For each vertex the working point is `p = position + offset`. Modes that
//! need a direction use `n = normalize(p)`.
//!
//! | Mode        | u                              | v                         |
//! |-------------|--------------------------------|---------------------------|
//! | Planar      | first in-plane component       | second in-plane component |
//! | Box         | in-plane of dominant `n` face  | (flipped on some faces)   |
//! | Cylindrical | `(angle + PI) / TAU`           | height along axis         |
//! | Spherical   | `0.5 + atan2(s.z, s.x) / TAU`  | `0.5 + asin(s.y) / PI`    |
//!
//! Linear coordinates are normalized with [`normalize_extent`].

use crate::remap::ResolvedFrame;
use crate::settings::{Axis, Projection, ProjectionConfig};
use config::constants::{approx_equal, normalize_extent, POLE_U};
use glam::{DVec2, DVec3};
use std::f64::consts::{PI, TAU};
use uvmap_mesh::Geometry;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Projects a single position.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{project_point, Axis, Projection, ResolvedFrame};
/// use glam::DVec3;
///
/// let frame = ResolvedFrame { axis: Axis::Z, offset: DVec3::ZERO };
/// let uv = project_point(DVec3::new(-1.5, 1.5, 0.0), Projection::Planar, &frame);
/// assert_eq!(uv.x, 0.0);
/// assert_eq!(uv.y, 1.0);
/// ```
pub fn project_point(position: DVec3, projection: Projection, frame: &ResolvedFrame) -> DVec2 {
    let p = position + frame.offset;
    match projection {
        Projection::Planar => planar(p, frame.axis),
        Projection::Box => box_face(p),
        Projection::Cylindrical => cylindrical(p, frame.axis),
        Projection::Spherical => spherical(p, frame.axis),
    }
}

/// Projects every position, preserving order and length.
pub fn project_positions(
    positions: &[DVec3],
    projection: Projection,
    frame: &ResolvedFrame,
) -> Vec<DVec2> {
    #[cfg(feature = "parallel")]
    {
        positions
            .par_iter()
            .map(|&p| project_point(p, projection, frame))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        positions
            .iter()
            .map(|&p| project_point(p, projection, frame))
            .collect()
    }
}

/// Computes a fresh UV buffer for `geometry` under `config`.
///
/// The returned buffer always has one entry per vertex. Tiling and repeat are
/// not applied here.
pub fn compute_uvs(geometry: &Geometry, config: &ProjectionConfig) -> Vec<DVec2> {
    let frame = config.frame();
    log::debug!(
        "Projecting {} vertices: {} on {:?} axis, offset {:?}",
        geometry.vertex_count(),
        config.projection,
        frame.axis,
        frame.offset
    );
    project_positions(geometry.positions(), config.projection, &frame)
}

/// Replaces the UV buffer of `geometry` with a projection under `config`.
pub fn apply_projection(geometry: &mut Geometry, config: &ProjectionConfig) {
    let uvs = compute_uvs(geometry, config);
    geometry.set_uvs(uvs);
}

fn planar(p: DVec3, axis: Axis) -> DVec2 {
    let (u, v) = match axis {
        Axis::Z => (p.x, p.y),
        Axis::X => (p.z, p.y),
        Axis::Y => (p.x, p.z),
    };
    DVec2::new(normalize_extent(u), normalize_extent(v))
}

/// Dominant face of `n`; ties resolve X, then Y, then Z.
fn box_face(p: DVec3) -> DVec2 {
    let n = p.normalize_or_zero();
    let a = n.abs();
    let max = a.max_element();

    if a.x == max {
        let u = normalize_extent(p.z);
        let v = normalize_extent(p.y);
        DVec2::new(if n.x > 0.0 { 1.0 - u } else { u }, v)
    } else if a.y == max {
        let u = normalize_extent(p.x);
        let v = normalize_extent(p.z);
        DVec2::new(u, if n.y < 0.0 { 1.0 - v } else { v })
    } else {
        let u = normalize_extent(p.x);
        let v = normalize_extent(p.y);
        DVec2::new(if n.z < 0.0 { 1.0 - u } else { u }, v)
    }
}

fn cylindrical(p: DVec3, axis: Axis) -> DVec2 {
    let (angle, height) = match axis {
        Axis::Y => (p.x.atan2(p.z), p.y),
        Axis::X => (p.z.atan2(p.y), p.x),
        Axis::Z => (p.x.atan2(p.y), p.z),
    };
    DVec2::new((angle + PI) / TAU, normalize_extent(height))
}

fn spherical(p: DVec3, axis: Axis) -> DVec2 {
    let n = p.normalize_or_zero();
    // Reorder so the selected axis lands in y.
    let s = match axis {
        Axis::Y => n,
        Axis::X => DVec3::new(n.y, n.x, n.z),
        Axis::Z => DVec3::new(n.x, n.z, n.y),
    };

    let u = if approx_equal(s.x, 0.0) && approx_equal(s.z, 0.0) {
        POLE_U
    } else {
        0.5 + s.z.atan2(s.x) / TAU
    };
    let v = 0.5 + s.y.clamp(-1.0, 1.0).asin() / PI;
    DVec2::new(u, v)
}
