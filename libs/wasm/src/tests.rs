//! Tests for the WASM-facing session and texture helpers.

use super::*;
use uvmap_projection::{Axis, ConfigError, Projection};

/// A fresh session carries the default cube with planar UVs.
#[test]
fn new_session_uses_defaults() {
    let session = UvSession::new();
    let mesh = session.mesh();

    assert_eq!(mesh.vertex_count(), 6534);
    assert_eq!(mesh.triangle_count(), 12288);
    assert_eq!(mesh.positions().len(), 6534 * 3);
    assert_eq!(mesh.normals().len(), 6534 * 3);
    assert_eq!(mesh.uvs().len(), 6534 * 2);
    assert_eq!(mesh.indices().len(), 12288 * 3);
    assert!(session.auto_rotate());
    assert!(session.repeat_texture());
    assert_eq!(session.tiling(), 1);
}

/// Shape changes bump the geometry version; projection changes only the UVs.
#[test]
fn versions_track_recomputation() {
    let mut session = UvSession::new();

    session.set_projection("cylindrical");
    assert_eq!(session.geometry_version(), 0);
    assert_eq!(session.uv_version(), 1);

    session.set_shape("sphere");
    assert_eq!(session.geometry_version(), 1);
    assert_eq!(session.uv_version(), 2);
    assert_eq!(session.mesh().vertex_count(), 4225);

    session.set_tiling(4);
    session.set_auto_rotate(false);
    assert_eq!(session.uv_version(), 2);
}

/// Unknown names fall back instead of failing.
#[test]
fn setters_fall_back_on_unknown_names() {
    let mut session = UvSession::new();
    session.set_projection("spherical");
    session.set_axis("x");

    session.set_projection("conical");
    session.set_axis("w");
    session.set_shape("torus");

    assert_eq!(session.config().projection, Projection::Planar);
    assert_eq!(session.config().axis, Axis::Z);
    assert_eq!(session.config().shape, uvmap_mesh::Shape::Cube);
}

/// Strict host helper reports the rejected name.
#[test]
fn strict_projection_setter_reports_errors() {
    let mut session = UvSession::new();
    let err = session.set_projection_strict("conical").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownName { kind: "projection", .. }));
    assert!(session.set_projection_strict("Box").is_ok());
    assert_eq!(session.config().projection, Projection::Box);
}

/// Setters clamp to the control bounds.
#[test]
fn setters_clamp_values() {
    let mut session = UvSession::new();
    session.set_offsets(9.0, -9.0, 0.5);
    session.set_tiling(50);

    let config = session.config();
    assert_eq!(config.offset_x, 2.0);
    assert_eq!(config.offset_y, -2.0);
    assert_eq!(config.offset_z, 0.5);
    assert_eq!(config.tiling, 10);
}

/// JSON configuration replaces the whole state.
#[test]
fn apply_config_json_internal_updates_session() {
    let mut session = UvSession::new();
    session
        .apply_config_json_internal(
            r#"{"shape":"sphere","projection":"spherical","axis":"y","tiling":2,"repeatTexture":false}"#,
        )
        .expect("valid configuration");

    assert_eq!(session.config().projection, Projection::Spherical);
    assert_eq!(session.geometry_version(), 1);

    let mesh = session.mesh();
    let flagged = mesh.out_of_range().iter().filter(|&&f| f == 1).count();
    assert_eq!(flagged, session.out_of_range_count());
    assert!(flagged > 0);
}

/// Malformed JSON leaves the session untouched.
#[test]
fn apply_config_json_internal_rejects_invalid() {
    let mut session = UvSession::new();
    let err = session
        .apply_config_json_internal(r#"{"projection": 3}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert_eq!(session.uv_version(), 0);
}

/// Tiling scales the sampling buffer only.
#[test]
fn sampling_uvs_follow_tiling() {
    let mut session = UvSession::new();
    session.set_tiling(3);
    let mesh = session.mesh();
    for (raw, sampled) in mesh.uvs().iter().zip(mesh.sampling_uvs()) {
        assert!((raw * 3.0 - sampled).abs() < 1e-5);
    }
}

/// Reset restores offsets, tiling and repeat.
#[test]
fn reset_mapping_restores_defaults() {
    let mut session = UvSession::new();
    session.set_projection("box");
    session.set_offsets(1.0, 1.0, 1.0);
    session.set_tiling(5);
    session.set_repeat_texture(false);

    session.reset_mapping();
    let config = session.config();
    assert_eq!(config.offsets(), glam::DVec3::ZERO);
    assert_eq!(config.tiling, 1);
    assert!(config.repeat_texture);
    assert_eq!(config.projection, Projection::Box);
}

/// Axis labels follow the blender toggle.
#[test]
fn axis_labels_follow_convention() {
    let mut session = UvSession::new();
    assert_eq!(session.axis_label("z"), "Depth");
    session.set_blender_mode(true);
    assert_eq!(session.axis_label("z"), "Up");
    assert_eq!(session.axis_label("y"), "Depth");
    assert!(session.summary().contains("Z-up"));
}

/// With repeat off the v = 1 edge is in range and shades from row A.
#[test]
fn unit_edge_shades_from_top_row() {
    let policy = uvmap_projection::SamplingPolicy::new(1, false);
    let texture = DiagnosticTexture::shared();
    let color = policy.shade(glam::DVec2::new(0.0, 1.0), |uv| {
        texture.sample_nearest(uv.x, uv.y)
    });
    assert_eq!(color, uvmap_texture::cell_color(0, 0));
    assert_ne!(color, uvmap_texture::cell_color(0, 7));
}

/// Texture exports have the expected sizes.
#[test]
fn texture_buffers_have_expected_size() {
    let size = texture_size() as usize;
    assert_eq!(diagnostic_texture_rgba().len(), size * size * 4);
}

/// The shader chunk carries the repeat switch and the diagnostic color.
#[test]
fn shader_chunk_uses_diagnostic_green() {
    let chunk = boundary_shader_chunk();
    assert!(!chunk.contains("uniform"));
    assert!(chunk.contains("uRepeat < 0.5"));
    assert!(chunk.contains("vec4(0.0, 1.0, 0.0, 1.0)"));
}
