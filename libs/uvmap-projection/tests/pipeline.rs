use approx::assert_relative_eq;
use uvmap_projection::{
    compute_uvs, Axis, Projection, ProjectionConfig, ProjectionSession, SamplingPolicy, Shape,
};

const PROJECTIONS: [Projection; 4] = [
    Projection::Planar,
    Projection::Box,
    Projection::Cylindrical,
    Projection::Spherical,
];

fn uv_at(shape: Shape, config: &ProjectionConfig, position: glam::DVec3) -> glam::DVec2 {
    let geometry = shape.generate();
    let index = geometry
        .positions()
        .iter()
        .position(|p| *p == position)
        .expect("vertex present in generated geometry");
    compute_uvs(&geometry, config)[index]
}

#[test]
fn uv_count_matches_vertex_count_for_every_mode() {
    for shape in Shape::ALL {
        let geometry = shape.generate();
        for projection in PROJECTIONS {
            for axis in [Axis::X, Axis::Y, Axis::Z] {
                let config = ProjectionConfig {
                    shape,
                    projection,
                    axis,
                    ..Default::default()
                };
                assert_eq!(compute_uvs(&geometry, &config).len(), geometry.vertex_count());
            }
        }
    }
}

#[test]
fn recomputation_is_bit_identical() {
    let geometry = Shape::Sphere.generate();
    let config = ProjectionConfig {
        projection: Projection::Spherical,
        axis: Axis::X,
        offset_x: 0.37,
        offset_z: -1.1,
        ..Default::default()
    };
    let first = compute_uvs(&geometry, &config);
    let second = compute_uvs(&geometry, &config);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn planar_cube_corners() {
    let config = ProjectionConfig::default();

    let uv = uv_at(Shape::Cube, &config, glam::DVec3::new(1.0, 1.0, 1.0));
    assert_relative_eq!(uv.x, 0.8333333333333334);
    assert_relative_eq!(uv.y, 0.8333333333333334);

    let uv = uv_at(Shape::Cube, &config, glam::DVec3::new(-1.0, -1.0, 1.0));
    assert_relative_eq!(uv.x, 0.16666666666666666);
    assert_relative_eq!(uv.y, 0.16666666666666666);
}

#[test]
fn box_corner_selects_x_face() {
    let config = ProjectionConfig {
        projection: Projection::Box,
        ..Default::default()
    };
    let uv = uv_at(Shape::Cube, &config, glam::DVec3::new(1.0, 1.0, 1.0));
    assert_relative_eq!(uv.x, 0.16666666666666666, epsilon = 1e-12);
    assert_relative_eq!(uv.y, 0.8333333333333334, epsilon = 1e-12);
}

#[test]
fn spherical_pole_resolves_to_half() {
    let config = ProjectionConfig {
        shape: Shape::Sphere,
        projection: Projection::Spherical,
        axis: Axis::Y,
        ..Default::default()
    };
    let uv = uv_at(Shape::Sphere, &config, glam::DVec3::new(0.0, 1.2, 0.0));
    assert_eq!(uv.x, 0.5);
    assert_relative_eq!(uv.y, 1.0);
}

#[test]
fn alternate_convention_matches_swapped_standard_request() {
    let (x, a, b) = (0.3, -0.7, 1.4);
    for shape in Shape::ALL {
        let geometry = shape.generate();
        for projection in PROJECTIONS {
            let z_up = ProjectionConfig {
                shape,
                projection,
                axis: Axis::Z,
                alternate_convention: true,
                offset_x: x,
                offset_y: a,
                offset_z: b,
                ..Default::default()
            };
            let y_up = ProjectionConfig {
                axis: Axis::Y,
                alternate_convention: false,
                offset_y: b,
                offset_z: a,
                ..z_up
            };
            assert_eq!(
                compute_uvs(&geometry, &z_up),
                compute_uvs(&geometry, &y_up),
                "{} / {}",
                shape,
                projection
            );
        }
    }
}

#[test]
fn clamped_tiling_two_flags_outside_half_square() {
    let config = ProjectionConfig {
        shape: Shape::Sphere,
        projection: Projection::Spherical,
        axis: Axis::Y,
        tiling: 2,
        repeat_texture: false,
        ..Default::default()
    };
    let session = ProjectionSession::new(config);
    let raw = session.geometry().uvs();
    let flags = session.out_of_range_flags();

    let mut flagged = 0;
    for (uv, flag) in raw.iter().zip(&flags) {
        let outside = uv.x < 0.0 || uv.x > 0.5 || uv.y < 0.0 || uv.y > 0.5;
        assert_eq!(*flag, outside, "uv {:?}", uv);
        flagged += *flag as usize;
    }
    assert!(flagged > 0);
    assert!(flagged < raw.len());
}

#[test]
fn repeat_wraps_instead_of_flagging() {
    let policy = SamplingPolicy::new(10, true);
    let geometry = Shape::Cube.generate();
    let uvs = compute_uvs(&geometry, &ProjectionConfig::default());
    assert_eq!(policy.out_of_range_count(&uvs), 0);
}

#[test]
fn json_config_drives_session() {
    let config = ProjectionConfig::from_json(
        r#"{"shape":"sphere","projection":"cylindrical","axis":"x","offsetX":0.5,"tiling":3,"repeatTexture":true,"blenderMode":false,"autoRotate":false}"#,
    )
    .unwrap();
    let session = ProjectionSession::new(config);
    assert_eq!(session.geometry().vertex_count(), 4225);
    assert_eq!(session.sampling_uvs().len(), 4225);
    assert_eq!(session.sampling_policy().tiling(), 3);
}
