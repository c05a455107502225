//! # Projection Session
//!
//! Owns the current configuration and geometry, and applies configuration
//! changes as whole-buffer swaps.

use crate::boundary::SamplingPolicy;
use crate::engine::compute_uvs;
use crate::settings::ProjectionConfig;
use glam::DVec2;
use uvmap_mesh::Geometry;

/// What an [`ProjectionSession::apply`] call recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionUpdate {
    /// The shape changed and the geometry was rebuilt.
    pub geometry_regenerated: bool,
    /// The UV buffer was recomputed.
    pub uvs_recomputed: bool,
}

/// One logical viewer session.
///
/// The geometry always carries UVs matching the current configuration.
/// Updates build a complete replacement before touching `self`, so a reader
/// holding `&ProjectionSession` never sees a half-written buffer.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{Projection, ProjectionConfig, ProjectionSession, Shape};
///
/// let mut session = ProjectionSession::new(ProjectionConfig::default());
/// let update = session.apply(ProjectionConfig {
///     shape: Shape::Sphere,
///     projection: Projection::Spherical,
///     ..Default::default()
/// });
/// assert!(update.geometry_regenerated);
/// assert_eq!(session.geometry().uvs().len(), session.geometry().vertex_count());
/// ```
#[derive(Debug, Clone)]
pub struct ProjectionSession {
    config: ProjectionConfig,
    geometry: Geometry,
}

impl Default for ProjectionSession {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

impl ProjectionSession {
    /// Generates the configured shape and projects it.
    pub fn new(config: ProjectionConfig) -> Self {
        let mut geometry = config.shape.generate();
        let uvs = compute_uvs(&geometry, &config);
        geometry.set_uvs(uvs);
        Self { config, geometry }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn sampling_policy(&self) -> SamplingPolicy {
        self.config.sampling_policy()
    }

    /// Switches to `config`, recomputing only what it invalidates.
    ///
    /// A shape change regenerates the geometry. Projection, axis, offset or
    /// convention changes recompute the UV buffer. Tiling, repeat and
    /// auto-rotate changes only replace the stored configuration.
    pub fn apply(&mut self, config: ProjectionConfig) -> SessionUpdate {
        let mut update = SessionUpdate::default();

        if config.shape != self.config.shape {
            log::info!("Shape changed: {} -> {}", self.config.shape, config.shape);
            let mut geometry = config.shape.generate();
            let uvs = compute_uvs(&geometry, &config);
            geometry.set_uvs(uvs);
            self.geometry = geometry;
            update.geometry_regenerated = true;
            update.uvs_recomputed = true;
        } else if self.config.projection_differs(&config) {
            let uvs = compute_uvs(&self.geometry, &config);
            self.geometry.set_uvs(uvs);
            update.uvs_recomputed = true;
        }

        self.config = config;
        update
    }

    /// Restores offsets, tiling and repeat to their defaults.
    pub fn reset_mapping(&mut self) -> SessionUpdate {
        let mut config = self.config;
        config.reset_mapping();
        self.apply(config)
    }

    /// Raw UVs scaled by the tiling factor.
    pub fn sampling_uvs(&self) -> Vec<DVec2> {
        self.sampling_policy().sample_coords(self.geometry.uvs())
    }

    /// Per-vertex diagnostic flags under the current sampling policy.
    pub fn out_of_range_flags(&self) -> Vec<bool> {
        self.sampling_policy()
            .out_of_range_flags(self.geometry.uvs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Axis, Projection};
    use uvmap_mesh::Shape;

    #[test]
    fn test_new_session_has_uvs() {
        let session = ProjectionSession::default();
        assert_eq!(session.geometry().vertex_count(), 6534);
        assert_eq!(session.geometry().uvs().len(), 6534);
    }

    #[test]
    fn test_sampling_change_keeps_uvs() {
        let mut session = ProjectionSession::default();
        let before = session.geometry().uvs().to_vec();

        let update = session.apply(ProjectionConfig {
            tiling: 3,
            repeat_texture: false,
            auto_rotate: false,
            ..*session.config()
        });

        assert_eq!(update, SessionUpdate::default());
        assert_eq!(session.geometry().uvs(), before.as_slice());
        assert_eq!(session.config().tiling, 3);
    }

    #[test]
    fn test_projection_change_recomputes_uvs() {
        let mut session = ProjectionSession::default();
        let before = session.geometry().uvs().to_vec();

        let update = session.apply(ProjectionConfig {
            projection: Projection::Cylindrical,
            axis: Axis::Y,
            ..*session.config()
        });

        assert!(update.uvs_recomputed);
        assert!(!update.geometry_regenerated);
        assert_ne!(session.geometry().uvs(), before.as_slice());
    }

    #[test]
    fn test_shape_change_regenerates_geometry() {
        let mut session = ProjectionSession::default();
        let update = session.apply(ProjectionConfig {
            shape: Shape::Sphere,
            ..*session.config()
        });

        assert!(update.geometry_regenerated);
        assert_eq!(session.geometry().vertex_count(), 4225);
        assert_eq!(session.geometry().uvs().len(), 4225);
    }

    #[test]
    fn test_reset_mapping() {
        let mut session = ProjectionSession::new(ProjectionConfig {
            offset_x: 1.0,
            tiling: 4,
            repeat_texture: false,
            ..Default::default()
        });

        let update = session.reset_mapping();
        assert!(update.uvs_recomputed);
        assert_eq!(*session.config(), ProjectionConfig::default());
        assert_eq!(
            session.geometry().uvs(),
            ProjectionSession::default().geometry().uvs()
        );
    }

    #[test]
    fn test_sampling_uvs_follow_tiling() {
        let session = ProjectionSession::new(ProjectionConfig {
            tiling: 2,
            ..Default::default()
        });
        let raw = session.geometry().uvs();
        let scaled = session.sampling_uvs();
        assert_eq!(raw.len(), scaled.len());
        for (r, s) in raw.iter().zip(&scaled) {
            assert_eq!(*s, *r * 2.0);
        }
    }
}
