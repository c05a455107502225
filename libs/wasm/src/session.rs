//! # UV Session
//!
//! JavaScript handle over a [`ProjectionSession`]. Setters take plain
//! strings and numbers straight from the control surface.

use crate::mesh_handle::MeshHandle;
use uvmap_mesh::Shape;
use uvmap_projection::{
    parse_lenient, parse_strict, Axis, ConfigResult, Projection, ProjectionConfig,
    ProjectionSession, SessionUpdate,
};
use wasm_bindgen::prelude::*;

/// One viewer session: current configuration plus its projected geometry.
///
/// Unknown shape, projection or axis names fall back to cube, planar and Z
/// with a logged warning. Offsets and tiling are clamped to the control
/// bounds.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const session = new UvSession();
/// session.set_projection("spherical");
/// session.set_axis("y");
/// if (session.geometry_version !== lastGeometry) rebuildGeometry(session.mesh());
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct UvSession {
    inner: ProjectionSession,
    geometry_version: u32,
    uv_version: u32,
}

impl Default for UvSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UvSession {
    /// Creates a session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> UvSession {
        Self::with_config(ProjectionConfig::default())
    }

    /// Creates a session from a camelCase configuration object in JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error when the JSON does not describe a
    /// configuration.
    pub fn from_config_json(json: &str) -> Result<UvSession, JsValue> {
        ProjectionConfig::from_json(json)
            .map(|config| Self::with_config(config.clamped()))
            .map_err(crate::to_js_error)
    }

    /// Incremented every time the geometry is regenerated.
    #[wasm_bindgen(getter)]
    pub fn geometry_version(&self) -> u32 {
        self.geometry_version
    }

    /// Incremented every time the UV buffer is recomputed.
    #[wasm_bindgen(getter)]
    pub fn uv_version(&self) -> u32 {
        self.uv_version
    }

    pub fn set_shape(&mut self, name: &str) {
        let shape = parse_lenient::<Shape>(name);
        self.update(|config| config.shape = shape);
    }

    pub fn set_projection(&mut self, name: &str) {
        let projection = parse_lenient::<Projection>(name);
        self.update(|config| config.projection = projection);
    }

    pub fn set_axis(&mut self, name: &str) {
        let axis = parse_lenient::<Axis>(name);
        self.update(|config| config.axis = axis);
    }

    pub fn set_offsets(&mut self, x: f64, y: f64, z: f64) {
        self.update(|config| {
            config.offset_x = x;
            config.offset_y = y;
            config.offset_z = z;
        });
    }

    pub fn set_tiling(&mut self, tiling: u32) {
        self.update(|config| config.tiling = tiling);
    }

    pub fn set_repeat_texture(&mut self, repeat: bool) {
        self.update(|config| config.repeat_texture = repeat);
    }

    pub fn set_blender_mode(&mut self, enabled: bool) {
        self.update(|config| config.alternate_convention = enabled);
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.update(|config| config.auto_rotate = enabled);
    }

    /// Restores offsets, tiling and repeat to their defaults.
    pub fn reset_mapping(&mut self) {
        let update = self.inner.reset_mapping();
        self.record(update);
    }

    /// Replaces the whole configuration from JSON.
    ///
    /// # Errors
    /// Returns a JavaScript error when the JSON does not describe a
    /// configuration; the session is left unchanged.
    pub fn apply_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.apply_config_json_internal(json)
            .map_err(crate::to_js_error)
    }

    /// Current configuration as camelCase JSON.
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.inner.config().to_json().map_err(crate::to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn tiling(&self) -> u32 {
        self.inner.config().tiling
    }

    #[wasm_bindgen(getter)]
    pub fn repeat_texture(&self) -> bool {
        self.inner.config().repeat_texture
    }

    #[wasm_bindgen(getter)]
    pub fn auto_rotate(&self) -> bool {
        self.inner.config().auto_rotate
    }

    /// Text for the current-mode indicator.
    pub fn summary(&self) -> String {
        self.inner.config().summary().to_string()
    }

    /// Role of `axis` ("Side", "Up" or "Depth") under the active convention.
    pub fn axis_label(&self, axis: &str) -> String {
        parse_lenient::<Axis>(axis)
            .label(self.inner.config().convention())
            .to_string()
    }

    /// Snapshot of the current geometry and UV buffers.
    pub fn mesh(&self) -> MeshHandle {
        MeshHandle::from_geometry(self.inner.geometry(), self.inner.sampling_policy())
    }

    /// Number of vertices that sample the diagnostic color.
    pub fn out_of_range_count(&self) -> usize {
        self.inner
            .sampling_policy()
            .out_of_range_count(self.inner.geometry().uvs())
    }
}

impl UvSession {
    /// Creates a session for `config` as given.
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            inner: ProjectionSession::new(config),
            geometry_version: 0,
            uv_version: 0,
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.inner.config()
    }

    pub fn session(&self) -> &ProjectionSession {
        &self.inner
    }

    /// Host-side variant of [`UvSession::apply_config_json`] with Rust
    /// errors.
    pub fn apply_config_json_internal(&mut self, json: &str) -> ConfigResult<()> {
        let config = ProjectionConfig::from_json(json)?;
        let update = self.inner.apply(config.clamped());
        self.record(update);
        Ok(())
    }

    /// Host-side lookup of a name without the lenient fallback.
    pub fn set_projection_strict(&mut self, name: &str) -> ConfigResult<()> {
        let projection = parse_strict::<Projection>(name)?;
        self.update(|config| config.projection = projection);
        Ok(())
    }

    fn update(&mut self, edit: impl FnOnce(&mut ProjectionConfig)) {
        let mut config = *self.inner.config();
        edit(&mut config);
        let update = self.inner.apply(config.clamped());
        self.record(update);
    }

    fn record(&mut self, update: SessionUpdate) {
        if update.geometry_regenerated {
            self.geometry_version = self.geometry_version.wrapping_add(1);
        }
        if update.uvs_recomputed {
            self.uv_version = self.uv_version.wrapping_add(1);
        }
    }
}
