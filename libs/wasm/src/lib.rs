//! WASM-facing entry points for the UV mapping lab.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests drive [`UvSession`] through its Rust-typed
//! helpers to avoid depending on a JS host.
//!
//! ```
//! let mut session = uvmap_wasm::UvSession::new();
//! session.set_projection("box");
//! assert_eq!(session.summary(), "Box | cube");
//! ```

use config::constants::{DIAGNOSTIC_COLOR, TEXTURE_SIZE};
use std::fmt::Display;
use uvmap_texture::DiagnosticTexture;
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod session;

#[cfg(target_arch = "wasm32")]
mod console_log;

pub use mesh_handle::MeshHandle;
pub use session::UvSession;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "uvmap-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` records to the browser console. Safe to call repeatedly.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    console_log::init();
}

/// Side length of the diagnostic texture in pixels.
#[wasm_bindgen]
pub fn texture_size() -> u32 {
    TEXTURE_SIZE
}

/// Diagnostic texture as row-major RGBA8, top row first.
///
/// Upload with `flipY` enabled so that row `A` lands at `v = 1`.
#[wasm_bindgen]
pub fn diagnostic_texture_rgba() -> Vec<u8> {
    DiagnosticTexture::shared().rgba_bytes().to_vec()
}

/// Diagnostic texture encoded as PNG.
///
/// # Errors
/// Returns a JavaScript error if encoding fails.
#[wasm_bindgen]
pub fn diagnostic_texture_png() -> Result<Vec<u8>, JsValue> {
    DiagnosticTexture::shared().to_png().map_err(to_js_error)
}

/// Fragment shader chunk replacing Three.js's `#include <map_fragment>`.
///
/// Expects a `uRepeat` float uniform: 1.0 when repeat is on, 0.0 when off.
/// With repeat off, samples outside the unit square draw the diagnostic
/// color instead of the texture.
#[wasm_bindgen]
pub fn boundary_shader_chunk() -> String {
    let [r, g, b, a] = DIAGNOSTIC_COLOR.map(|c| c as f32 / 255.0);
    format!(
        r#"#ifdef USE_MAP
  vec2 uv = vMapUv;
  bool outOfBounds = (uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0);
  if (uRepeat < 0.5 && outOfBounds) {{
    diffuseColor = vec4({:.1}, {:.1}, {:.1}, {:.1});
  }} else {{
    vec4 texelColor = texture2D(map, vMapUv);
    diffuseColor *= texelColor;
  }}
#endif
"#,
        r, g, b, a
    )
}

fn to_js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests;
