//! # UV Projection
//!
//! Computes texture coordinates for the lab primitives from a
//! [`ProjectionConfig`], and describes how those coordinates are sampled.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectionConfig ─► resolve_frame ─► project_positions ─► Geometry UVs
//!                                                               │
//!                          SamplingPolicy (tiling, repeat) ◄────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use uvmap_projection::{compute_uvs, Projection, ProjectionConfig, Shape};
//!
//! let geometry = Shape::Cube.generate();
//! let config = ProjectionConfig { projection: Projection::Box, ..Default::default() };
//! let uvs = compute_uvs(&geometry, &config);
//! assert_eq!(uvs.len(), geometry.vertex_count());
//! ```

pub mod boundary;
pub mod engine;
pub mod error;
pub mod named;
pub mod remap;
pub mod session;
pub mod settings;

pub use boundary::{Sample, SamplingPolicy};
pub use engine::{apply_projection, compute_uvs, project_point, project_positions};
pub use error::{ConfigError, ConfigResult};
pub use named::{parse_lenient, parse_strict, Named};
pub use remap::{resolve_frame, ResolvedFrame};
pub use session::{ProjectionSession, SessionUpdate};
pub use settings::{Axis, AxisConvention, ModeSummary, Projection, ProjectionConfig};
pub use uvmap_mesh::{Geometry, Shape};
