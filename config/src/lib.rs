//! # Config Crate
//!
//! Centralized configuration constants for the UV mapping lab.
//! Primitive dimensions, projection normalization, diagnostic texture
//! layout and the UI bounds of the control surface are defined here so that
//! the mesh, projection and texture crates agree on a single set of numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PLANAR_HALF_EXTENT, PLANAR_EXTENT};
//!
//! // Normalize a coordinate from the primitive's extent into [0, 1]
//! let x = 1.0;
//! let u = (x + PLANAR_HALF_EXTENT) / PLANAR_EXTENT;
//! assert!((u - 2.5 / 3.0).abs() < 1e-12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Renderer Compatible**: Primitive layouts match the Three.js renderer

pub mod constants;
