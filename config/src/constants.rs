//! # Configuration Constants
//!
//! Centralized constants for the UV mapping pipeline. Primitive sizes,
//! tessellation, projection normalization and texture layout are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Primitives**: Cube and sphere dimensions and segment counts
//! - **Projection**: Normalization constants shared by the UV formulas
//! - **Limits**: UI bounds for offsets and tiling
//! - **Texture**: Diagnostic grid size, palette and label style

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(0.5, 0.5 + 1e-13));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PRIMITIVE CONSTANTS
// =============================================================================

/// Edge length of the generated cube.
///
/// The cube is axis-aligned and centered, so its faces sit at ±1.
///
/// # Example
///
/// ```rust
/// use config::constants::CUBE_SIZE;
///
/// let half = CUBE_SIZE / 2.0;
/// assert_eq!(half, 1.0);
/// ```
pub const CUBE_SIZE: f64 = 2.0;

/// Grid segments per cube edge.
///
/// High enough that curvature-based projections (spherical, cylindrical)
/// produce smooth gradients across the flat faces.
///
/// # Example
///
/// ```rust
/// use config::constants::CUBE_SEGMENTS;
///
/// // Each face is an independent (segments + 1)^2 vertex grid
/// let per_face = (CUBE_SEGMENTS + 1) * (CUBE_SEGMENTS + 1);
/// assert_eq!(per_face * 6, 6534);
/// ```
pub const CUBE_SEGMENTS: u32 = 32;

/// Radius of the generated UV-sphere.
///
/// # Example
///
/// ```rust
/// use config::constants::{SPHERE_RADIUS, PLANAR_HALF_EXTENT};
///
/// // The sphere fits inside the planar normalization window
/// assert!(SPHERE_RADIUS < PLANAR_HALF_EXTENT);
/// ```
pub const SPHERE_RADIUS: f64 = 1.2;

/// Longitudinal and latitudinal segments of the UV-sphere.
///
/// # Example
///
/// ```rust
/// use config::constants::SPHERE_SEGMENTS;
///
/// let vertices = (SPHERE_SEGMENTS + 1) * (SPHERE_SEGMENTS + 1);
/// assert_eq!(vertices, 4225);
/// ```
pub const SPHERE_SEGMENTS: u32 = 64;

/// Minimum segment count accepted by the primitive generators.
pub const MIN_SEGMENTS: u32 = 1;

/// Minimum width (longitude) segments for a sphere.
pub const MIN_SPHERE_WIDTH_SEGMENTS: u32 = 3;

/// Minimum height (latitude) segments for a sphere.
pub const MIN_SPHERE_HEIGHT_SEGMENTS: u32 = 2;

// =============================================================================
// PROJECTION CONSTANTS
// =============================================================================

/// Half of the planar normalization window.
///
/// Positions are shifted by this amount before being divided by
/// [`PLANAR_EXTENT`], mapping the ±1.5 extent of both primitives into [0, 1]
/// at the origin configuration.
///
/// # Example
///
/// ```rust
/// use config::constants::{PLANAR_EXTENT, PLANAR_HALF_EXTENT};
///
/// assert_eq!((-PLANAR_HALF_EXTENT + PLANAR_HALF_EXTENT) / PLANAR_EXTENT, 0.0);
/// assert_eq!((PLANAR_HALF_EXTENT + PLANAR_HALF_EXTENT) / PLANAR_EXTENT, 1.0);
/// ```
pub const PLANAR_HALF_EXTENT: f64 = 1.5;

/// Full width of the planar normalization window.
pub const PLANAR_EXTENT: f64 = 3.0;

/// Longitude assigned to points lying exactly on a spherical projection pole.
///
/// `atan2(0, 0)` carries no direction, so poles resolve to the middle of
/// the texture instead of depending on the sign of zero.
///
/// # Example
///
/// ```rust
/// use config::constants::POLE_U;
///
/// assert_eq!(POLE_U, 0.5);
/// ```
pub const POLE_U: f64 = 0.5;

// =============================================================================
// LIMIT CONSTANTS (control surface bounds)
// =============================================================================

/// Lower bound of the offset sliders.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_OFFSET, MAX_OFFSET};
///
/// let requested: f64 = 3.7;
/// assert_eq!(requested.clamp(MIN_OFFSET, MAX_OFFSET), 2.0);
/// ```
pub const MIN_OFFSET: f64 = -2.0;

/// Upper bound of the offset sliders.
pub const MAX_OFFSET: f64 = 2.0;

/// Smallest tiling factor. A factor of zero would collapse every sample
/// coordinate onto the origin.
///
/// # Example
///
/// ```rust
/// use config::constants::{MIN_TILING, MAX_TILING};
///
/// let requested: u32 = 0;
/// assert_eq!(requested.clamp(MIN_TILING, MAX_TILING), 1);
/// ```
pub const MIN_TILING: u32 = 1;

/// Largest tiling factor offered by the control surface.
pub const MAX_TILING: u32 = 10;

// =============================================================================
// TEXTURE CONSTANTS
// =============================================================================

/// Width and height of the diagnostic texture in pixels.
///
/// # Example
///
/// ```rust
/// use config::constants::{TEXTURE_SIZE, GRID_CELLS};
///
/// assert_eq!(TEXTURE_SIZE % GRID_CELLS, 0);
/// ```
pub const TEXTURE_SIZE: u32 = 1024;

/// Number of cells along each side of the diagnostic grid.
pub const GRID_CELLS: u32 = 8;

/// Row letters, indexed by grid row (top to bottom).
///
/// # Example
///
/// ```rust
/// use config::constants::{ROW_LABELS, GRID_CELLS};
///
/// assert_eq!(ROW_LABELS.len() as u32, GRID_CELLS);
/// assert_eq!(ROW_LABELS[0], 'A');
/// ```
pub const ROW_LABELS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// Cell fill colors (RGBA), selected by the cell pattern index.
///
/// Teal, pale yellow, red and tan: `#4d8076`, `#fceea7`, `#d95d5d`, `#e8ac65`.
pub const GRID_PALETTE: [[u8; 4]; 4] = [
    [0x4d, 0x80, 0x76, 0xff],
    [0xfc, 0xee, 0xa7, 0xff],
    [0xd9, 0x5d, 0x5d, 0xff],
    [0xe8, 0xac, 0x65, 0xff],
];

/// Label text color (`#1f2937`, dark slate).
pub const LABEL_COLOR: [u8; 4] = [0x1f, 0x29, 0x37, 0xff];

/// Pixel scale applied to the 5x7 label glyphs.
///
/// A scale of 8 gives 56 px tall glyphs inside 128 px cells.
///
/// # Example
///
/// ```rust
/// use config::constants::{LABEL_GLYPH_SCALE, TEXTURE_SIZE, GRID_CELLS};
///
/// let cell = TEXTURE_SIZE / GRID_CELLS;
/// assert!(7 * LABEL_GLYPH_SCALE < cell);
/// ```
pub const LABEL_GLYPH_SCALE: u32 = 8;

/// Horizontal gap between the two label glyphs, in glyph pixels.
pub const LABEL_GLYPH_SPACING: u32 = 1;

/// Extra stroke width, in texture pixels, used to embolden label glyphs.
pub const LABEL_BOLD_PX: u32 = 2;

/// Flat color substituted for texture samples outside the unit square when
/// repeat is disabled (pure green, RGBA).
///
/// # Example
///
/// ```rust
/// use config::constants::DIAGNOSTIC_COLOR;
///
/// assert_eq!(DIAGNOSTIC_COLOR, [0, 255, 0, 255]);
/// ```
pub const DIAGNOSTIC_COLOR: [u8; 4] = [0, 255, 0, 255];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Maps a position component from the primitive's extent into texture space.
///
/// # Example
///
/// ```rust
/// use config::constants::normalize_extent;
///
/// assert_eq!(normalize_extent(-1.5), 0.0);
/// assert_eq!(normalize_extent(1.5), 1.0);
/// ```
#[inline]
pub fn normalize_extent(value: f64) -> f64 {
    (value + PLANAR_HALF_EXTENT) / PLANAR_EXTENT
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
