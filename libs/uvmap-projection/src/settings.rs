//! # Projection Settings
//!
//! The configuration value driving a recomputation, and the closed
//! enumerations it is built from.

use crate::boundary::SamplingPolicy;
use crate::error::ConfigResult;
use crate::named::{parse_strict, Named};
use crate::remap::{resolve_frame, ResolvedFrame};
use config::constants::{MAX_OFFSET, MAX_TILING, MIN_OFFSET, MIN_TILING};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uvmap_mesh::Shape;

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// UV projection method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Project onto the plane perpendicular to the selected axis.
    #[default]
    Planar,
    /// Per vertex, project onto the plane of the dominant direction.
    Box,
    /// Angle around the selected axis and height along it.
    Cylindrical,
    /// Longitude/latitude with the selected axis as the pole.
    Spherical,
}

impl Projection {
    /// Capitalized name for display.
    pub fn display_name(self) -> &'static str {
        match self {
            Projection::Planar => "Planar",
            Projection::Box => "Box",
            Projection::Cylindrical => "Cylindrical",
            Projection::Spherical => "Spherical",
        }
    }

    /// Whether the selected axis influences this projection.
    ///
    /// Box projection picks a face per vertex and ignores the axis.
    pub fn uses_axis(self) -> bool {
        !matches!(self, Projection::Box)
    }
}

impl Named for Projection {
    const KIND: &'static str = "projection";
    const ALL: &'static [Self] = &[
        Projection::Planar,
        Projection::Box,
        Projection::Cylindrical,
        Projection::Spherical,
    ];
    const FALLBACK: Self = Projection::Planar;

    fn name(self) -> &'static str {
        match self {
            Projection::Planar => "planar",
            Projection::Box => "box",
            Projection::Cylindrical => "cylindrical",
            Projection::Spherical => "spherical",
        }
    }
}

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// The role this axis plays for the user under `convention`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uvmap_projection::{Axis, AxisConvention};
    ///
    /// assert_eq!(Axis::Y.label(AxisConvention::YUp), "Up");
    /// assert_eq!(Axis::Y.label(AxisConvention::ZUp), "Depth");
    /// ```
    pub fn label(self, convention: AxisConvention) -> &'static str {
        match (self, convention) {
            (Axis::X, _) => "Side",
            (Axis::Y, AxisConvention::YUp) | (Axis::Z, AxisConvention::ZUp) => "Up",
            (Axis::Z, AxisConvention::YUp) | (Axis::Y, AxisConvention::ZUp) => "Depth",
        }
    }
}

impl Named for Axis {
    const KIND: &'static str = "axis";
    const ALL: &'static [Self] = &[Axis::X, Axis::Y, Axis::Z];
    const FALLBACK: Self = Axis::Z;

    fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Which logical axis points up.
///
/// The primitives are always generated Y-up. Under [`AxisConvention::ZUp`]
/// (the convention of Z-up authoring tools such as Blender) the user's Z
/// means the primitive's Y and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisConvention {
    #[default]
    YUp,
    ZUp,
}

macro_rules! display_and_from_str {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = crate::error::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_strict(s)
            }
        }
    )*};
}

display_and_from_str!(Projection, Axis);

// =============================================================================
// PROJECTION CONFIG
// =============================================================================

/// Everything a recomputation depends on.
///
/// A plain value: two configs are interchangeable when their fields are
/// equal. Field names serialize in camelCase to match the control surface
/// state; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{Axis, Projection, ProjectionConfig};
///
/// let config = ProjectionConfig::from_json(r#"{"projection": "spherical", "axis": "y"}"#).unwrap();
/// assert_eq!(config.projection, Projection::Spherical);
/// assert_eq!(config.axis, Axis::Y);
/// assert_eq!(config.tiling, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectionConfig {
    pub shape: Shape,
    pub projection: Projection,
    /// Ignored by box projection.
    pub axis: Axis,
    pub offset_x: f64,
    pub offset_y: f64,
    pub offset_z: f64,
    /// Texture repetitions across the unit square (at least 1).
    pub tiling: u32,
    /// Wrap out-of-range samples instead of flagging them.
    pub repeat_texture: bool,
    /// Interpret axis and offsets in the Z-up convention.
    #[serde(rename = "blenderMode", alias = "alternateConvention")]
    pub alternate_convention: bool,
    /// Consumed by the renderer only.
    pub auto_rotate: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Cube,
            projection: Projection::Planar,
            axis: Axis::Z,
            offset_x: 0.0,
            offset_y: 0.0,
            offset_z: 0.0,
            tiling: MIN_TILING,
            repeat_texture: true,
            alternate_convention: false,
            auto_rotate: true,
        }
    }
}

impl ProjectionConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The user-facing offsets as (x, y, z), before remapping.
    pub fn offsets(&self) -> DVec3 {
        DVec3::new(self.offset_x, self.offset_y, self.offset_z)
    }

    /// The axis convention selected by the alternate-convention flag.
    pub fn convention(&self) -> AxisConvention {
        if self.alternate_convention {
            AxisConvention::ZUp
        } else {
            AxisConvention::YUp
        }
    }

    /// Resolves the computation axis and native offsets for this config.
    pub fn frame(&self) -> ResolvedFrame {
        resolve_frame(self.axis, self.offsets(), self.convention())
    }

    /// The tiling and repeat parameters handed to the renderer.
    pub fn sampling_policy(&self) -> SamplingPolicy {
        SamplingPolicy::new(self.tiling, self.repeat_texture)
    }

    /// Returns a copy with offsets and tiling limited to the control bounds.
    ///
    /// Non-finite offsets become zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uvmap_projection::ProjectionConfig;
    ///
    /// let config = ProjectionConfig { offset_x: 5.0, tiling: 0, ..Default::default() }.clamped();
    /// assert_eq!(config.offset_x, 2.0);
    /// assert_eq!(config.tiling, 1);
    /// ```
    pub fn clamped(self) -> Self {
        let clamp_offset = |value: f64| {
            if value.is_finite() {
                value.clamp(MIN_OFFSET, MAX_OFFSET)
            } else {
                0.0
            }
        };

        Self {
            offset_x: clamp_offset(self.offset_x),
            offset_y: clamp_offset(self.offset_y),
            offset_z: clamp_offset(self.offset_z),
            tiling: self.tiling.clamp(MIN_TILING, MAX_TILING),
            ..self
        }
    }

    /// Restores offsets, tiling and repeat to their defaults, keeping shape,
    /// projection, axis and convention.
    pub fn reset_mapping(&mut self) {
        let defaults = Self::default();
        self.offset_x = defaults.offset_x;
        self.offset_y = defaults.offset_y;
        self.offset_z = defaults.offset_z;
        self.tiling = defaults.tiling;
        self.repeat_texture = defaults.repeat_texture;
    }

    /// Whether switching from `self` to `other` changes the UV buffer.
    ///
    /// Tiling, repeat and auto-rotate only affect sampling or the camera.
    pub fn projection_differs(&self, other: &Self) -> bool {
        self.shape != other.shape
            || self.projection != other.projection
            || self.axis != other.axis
            || self.alternate_convention != other.alternate_convention
            || self.offsets() != other.offsets()
    }

    /// Describes the active mode for a status display.
    pub fn summary(&self) -> ModeSummary {
        let convention = self.convention();
        ModeSummary {
            projection: self.projection,
            shape: self.shape,
            axis: self
                .projection
                .uses_axis()
                .then(|| (self.axis, self.axis.label(convention))),
            convention,
        }
    }
}

// =============================================================================
// MODE SUMMARY
// =============================================================================

/// The current-mode indicator.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{Projection, ProjectionConfig};
///
/// let config = ProjectionConfig { projection: Projection::Box, ..Default::default() };
/// assert_eq!(config.summary().to_string(), "Box | cube");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSummary {
    pub projection: Projection,
    pub shape: Shape,
    /// The selected axis and its role; `None` when the projection ignores it.
    pub axis: Option<(Axis, &'static str)>,
    pub convention: AxisConvention,
}

impl fmt::Display for ModeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.projection.display_name(), self.shape)?;
        if let Some((axis, label)) = self.axis {
            write!(f, " | axis {} ({})", axis.name().to_ascii_uppercase(), label)?;
        }
        if self.convention == AxisConvention::ZUp {
            f.write_str(" | Z-up convention")?;
        }
        Ok(())
    }
}
