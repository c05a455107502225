//! Projection flags shared by the `project` and `summary` commands.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use uvmap_projection::{parse_strict, Axis, Projection, ProjectionConfig, Shape};

/// Flags describing a [`ProjectionConfig`]
///
/// Flags override values loaded from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON control state to start from (camelCase fields)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Primitive: cube or sphere
    #[arg(long, value_parser = parse_strict::<Shape>)]
    pub shape: Option<Shape>,

    /// Projection: planar, box, cylindrical or spherical
    #[arg(short, long, value_parser = parse_strict::<Projection>)]
    pub projection: Option<Projection>,

    /// Axis: x, y or z (ignored by box)
    #[arg(short, long, value_parser = parse_strict::<Axis>)]
    pub axis: Option<Axis>,

    /// Offset added along X (-2 to 2)
    #[arg(long, allow_negative_numbers = true)]
    pub offset_x: Option<f64>,

    /// Offset added along Y (-2 to 2)
    #[arg(long, allow_negative_numbers = true)]
    pub offset_y: Option<f64>,

    /// Offset added along Z (-2 to 2)
    #[arg(long, allow_negative_numbers = true)]
    pub offset_z: Option<f64>,

    /// Texture repetitions (1-10)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=10))]
    pub tiling: Option<u32>,

    /// Flag out-of-range samples instead of wrapping
    #[arg(long)]
    pub no_repeat: bool,

    /// Interpret axis and offsets Z-up
    #[arg(long)]
    pub blender: bool,
}

impl ConfigArgs {
    /// Builds the configuration, clamped to the control bounds.
    pub fn resolve(&self) -> Result<ProjectionConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                ProjectionConfig::from_json(&json)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            None => ProjectionConfig::default(),
        };

        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        if let Some(projection) = self.projection {
            config.projection = projection;
        }
        if let Some(axis) = self.axis {
            config.axis = axis;
        }
        if let Some(x) = self.offset_x {
            config.offset_x = x;
        }
        if let Some(y) = self.offset_y {
            config.offset_y = y;
        }
        if let Some(z) = self.offset_z {
            config.offset_z = z;
        }
        if let Some(tiling) = self.tiling {
            config.tiling = tiling;
        }
        if self.no_repeat {
            config.repeat_texture = false;
        }
        if self.blender {
            config.alternate_convention = true;
        }

        let clamped = config.clamped();
        if clamped != config {
            log::warn!("Offsets or tiling outside the control bounds were clamped");
        }
        Ok(clamped)
    }
}
