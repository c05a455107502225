//! # Boundary and Tiling Policy
//!
//! Turns raw projected coordinates into sampling coordinates and decides,
//! per sample, whether a coordinate reads a texel or the diagnostic color.
//!
//! The renderer evaluates [`SamplingPolicy::resolve`] per pixel on
//! interpolated coordinates; the per-vertex helpers here exist for
//! inspection and tests.

use config::constants::{DIAGNOSTIC_COLOR, MIN_TILING};
use glam::DVec2;

/// Outcome of sampling one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Read the texture at this coordinate, already inside [0, 1).
    Texel(DVec2),
    /// No valid texel; draw the diagnostic color.
    Diagnostic,
}

/// Tiling factor and repeat flag handed to the renderer.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{Sample, SamplingPolicy};
/// use glam::DVec2;
///
/// let clamp = SamplingPolicy::new(2, false);
/// assert_eq!(clamp.resolve_uv(DVec2::new(0.75, 0.25)), Sample::Diagnostic);
///
/// let repeat = SamplingPolicy::new(2, true);
/// assert_eq!(repeat.resolve_uv(DVec2::new(0.75, 0.25)), Sample::Texel(DVec2::new(0.5, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingPolicy {
    tiling: u32,
    repeat: bool,
}

impl Default for SamplingPolicy {
    fn default() -> Self {
        Self::new(MIN_TILING, true)
    }
}

impl SamplingPolicy {
    /// Creates a policy; a tiling below 1 is raised to 1.
    pub fn new(tiling: u32, repeat: bool) -> Self {
        Self {
            tiling: tiling.max(MIN_TILING),
            repeat,
        }
    }

    pub fn tiling(&self) -> u32 {
        self.tiling
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    /// Scales a raw coordinate by the tiling factor.
    pub fn sample_coord(&self, raw: DVec2) -> DVec2 {
        raw * self.tiling as f64
    }

    /// Scales every raw coordinate by the tiling factor.
    pub fn sample_coords(&self, raw: &[DVec2]) -> Vec<DVec2> {
        raw.iter().map(|&uv| self.sample_coord(uv)).collect()
    }

    /// Whether a sampling coordinate falls outside the unit square.
    ///
    /// The boundary itself is inside.
    pub fn is_out_of_range(sample: DVec2) -> bool {
        sample.x < 0.0 || sample.x > 1.0 || sample.y < 0.0 || sample.y > 1.0
    }

    /// Decides what a sampling coordinate shows.
    ///
    /// With repeat on every coordinate wraps into [0, 1). With repeat off
    /// coordinates inside the unit square pass through unchanged and the
    /// rest become [`Sample::Diagnostic`].
    pub fn resolve(&self, sample: DVec2) -> Sample {
        if self.repeat {
            Sample::Texel(DVec2::new(wrap(sample.x), wrap(sample.y)))
        } else if Self::is_out_of_range(sample) {
            Sample::Diagnostic
        } else {
            Sample::Texel(sample)
        }
    }

    /// [`resolve`](Self::resolve) applied to a raw, unscaled coordinate.
    pub fn resolve_uv(&self, raw: DVec2) -> Sample {
        self.resolve(self.sample_coord(raw))
    }

    /// Per-vertex diagnostic flags for a raw UV buffer.
    ///
    /// Always all `false` when repeat is on.
    pub fn out_of_range_flags(&self, raw: &[DVec2]) -> Vec<bool> {
        raw.iter()
            .map(|&uv| !self.repeat && Self::is_out_of_range(self.sample_coord(uv)))
            .collect()
    }

    /// Number of flagged vertices in a raw UV buffer.
    pub fn out_of_range_count(&self, raw: &[DVec2]) -> usize {
        self.out_of_range_flags(raw)
            .into_iter()
            .filter(|&flagged| flagged)
            .count()
    }

    /// Final RGBA for a raw coordinate, reading texels through `texel`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uvmap_projection::SamplingPolicy;
    /// use glam::DVec2;
    ///
    /// let policy = SamplingPolicy::new(1, false);
    /// let white = |_: DVec2| [255, 255, 255, 255];
    /// assert_eq!(policy.shade(DVec2::new(0.5, 0.5), white), [255, 255, 255, 255]);
    /// assert_eq!(policy.shade(DVec2::new(1.5, 0.5), white), [0, 255, 0, 255]);
    /// ```
    pub fn shade<F>(&self, raw: DVec2, texel: F) -> [u8; 4]
    where
        F: FnOnce(DVec2) -> [u8; 4],
    {
        match self.resolve_uv(raw) {
            Sample::Texel(uv) => texel(uv),
            Sample::Diagnostic => DIAGNOSTIC_COLOR,
        }
    }
}

fn wrap(x: f64) -> f64 {
    let wrapped = x - x.floor();
    // -tiny - floor(-tiny) rounds to 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
