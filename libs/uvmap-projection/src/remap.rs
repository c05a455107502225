//! # Axis Remapping
//!
//! Translates the user-facing axis and offsets into the primitive's native
//! Y-up frame.

use crate::settings::{Axis, AxisConvention};
use glam::DVec3;

/// Computation axis and native-frame offsets for one recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedFrame {
    /// Axis the projection formulas operate on.
    pub axis: Axis,
    /// Offset added to every raw position.
    pub offset: DVec3,
}

/// Resolves the computation axis and offsets.
///
/// Under [`AxisConvention::YUp`] both pass through unchanged. Under
/// [`AxisConvention::ZUp`] the Y and Z roles swap: axis Z computes on the
/// native Y axis, axis Y on the native Z axis, and the y and z offsets trade
/// places. X is never affected.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{resolve_frame, Axis, AxisConvention};
/// use glam::DVec3;
///
/// let frame = resolve_frame(Axis::Z, DVec3::new(0.1, 0.2, 0.3), AxisConvention::ZUp);
/// assert_eq!(frame.axis, Axis::Y);
/// assert_eq!(frame.offset, DVec3::new(0.1, 0.3, 0.2));
/// ```
pub fn resolve_frame(axis: Axis, offsets: DVec3, convention: AxisConvention) -> ResolvedFrame {
    match convention {
        AxisConvention::YUp => ResolvedFrame {
            axis,
            offset: offsets,
        },
        AxisConvention::ZUp => ResolvedFrame {
            axis: swap_up_depth(axis),
            offset: DVec3::new(offsets.x, offsets.z, offsets.y),
        },
    }
}

fn swap_up_depth(axis: Axis) -> Axis {
    match axis {
        Axis::X => Axis::X,
        Axis::Y => Axis::Z,
        Axis::Z => Axis::Y,
    }
}
