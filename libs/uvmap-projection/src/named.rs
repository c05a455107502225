//! Name-based parsing for the closed configuration enumerations.
//!
//! Typed callers never need this; it serves surfaces that hand over plain
//! strings (command line flags, JavaScript setters).

use crate::error::{ConfigError, ConfigResult};
use uvmap_mesh::Shape;

/// A closed enumeration with stable lowercase names.
pub trait Named: Copy + Sized + 'static {
    /// What the enumeration describes, used in error messages.
    const KIND: &'static str;

    /// Every variant.
    const ALL: &'static [Self];

    /// Variant used when lenient parsing meets an unknown name.
    const FALLBACK: Self;

    /// Lowercase identifier of this variant.
    fn name(self) -> &'static str;
}

impl Named for Shape {
    const KIND: &'static str = "shape";
    const ALL: &'static [Self] = &Shape::ALL;
    const FALLBACK: Self = Shape::Cube;

    fn name(self) -> &'static str {
        Shape::name(self)
    }
}

/// Parses a variant by name, ignoring ASCII case and surrounding whitespace.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{parse_strict, Axis};
///
/// assert_eq!(parse_strict::<Axis>(" Y ").unwrap(), Axis::Y);
/// assert!(parse_strict::<Axis>("w").is_err());
/// ```
pub fn parse_strict<T: Named>(input: &str) -> ConfigResult<T> {
    let trimmed = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|variant| variant.name().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ConfigError::UnknownName {
            kind: T::KIND,
            name: trimmed.to_string(),
            expected: T::ALL
                .iter()
                .map(|variant| variant.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Parses a variant by name, falling back to [`Named::FALLBACK`] on unknown
/// input.
///
/// An unknown name only produces a visually wrong mapping, so untyped
/// surfaces prefer this over surfacing an error.
///
/// # Example
///
/// ```rust
/// use uvmap_projection::{parse_lenient, Axis, Projection};
///
/// assert_eq!(parse_lenient::<Projection>("conical"), Projection::Planar);
/// assert_eq!(parse_lenient::<Axis>("w"), Axis::Z);
/// ```
pub fn parse_lenient<T: Named>(input: &str) -> T {
    parse_strict(input).unwrap_or_else(|err| {
        log::warn!("{}; falling back to '{}'", err, T::FALLBACK.name());
        T::FALLBACK
    })
}
