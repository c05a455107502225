//! # Grid Layout
//!
//! Cell colors and labels of the diagnostic grid. Rows run top to bottom
//! and are lettered; columns run left to right and are numbered from 1.

use config::constants::{GRID_CELLS, GRID_PALETTE, ROW_LABELS, TEXTURE_SIZE};

/// Palette index for the cell at (`col`, `row`).
///
/// `(col % 2) + (row % 2) * 2 + col / 2 + row / 2`, taken mod 4. Unlike a
/// checkerboard this shifts every 2x2 block, so no two cells of a block
/// share a color and neighboring blocks differ.
///
/// # Example
///
/// ```rust
/// use uvmap_texture::cell_pattern;
///
/// assert_eq!(cell_pattern(0, 0), 0);
/// assert_eq!(cell_pattern(1, 0), 1);
/// assert_eq!(cell_pattern(0, 1), 2);
/// assert_eq!(cell_pattern(2, 0), 1);
/// ```
pub fn cell_pattern(col: u32, row: u32) -> usize {
    ((col % 2 + (row % 2) * 2 + col / 2 + row / 2) % 4) as usize
}

/// RGBA fill of the cell at (`col`, `row`).
pub fn cell_color(col: u32, row: u32) -> [u8; 4] {
    GRID_PALETTE[cell_pattern(col, row)]
}

/// Label of the cell at (`row`, `col`): row letter then 1-based column.
///
/// # Example
///
/// ```rust
/// use uvmap_texture::cell_label;
///
/// assert_eq!(cell_label(0, 0), "A1");
/// assert_eq!(cell_label(7, 7), "H8");
/// assert_eq!(cell_label(2, 4), "C5");
/// ```
pub fn cell_label(row: u32, col: u32) -> String {
    let letter = ROW_LABELS[(row % GRID_CELLS) as usize];
    format!("{}{}", letter, col % GRID_CELLS + 1)
}

/// Side length of one cell in pixels.
#[inline]
pub fn cell_size() -> u32 {
    TEXTURE_SIZE / GRID_CELLS
}
