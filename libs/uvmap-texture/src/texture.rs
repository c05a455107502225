//! # Diagnostic Texture
//!
//! The labeled grid image sampled by every projection.

use crate::error::TextureResult;
use crate::font::{glyph, is_lit, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::grid::{cell_color, cell_label, cell_size};
use config::constants::{
    GRID_CELLS, LABEL_BOLD_PX, LABEL_COLOR, LABEL_GLYPH_SCALE, LABEL_GLYPH_SPACING, TEXTURE_SIZE,
};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::sync::OnceLock;

static SHARED: OnceLock<DiagnosticTexture> = OnceLock::new();

/// A square RGBA image divided into an 8x8 grid of colored, labeled cells.
///
/// Pixel row 0 is the top of the image and holds row `A`. Texture space has
/// `v = 1` at the top, matching how the renderer uploads images.
///
/// # Example
///
/// ```rust
/// use uvmap_texture::DiagnosticTexture;
///
/// let texture = DiagnosticTexture::shared();
/// assert_eq!(texture.size(), 1024);
/// assert_eq!(texture.rgba_bytes().len(), 1024 * 1024 * 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticTexture {
    image: RgbaImage,
}

impl DiagnosticTexture {
    /// Renders the texture from scratch.
    ///
    /// Prefer [`DiagnosticTexture::shared`]; the result never changes.
    pub fn generate() -> Self {
        let cell = cell_size();
        let mut image = RgbaImage::new(TEXTURE_SIZE, TEXTURE_SIZE);

        for row in 0..GRID_CELLS {
            for col in 0..GRID_CELLS {
                let x0 = col * cell;
                let y0 = row * cell;
                let fill = Rgba(cell_color(col, row));
                for y in y0..y0 + cell {
                    for x in x0..x0 + cell {
                        image.put_pixel(x, y, fill);
                    }
                }
                draw_label(&mut image, x0, y0, &cell_label(row, col));
            }
        }

        log::info!(
            "Generated diagnostic texture: {}x{}, {}x{} cells",
            TEXTURE_SIZE,
            TEXTURE_SIZE,
            GRID_CELLS,
            GRID_CELLS
        );
        Self { image }
    }

    /// The process-wide instance, generated on first use.
    pub fn shared() -> &'static DiagnosticTexture {
        SHARED.get_or_init(Self::generate)
    }

    /// Width and height in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Row-major RGBA8 pixels, top row first.
    pub fn rgba_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Pixel at (`x`, `y`), `y` counted from the top.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Nearest texel for a texture coordinate.
    ///
    /// Coordinates in [0, 1] clamp to the edge texels, so `v = 1` reads the
    /// top row. Coordinates outside that range wrap modulo 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uvmap_texture::{cell_color, DiagnosticTexture};
    ///
    /// let texture = DiagnosticTexture::shared();
    /// // bottom-left corner is the first column of row H
    /// assert_eq!(texture.sample_nearest(0.001, 0.001), cell_color(0, 7));
    /// // top-left corner is cell A1
    /// assert_eq!(texture.sample_nearest(0.001, 0.999), cell_color(0, 0));
    /// ```
    pub fn sample_nearest(&self, u: f64, v: f64) -> [u8; 4] {
        let size = self.size();
        let x = texel_index(u, size);
        let y = size - 1 - texel_index(v, size);
        self.pixel(x, y)
    }

    /// Encodes the texture as PNG.
    pub fn to_png(&self) -> TextureResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

fn texel_index(t: f64, size: u32) -> u32 {
    let t = if (0.0..=1.0).contains(&t) {
        t
    } else {
        t - t.floor()
    };
    ((t * size as f64) as u32).min(size - 1)
}

/// Draws `label` centered in the cell whose top-left pixel is (`x0`, `y0`).
fn draw_label(image: &mut RgbaImage, x0: u32, y0: u32, label: &str) {
    let scale = LABEL_GLYPH_SCALE;
    let glyphs: Vec<_> = label.chars().filter_map(glyph).collect();
    if glyphs.is_empty() {
        return;
    }

    let count = glyphs.len() as u32;
    let text_w = (count * GLYPH_WIDTH + (count - 1) * LABEL_GLYPH_SPACING) * scale + LABEL_BOLD_PX;
    let text_h = GLYPH_HEIGHT * scale + LABEL_BOLD_PX;
    let cell = cell_size();
    let left = x0 + cell.saturating_sub(text_w) / 2;
    let top = y0 + cell.saturating_sub(text_h) / 2;
    let color = Rgba(LABEL_COLOR);

    for (i, g) in glyphs.iter().enumerate() {
        let gx = left + i as u32 * (GLYPH_WIDTH + LABEL_GLYPH_SPACING) * scale;
        for py in 0..GLYPH_HEIGHT {
            for px in 0..GLYPH_WIDTH {
                if !is_lit(g, px, py) {
                    continue;
                }
                // each lit glyph pixel widens by the bold stroke
                let bx = gx + px * scale;
                let by = top + py * scale;
                for y in by..by + scale + LABEL_BOLD_PX {
                    for x in bx..bx + scale + LABEL_BOLD_PX {
                        image.put_pixel(x, y, color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::GRID_PALETTE;

    #[test]
    fn test_generation_is_deterministic() {
        let a = DiagnosticTexture::generate();
        let b = DiagnosticTexture::generate();
        assert_eq!(a.rgba_bytes(), b.rgba_bytes());
    }

    #[test]
    fn test_shared_matches_generated() {
        assert_eq!(DiagnosticTexture::shared(), &DiagnosticTexture::generate());
        assert!(std::ptr::eq(
            DiagnosticTexture::shared(),
            DiagnosticTexture::shared()
        ));
    }

    #[test]
    fn test_cell_corners_carry_fill_color() {
        let texture = DiagnosticTexture::shared();
        let cell = cell_size();
        for row in 0..GRID_CELLS {
            for col in 0..GRID_CELLS {
                let expected = cell_color(col, row);
                let (x0, y0) = (col * cell, row * cell);
                assert_eq!(texture.pixel(x0 + 2, y0 + 2), expected);
                assert_eq!(texture.pixel(x0 + cell - 3, y0 + cell - 3), expected);
            }
        }
    }

    #[test]
    fn test_first_cell_is_teal() {
        assert_eq!(DiagnosticTexture::shared().pixel(0, 0), GRID_PALETTE[0]);
    }

    #[test]
    fn test_labels_are_drawn() {
        let texture = DiagnosticTexture::shared();
        let cell = cell_size();
        for row in 0..GRID_CELLS {
            for col in 0..GRID_CELLS {
                let (x0, y0) = (col * cell, row * cell);
                let mut label_pixels = 0;
                for y in y0..y0 + cell {
                    for x in x0..x0 + cell {
                        if texture.pixel(x, y) == LABEL_COLOR {
                            label_pixels += 1;
                        }
                    }
                }
                assert!(label_pixels > 500, "cell {} has no label", cell_label(row, col));
            }
        }
    }

    #[test]
    fn test_label_stays_inside_cell() {
        let texture = DiagnosticTexture::shared();
        let cell = cell_size();
        // cell borders are never label colored
        for i in 0..TEXTURE_SIZE {
            for edge in (0..TEXTURE_SIZE).step_by(cell as usize) {
                assert_ne!(texture.pixel(edge, i), LABEL_COLOR);
                assert_ne!(texture.pixel(i, edge), LABEL_COLOR);
            }
        }
    }

    #[test]
    fn test_sample_nearest_wraps() {
        let texture = DiagnosticTexture::shared();
        assert_eq!(texture.sample_nearest(1.001, 1.999), texture.sample_nearest(0.001, 0.999));
        assert_eq!(texture.sample_nearest(-0.999, -0.999), texture.sample_nearest(0.001, 0.001));
    }

    #[test]
    fn test_sample_nearest_orientation() {
        let texture = DiagnosticTexture::shared();
        // v = 1 edge reads row A, u = 1 edge reads column 8
        assert_eq!(texture.sample_nearest(0.9999, 0.9999), cell_color(7, 0));
        assert_eq!(texture.sample_nearest(0.9999, 0.0), cell_color(7, 7));
    }

    #[test]
    fn test_sample_nearest_unit_edges_clamp() {
        let texture = DiagnosticTexture::shared();
        // v = 1 is the top row, u = 1 the last column
        assert_eq!(texture.sample_nearest(0.0, 1.0), texture.pixel(0, 0));
        assert_eq!(texture.sample_nearest(1.0, 1.0), texture.pixel(1023, 0));
        assert_eq!(texture.sample_nearest(1.0, 0.0), texture.pixel(1023, 1023));
        assert_eq!(texture.sample_nearest(0.0, 1.0), cell_color(0, 0));
    }

    #[test]
    fn test_labels_are_centered() {
        let texture = DiagnosticTexture::shared();
        let cell = cell_size();
        for row in 0..GRID_CELLS {
            for col in 0..GRID_CELLS {
                let (x0, y0) = (col * cell, row * cell);
                let (mut min_x, mut min_y, mut max_x, mut max_y) = (cell, cell, 0, 0);
                for y in 0..cell {
                    for x in 0..cell {
                        if texture.pixel(x0 + x, y0 + y) == LABEL_COLOR {
                            min_x = min_x.min(x);
                            min_y = min_y.min(y);
                            max_x = max_x.max(x);
                            max_y = max_y.max(y);
                        }
                    }
                }

                let label = cell_label(row, col);
                let (left, right) = (min_x, cell - 1 - max_x);
                let (top, bottom) = (min_y, cell - 1 - max_y);
                assert_eq!(top, bottom, "{} is not vertically centered", label);
                if col == 0 {
                    // the '1' glyph leaves its rightmost glyph column blank
                    assert_eq!(right - left, LABEL_GLYPH_SCALE, "{}", label);
                } else {
                    assert_eq!(left, right, "{} is not horizontally centered", label);
                }
            }
        }
    }

    #[test]
    fn test_png_round_trip_dimensions() {
        let png = DiagnosticTexture::shared().to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (1024, 1024));
        assert_eq!(decoded.as_raw(), DiagnosticTexture::shared().rgba_bytes());
    }
}
