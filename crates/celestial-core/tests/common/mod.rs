// Deterministic rasterizers for host-side tests; no system fonts involved.

#![allow(dead_code)]
use celestial_core::{line_centers, RasterError, TextRasterizer};
use image::{GrayImage, Luma};

/// Paints every non-space character as a solid block `0.6 * size` wide and
/// `size` tall, lines laid out the same way the font rasterizer lays them out.
pub struct BlockRasterizer;

pub const GLYPH_ASPECT: f32 = 0.6;

impl BlockRasterizer {
    /// Pixel rectangle `(x0, y0, x1, y1)` (exclusive end) covered by a text block.
    pub fn block_bounds(
        text: &str,
        font_size: f32,
        width: u32,
        height: u32,
    ) -> (f32, f32, f32, f32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let centers = line_centers(lines.len(), font_size, height);
        let glyph_w = font_size * GLYPH_ASPECT;
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f32;
        let x0 = (width as f32 - widest * glyph_w) / 2.0;
        let y0 = centers[0] - font_size / 2.0;
        let y1 = centers[centers.len() - 1] + font_size / 2.0;
        (x0, y0, x0 + widest * glyph_w, y1)
    }
}

impl TextRasterizer for BlockRasterizer {
    fn rasterize(
        &mut self,
        text: &str,
        font_size: f32,
        surface: &mut GrayImage,
    ) -> Result<(), RasterError> {
        let lines: Vec<String> = text.split('\n').map(str::to_uppercase).collect();
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(RasterError::NoLines);
        }
        let (width, height) = surface.dimensions();
        let centers = line_centers(lines.len(), font_size, height);
        let glyph_w = font_size * GLYPH_ASPECT;
        let mut inked = false;
        for (line, cy) in lines.iter().zip(centers) {
            let n = line.chars().count() as f32;
            let start_x = (width as f32 - n * glyph_w) / 2.0;
            for (k, ch) in line.chars().enumerate() {
                if ch.is_whitespace() {
                    continue;
                }
                let x0 = (start_x + k as f32 * glyph_w).max(0.0) as u32;
                let x1 = (start_x + (k + 1) as f32 * glyph_w).min(width as f32) as u32;
                let y0 = (cy - font_size / 2.0).max(0.0) as u32;
                let y1 = (cy + font_size / 2.0).min(height as f32) as u32;
                for y in y0..y1 {
                    for x in x0..x1 {
                        surface.put_pixel(x, y, Luma([255]));
                        inked = true;
                    }
                }
            }
        }
        if inked {
            Ok(())
        } else {
            Err(RasterError::NoInk(text.to_owned()))
        }
    }
}

/// Stands in for a platform without any way to draw text.
pub struct UnavailableRasterizer;

impl TextRasterizer for UnavailableRasterizer {
    fn rasterize(&mut self, text: &str, _: f32, _: &mut GrayImage) -> Result<(), RasterError> {
        Err(RasterError::NoInk(text.to_owned()))
    }
}

pub fn distance(a: &[f32], b: &[f32], i: usize) -> f32 {
    let i3 = i * 3;
    let dx = a[i3] - b[i3];
    let dy = a[i3 + 1] - b[i3 + 1];
    let dz = a[i3 + 2] - b[i3 + 2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
