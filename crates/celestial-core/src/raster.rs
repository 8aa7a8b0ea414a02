//! Text rasterization collaborator.
//!
//! The generator only needs a set of "ink" pixel coordinates for a block of
//! text. Anything that can paint white glyphs onto a black greyscale surface
//! can act as a [`TextRasterizer`]; [`SystemFontRasterizer`] does it with the
//! fonts installed on the host via `cosmic-text`.

use crate::constants::{
    TEXT_CANVAS_HEIGHT, TEXT_CANVAS_WIDTH, TEXT_INK_THRESHOLD, TEXT_LINE_HEIGHT, TEXT_SAMPLE_STEP,
};
use cosmic_text::{Attrs, Buffer, Color, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use glam::UVec2;
use image::{GrayImage, Luma};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("no non-empty lines to draw")]
    NoLines,
    #[error("no glyphs could be drawn for {0:?}")]
    NoInk(String),
}

pub trait TextRasterizer {
    /// Paint `text` (lines split on `\n`) centred on `surface` at `font_size` pixels.
    fn rasterize(
        &mut self,
        text: &str,
        font_size: f32,
        surface: &mut GrayImage,
    ) -> Result<(), RasterError>;
}

/// A black surface of the fixed text canvas resolution.
pub fn blank_surface() -> GrayImage {
    GrayImage::new(TEXT_CANVAS_WIDTH, TEXT_CANVAS_HEIGHT)
}

/// Vertical centre (in pixels) of each line when `line_count` lines are stacked
/// around the middle of a surface `height` pixels tall.
pub fn line_centers(line_count: usize, font_size: f32, height: u32) -> Vec<f32> {
    let line_height = font_size * TEXT_LINE_HEIGHT;
    let start = height as f32 / 2.0 - (line_count.saturating_sub(1) as f32 * line_height) / 2.0;
    (0..line_count)
        .map(|i| start + i as f32 * line_height)
        .collect()
}

/// Collect every `TEXT_SAMPLE_STEP`-th pixel (in both axes) brighter than the ink threshold.
pub fn ink_anchors(surface: &GrayImage) -> Vec<UVec2> {
    let mut anchors = Vec::new();
    for y in (0..surface.height()).step_by(TEXT_SAMPLE_STEP as usize) {
        for x in (0..surface.width()).step_by(TEXT_SAMPLE_STEP as usize) {
            if surface.get_pixel(x, y)[0] > TEXT_INK_THRESHOLD {
                anchors.push(UVec2::new(x, y));
            }
        }
    }
    anchors
}

/// Draws with a bold serif face, falling back through the system font
/// database for glyphs the serif face lacks (CJK and friends).
pub struct SystemFontRasterizer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl SystemFontRasterizer {
    /// Loads the system font database; this can take a noticeable fraction of a second.
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        log::info!(
            "[raster] font database loaded: {} faces",
            font_system.db().len()
        );
        Self {
            font_system,
            swash_cache: SwashCache::new(),
        }
    }
}

impl Default for SystemFontRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRasterizer for SystemFontRasterizer {
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
        let line_height = font_size * TEXT_LINE_HEIGHT;
        let metrics = Metrics::new(font_size, line_height);
        let attrs = Attrs::new().family(Family::Serif).weight(Weight::BOLD);
        let (width, height) = surface.dimensions();
        let centers = line_centers(lines.len(), font_size, height);
        let mut inked = false;

        for (line, center_y) in lines.iter().zip(centers) {
            if line.trim().is_empty() {
                continue;
            }
            let mut buffer = Buffer::new(&mut self.font_system, metrics);
            buffer.set_size(&mut self.font_system, None, None);
            buffer.set_text(&mut self.font_system, line, attrs, Shaping::Advanced);
            buffer.shape_until_scroll(&mut self.font_system, false);

            let line_w = buffer
                .layout_runs()
                .map(|run| run.line_w)
                .fold(0.0_f32, f32::max);
            let offset_x = ((width as f32 - line_w) / 2.0).round() as i32;
            let offset_y = (center_y - line_height / 2.0).round() as i32;

            buffer.draw(
                &mut self.font_system,
                &mut self.swash_cache,
                Color::rgb(0xff, 0xff, 0xff),
                |x, y, w, h, color| {
                    let coverage = color.a();
                    if coverage == 0 {
                        return;
                    }
                    for dy in 0..h as i32 {
                        for dx in 0..w as i32 {
                            let px = offset_x + x + dx;
                            let py = offset_y + y + dy;
                            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                                continue;
                            }
                            let pixel = surface.get_pixel_mut(px as u32, py as u32);
                            if coverage > pixel[0] {
                                *pixel = Luma([coverage]);
                            }
                            inked = true;
                        }
                    }
                },
            );
        }

        if inked {
            Ok(())
        } else {
            Err(RasterError::NoInk(text.to_owned()))
        }
    }
}
