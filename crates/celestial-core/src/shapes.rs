//! Target shape generation.
//!
//! A [`ParticleSet`] holds one target position per particle for each visual
//! mode plus a base colour. It is built once per (text, font size) pair and
//! never mutated afterwards; the animator only reads from it.

use crate::color::{offset_lightness, srgb_to_linear_vec, PaletteColor};
use crate::constants::*;
use crate::raster::{blank_surface, ink_anchors, TextRasterizer};
use glam::{UVec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Tree,
    Galaxy,
    Text,
}

impl Mode {
    /// Click-to-cycle order: tree, galaxy, text, back to tree.
    pub fn next(self) -> Self {
        match self {
            Mode::Tree => Mode::Galaxy,
            Mode::Galaxy => Mode::Text,
            Mode::Text => Mode::Tree,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Tree => "TREE",
            Mode::Galaxy => "GALAXY",
            Mode::Text => "TEXT",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratorParams {
    pub count: usize,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
        }
    }
}

/// Flat `x, y, z` arrays, one triple per particle, identical length across all four.
#[derive(Clone, Debug)]
pub struct ParticleSet {
    pub tree: Vec<f32>,
    pub galaxy: Vec<f32>,
    pub text: Vec<f32>,
    pub colors: Vec<f32>,
}

impl ParticleSet {
    pub fn len(&self) -> usize {
        self.tree.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn target(&self, mode: Mode) -> &[f32] {
        match mode {
            Mode::Tree => &self.tree,
            Mode::Galaxy => &self.galaxy,
            Mode::Text => &self.text,
        }
    }
}

/// Build every target shape and the base colours for `params.count` particles.
///
/// A rasterizer failure or a text with no ink is not an error: every text
/// target collapses to the origin instead.
pub fn generate<R: Rng + ?Sized>(
    text: &str,
    font_size: f32,
    params: &GeneratorParams,
    rasterizer: &mut dyn TextRasterizer,
    rng: &mut R,
) -> ParticleSet {
    let started = Instant::now();
    let count = params.count;
    let anchors = text_anchors(text, font_size, rasterizer);

    let mut set = ParticleSet {
        tree: Vec::with_capacity(count * 3),
        galaxy: Vec::with_capacity(count * 3),
        text: Vec::with_capacity(count * 3),
        colors: Vec::with_capacity(count * 3),
    };
    for i in 0..count {
        set.tree.extend_from_slice(&tree_point(rng).to_array());
        set.galaxy.extend_from_slice(&galaxy_point(i, rng).to_array());
        set.text.extend_from_slice(&text_point(&anchors, rng).to_array());
        set.colors.extend_from_slice(&particle_color(rng).to_array());
    }

    log::debug!(
        "[shapes] generated {} particles ({} text anchors) in {:.1} ms",
        count,
        anchors.len(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    set
}

fn text_anchors(text: &str, font_size: f32, rasterizer: &mut dyn TextRasterizer) -> Vec<UVec2> {
    let mut surface = blank_surface();
    if let Err(e) = rasterizer.rasterize(text, font_size, &mut surface) {
        log::warn!("[shapes] text rasterization failed, text targets fall back to origin: {e}");
        return Vec::new();
    }
    let anchors = ink_anchors(&surface);
    if anchors.is_empty() {
        log::warn!("[shapes] no ink pixels for {text:?}, text targets fall back to origin");
    }
    anchors
}

/// A point in the twisted cone: wide at the base, narrowing to the tip.
pub fn tree_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let y = rng.gen::<f32>() * TREE_HALF_HEIGHT * 2.0 - TREE_HALF_HEIGHT;
    let radius = ((TREE_HALF_HEIGHT - y) * TREE_RADIUS_SLOPE).max(0.0);
    let angle = y * TREE_TWIST + rng.gen::<f32>() * TAU;
    let scatter = rng.gen::<f32>() * TREE_SCATTER;
    Vec3::new(angle.cos() * (radius + scatter), y, angle.sin() * (radius + scatter))
}

/// A point on one of the spiral arms, in the tilted disc frame.
pub fn galaxy_point<R: Rng + ?Sized>(index: usize, rng: &mut R) -> Vec3 {
    let r = rng.gen::<f32>().powf(GALAXY_RADIAL_EXPONENT) * GALAXY_RADIUS;
    let branch = index % GALAXY_BRANCHES;
    let branch_angle = branch as f32 / GALAXY_BRANCHES as f32 * TAU;
    let spiral_angle = r * GALAXY_SPIRAL;

    // Arms swell and pinch along their length.
    let pulse = (r * GALAXY_CURVE_FREQ + branch as f32 * GALAXY_CURVE_PHASE).sin();
    let density = 0.8 + pulse * 0.4;
    let spread = 0.4 + r * 0.12;
    let bell = (rng.gen::<f32>() + rng.gen::<f32>() + rng.gen::<f32>()) / 3.0 - 0.5;
    let theta = branch_angle + spiral_angle + bell * spread * density * 2.8;

    let gx = theta.cos() * r;
    let gz = theta.sin() * r;
    let nx = (rng.gen::<f32>() - 0.5) * GALAXY_NOISE;
    let nz = (rng.gen::<f32>() - 0.5) * GALAXY_NOISE;
    let thickness = GALAXY_THICKNESS * (-r * GALAXY_THICKNESS_FALLOFF).exp() * density;
    let gy = (rng.gen::<f32>() - 0.5) * thickness;

    let (sin_t, cos_t) = GALAXY_TILT.sin_cos();
    let z = gz + nz;
    Vec3::new(gx + nx, gy * cos_t - z * sin_t, gy * sin_t + z * cos_t)
}

/// Undo the disc tilt, returning the point in the flat galaxy frame.
pub fn untilt_galaxy_point(p: Vec3) -> Vec3 {
    let (sin_t, cos_t) = GALAXY_TILT.sin_cos();
    Vec3::new(p.x, p.y * cos_t + p.z * sin_t, -p.y * sin_t + p.z * cos_t)
}

/// A fuzzy point around a random ink anchor, or the origin when there is no ink.
pub fn text_point<R: Rng + ?Sized>(anchors: &[UVec2], rng: &mut R) -> Vec3 {
    if anchors.is_empty() {
        return Vec3::ZERO;
    }
    let anchor = anchors[rng.gen_range(0..anchors.len())];
    let fuzz = Vec3::new(
        (rng.gen::<f32>() - 0.5) * TEXT_FUZZ,
        (rng.gen::<f32>() - 0.5) * TEXT_FUZZ,
        (rng.gen::<f32>() - 0.5) * TEXT_FUZZ_Z,
    );
    pixel_to_world(anchor) + fuzz
}

/// World-space position of a pixel on the text surface, without fuzz.
pub fn pixel_to_world(pixel: UVec2) -> Vec3 {
    Vec3::new(
        (pixel.x as f32 - TEXT_CANVAS_WIDTH as f32 / 2.0) * TEXT_WORLD_SCALE,
        -(pixel.y as f32 - TEXT_CANVAS_HEIGHT as f32 / 2.0) * TEXT_WORLD_SCALE,
        0.0,
    )
}

/// Linear RGB base colour: a palette pick with a small lightness variation.
pub fn particle_color<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let base = PaletteColor::pick(rng.gen::<f32>()).srgb();
    let varied = offset_lightness(base, (rng.gen::<f32>() - 0.5) * LIGHTNESS_JITTER);
    srgb_to_linear_vec(varied.clamp(Vec3::ZERO, Vec3::ONE))
}
