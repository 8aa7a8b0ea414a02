use crate::animator::{advance, default_layers, FrameInput, LayerConfig, ParticleLayer};
use crate::constants::{DEFAULT_FONT_SIZE, DEFAULT_TEXT, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::raster::TextRasterizer;
use crate::shapes::{generate, GeneratorParams, Mode, ParticleSet};
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct EngineParams {
    pub generator: GeneratorParams,
    pub layers: Vec<LayerConfig>,
    pub text: String,
    pub font_size: f32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            generator: GeneratorParams::default(),
            layers: default_layers(),
            text: DEFAULT_TEXT.to_owned(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

pub fn clamp_font_size(size: f32) -> f32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Owns the current particle set, its layers and the active mode.
pub struct ParticleEngine {
    params: EngineParams,
    rasterizer: Box<dyn TextRasterizer>,
    rng: StdRng,
    particles: ParticleSet,
    layers: Vec<ParticleLayer>,
    mode: Mode,
    rotation_input: f32,
    elapsed: f64,
}

impl ParticleEngine {
    pub fn new(
        mut params: EngineParams,
        mut rasterizer: Box<dyn TextRasterizer>,
        seed: u64,
    ) -> Self {
        params.font_size = clamp_font_size(params.font_size);
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = generate(
            &params.text,
            params.font_size,
            &params.generator,
            rasterizer.as_mut(),
            &mut rng,
        );
        let layers = params
            .layers
            .iter()
            .map(|c| ParticleLayer::new(c.clone(), &particles))
            .collect();
        log::info!(
            "[engine] particles={} layers={} text={:?} size={}",
            particles.len(),
            params.layers.len(),
            params.text,
            params.font_size
        );
        Self {
            params,
            rasterizer,
            rng,
            particles,
            layers,
            mode: Mode::default(),
            rotation_input: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn layers(&self) -> &[ParticleLayer] {
        &self.layers
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.params.text
    }

    pub fn font_size(&self) -> f32 {
        self.params.font_size
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::info!("[engine] mode {} -> {}", self.mode.label(), mode.label());
            self.mode = mode;
        }
    }

    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    pub fn set_rotation_input(&mut self, rotation: f32) {
        self.rotation_input = rotation.clamp(-1.0, 1.0);
    }

    /// Returns true when the particle set was regenerated.
    pub fn set_text(&mut self, text: &str) -> bool {
        let size = self.params.font_size;
        self.set_content(text, size)
    }

    /// Returns true when the particle set was regenerated.
    pub fn set_font_size(&mut self, font_size: f32) -> bool {
        let text = self.params.text.clone();
        self.set_content(&text, font_size)
    }

    /// Regenerate targets and rebuild every layer when text or size changed.
    pub fn set_content(&mut self, text: &str, font_size: f32) -> bool {
        let font_size = clamp_font_size(font_size);
        if text == self.params.text && font_size == self.params.font_size {
            return false;
        }
        self.params.text = text.to_owned();
        self.params.font_size = font_size;
        self.regenerate();
        true
    }

    fn regenerate(&mut self) {
        self.particles = generate(
            &self.params.text,
            self.params.font_size,
            &self.params.generator,
            self.rasterizer.as_mut(),
            &mut self.rng,
        );
        for layer in &mut self.layers {
            layer.reset(&self.particles);
        }
        log::info!(
            "[engine] regenerated text={:?} size={}",
            self.params.text,
            self.params.font_size
        );
    }

    /// Advance every layer by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed += dt.as_secs_f64();
        let frame = FrameInput {
            rotation_input: self.rotation_input,
            elapsed: self.elapsed as f32,
            delta: dt.as_secs_f32(),
        };
        for layer in &mut self.layers {
            advance(layer, &self.particles, self.mode, frame, &mut self.rng);
        }
    }
}
