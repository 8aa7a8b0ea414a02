//! Per-frame particle animation.
//!
//! Each [`ParticleLayer`] owns a [`LiveBuffer`] and is the only writer to it.
//! Renderers borrow the buffer slices read-only after [`advance`] returns.

use crate::constants::*;
use crate::shapes::{Mode, ParticleSet};
use rand::Rng;

/// How one rendered copy of the particle set moves and looks.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    pub speed_multiplier: f32,
    pub opacity: f32,
    pub base_size: f32,
    pub sparkle: bool,
}

impl LayerConfig {
    /// Crisp layer with twinkle and position jitter.
    pub fn foreground() -> Self {
        Self {
            speed_multiplier: 1.0,
            opacity: 0.6,
            base_size: 0.15,
            sparkle: true,
        }
    }

    /// Dimmer, slower layer that lags behind the foreground.
    pub fn trail(speed_multiplier: f32, opacity: f32, base_size: f32) -> Self {
        Self {
            speed_multiplier,
            opacity,
            base_size,
            sparkle: false,
        }
    }
}

pub fn default_layers() -> Vec<LayerConfig> {
    vec![
        LayerConfig::foreground(),
        LayerConfig::trail(0.6, 0.15, 0.12),
        LayerConfig::trail(0.3, 0.05, 0.1),
    ]
}

/// Live positions and colours read by the renderer every frame.
#[derive(Clone, Debug)]
pub struct LiveBuffer {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl LiveBuffer {
    /// Start at the tree shape with unmodulated base colours.
    pub fn new(set: &ParticleSet) -> Self {
        Self {
            positions: set.tree.clone(),
            colors: set.colors.clone(),
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Per-frame inputs shared by all layers.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Roughly [-1, 1], usually derived from the pointer's horizontal position.
    pub rotation_input: f32,
    /// Seconds since the engine started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleLayer {
    pub config: LayerConfig,
    pub live: LiveBuffer,
    /// Smoothed rotation about the vertical axis, in radians.
    pub rotation_y: f32,
    pub point_size: f32,
}

impl ParticleLayer {
    pub fn new(config: LayerConfig, set: &ParticleSet) -> Self {
        let point_size = config.base_size;
        Self {
            config,
            live: LiveBuffer::new(set),
            rotation_y: 0.0,
            point_size,
        }
    }

    /// Replace the live buffer after the particle set was regenerated.
    pub fn reset(&mut self, set: &ParticleSet) {
        self.live = LiveBuffer::new(set);
    }
}

pub fn blend_speed(mode: Mode) -> f32 {
    match mode {
        Mode::Tree => TREE_BLEND_SPEED,
        Mode::Galaxy => GALAXY_BLEND_SPEED,
        Mode::Text => TEXT_BLEND_SPEED,
    }
}

pub fn jitter_amount(mode: Mode) -> f32 {
    match mode {
        Mode::Tree => TREE_JITTER,
        Mode::Galaxy => GALAXY_JITTER,
        Mode::Text => TEXT_JITTER,
    }
}

/// Brightness multiplier for particle `index` at time `t` seconds.
///
/// Sparkle layers get a sharp periodic spike; trail layers a soft pulse.
#[inline]
pub fn brightness(index: usize, t: f32, sparkle: bool) -> f32 {
    let phase = index as f32 * PHASE_PER_PARTICLE;
    if sparkle {
        let norm = ((t * SPARKLE_FREQ + phase).sin() + 1.0) / 2.0;
        SPARKLE_BASE + norm.powi(SPARKLE_SHARPNESS) * SPARKLE_GAIN
    } else {
        TRAIL_BASE + TRAIL_GAIN * (t * TRAIL_FREQ + phase).sin()
    }
}

#[inline]
pub fn pulsed_size(base_size: f32, t: f32) -> f32 {
    base_size * (1.0 - SIZE_PULSE_AMOUNT)
        + (t * SIZE_PULSE_FREQ).sin() * base_size * SIZE_PULSE_AMOUNT
}

/// Advance one layer by one frame toward the target shape for `mode`.
pub fn advance<R: Rng + ?Sized>(
    layer: &mut ParticleLayer,
    set: &ParticleSet,
    mode: Mode,
    frame: FrameInput,
    rng: &mut R,
) {
    let speed_mul = layer.config.speed_multiplier;
    let t = frame.elapsed;

    let target_rotation = frame.rotation_input * ROTATION_INPUT_GAIN + t * ROTATION_IDLE_SPEED;
    let rot_alpha = frame.delta * ROTATION_SMOOTHING * speed_mul;
    layer.rotation_y += (target_rotation - layer.rotation_y) * rot_alpha;

    let target = set.target(mode);
    let alpha = frame.delta * blend_speed(mode) * speed_mul;
    let positions = &mut layer.live.positions;
    for (p, &goal) in positions.iter_mut().zip(target) {
        *p += (goal - *p) * alpha;
    }
    if layer.config.sparkle {
        let amount = jitter_amount(mode);
        for p in positions.iter_mut() {
            *p += (rng.gen::<f32>() - 0.5) * amount;
        }
    }

    let sparkle = layer.config.sparkle;
    for (i, (out, base)) in layer
        .live
        .colors
        .chunks_exact_mut(3)
        .zip(set.colors.chunks_exact(3))
        .enumerate()
    {
        let b = brightness(i, t, sparkle);
        out[0] = base[0] * b;
        out[1] = base[1] * b;
        out[2] = base[2] * b;
    }

    layer.point_size = pulsed_size(layer.config.base_size, t);
}
