// Shared shape and animation tuning constants used by the core and the native frontend.

// Particle budget
pub const DEFAULT_PARTICLE_COUNT: usize = 18_000;
pub const DEFAULT_TEXT: &str = "MERRY\nCHRISTMAS";
pub const DEFAULT_FONT_SIZE: f32 = 120.0;
pub const MIN_FONT_SIZE: f32 = 20.0;
pub const MAX_FONT_SIZE: f32 = 400.0;

// Tree: spiral cone
pub const TREE_HALF_HEIGHT: f32 = 2.5;
pub const TREE_RADIUS_SLOPE: f32 = 0.5; // radius gained per unit below the tip
pub const TREE_TWIST: f32 = 15.0; // radians of spiral per unit of height
pub const TREE_SCATTER: f32 = 0.15; // max extra radius for volume

// Galaxy: five-armed tilted spiral disc
pub const GALAXY_RADIUS: f32 = 9.0;
pub const GALAXY_RADIAL_EXPONENT: f32 = 1.8; // >1 biases mass toward the core
pub const GALAXY_BRANCHES: usize = 5;
pub const GALAXY_SPIRAL: f32 = 0.55; // arm twist per unit radius
pub const GALAXY_CURVE_FREQ: f32 = 3.2;
pub const GALAXY_CURVE_PHASE: f32 = 2.1; // per-branch phase step
pub const GALAXY_NOISE: f32 = 0.15; // full width of the x/z jitter
pub const GALAXY_THICKNESS: f32 = 0.9;
pub const GALAXY_THICKNESS_FALLOFF: f32 = 0.3;
pub const GALAXY_TILT: f32 = std::f32::consts::FRAC_PI_4;

// Text: raster surface and sampling
pub const TEXT_CANVAS_WIDTH: u32 = 1024;
pub const TEXT_CANVAS_HEIGHT: u32 = 512;
pub const TEXT_SAMPLE_STEP: u32 = 3;
pub const TEXT_INK_THRESHOLD: u8 = 128;
pub const TEXT_LINE_HEIGHT: f32 = 1.2; // multiple of the font size
pub const TEXT_WORLD_SCALE: f32 = 0.016; // world units per pixel
pub const TEXT_FUZZ: f32 = 0.18; // full width of the x/y fuzz
pub const TEXT_FUZZ_Z: f32 = 0.6; // full depth of the z fuzz

// Palette (sRGB hex) and pick thresholds
pub const COLOR_GOLD: u32 = 0xffcc00;
pub const COLOR_RED: u32 = 0xff0055;
pub const COLOR_GREEN: u32 = 0x00ff44;
pub const GOLD_THRESHOLD: f32 = 0.90; // u above this is gold (10%)
pub const RED_THRESHOLD: f32 = 0.65; // u above this is red (25%)
pub const LIGHTNESS_JITTER: f32 = 0.1; // full width of the HSL lightness offset

// Frame blending
pub const TREE_BLEND_SPEED: f32 = 2.5;
pub const GALAXY_BLEND_SPEED: f32 = 3.0;
pub const TEXT_BLEND_SPEED: f32 = 2.0;
pub const TREE_JITTER: f32 = 0.01;
pub const GALAXY_JITTER: f32 = 0.03;
pub const TEXT_JITTER: f32 = 0.025;

// Rotation
pub const ROTATION_INPUT_GAIN: f32 = 2.0;
pub const ROTATION_IDLE_SPEED: f32 = 0.1; // radians per second of drift
pub const ROTATION_SMOOTHING: f32 = 2.0;

// Twinkle (sparkle layers)
pub const SPARKLE_FREQ: f32 = 5.0;
pub const SPARKLE_SHARPNESS: i32 = 8;
pub const SPARKLE_BASE: f32 = 0.25;
pub const SPARKLE_GAIN: f32 = 1.5;
// Pulse (trail layers)
pub const TRAIL_FREQ: f32 = 2.0;
pub const TRAIL_BASE: f32 = 0.4;
pub const TRAIL_GAIN: f32 = 0.2;
pub const PHASE_PER_PARTICLE: f32 = 0.5;

// Point size breathing
pub const SIZE_PULSE_FREQ: f32 = 3.0;
pub const SIZE_PULSE_AMOUNT: f32 = 0.05;
