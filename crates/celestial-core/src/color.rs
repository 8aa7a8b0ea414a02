//! Palette colours and the small amount of colour maths the generator needs.
//!
//! Palette entries are authored as sRGB hex. Lightness offsets are applied in
//! sRGB-space HSL, and the result is converted to linear RGB because the
//! renderer blends additively into a linear target.

use crate::constants::{COLOR_GOLD, COLOR_GREEN, COLOR_RED, GOLD_THRESHOLD, RED_THRESHOLD};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteColor {
    Gold,
    Red,
    Green,
}

impl PaletteColor {
    /// Map a uniform draw in [0, 1) onto the palette: 10% gold, 25% red, 65% green.
    pub fn pick(u: f32) -> Self {
        if u > GOLD_THRESHOLD {
            PaletteColor::Gold
        } else if u > RED_THRESHOLD {
            PaletteColor::Red
        } else {
            PaletteColor::Green
        }
    }

    pub fn srgb(self) -> Vec3 {
        match self {
            PaletteColor::Gold => hex_to_srgb(COLOR_GOLD),
            PaletteColor::Red => hex_to_srgb(COLOR_RED),
            PaletteColor::Green => hex_to_srgb(COLOR_GREEN),
        }
    }
}

pub fn hex_to_srgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn srgb_to_linear_vec(c: Vec3) -> Vec3 {
    Vec3::new(srgb_to_linear(c.x), srgb_to_linear(c.y), srgb_to_linear(c.z))
}

/// Returns (hue, saturation, lightness), each in [0, 1].
pub fn rgb_to_hsl(c: Vec3) -> (f32, f32, f32) {
    let max = c.max_element();
    let min = c.min_element();
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l <= 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
    let h = if max == c.x {
        (c.y - c.z) / d + if c.y < c.z { 6.0 } else { 0.0 }
    } else if max == c.y {
        (c.z - c.x) / d + 2.0
    } else {
        (c.x - c.y) / d + 4.0
    };
    (h / 6.0, s, l)
}

pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Shift HSL lightness by `delta`, clamping the result to [0, 1].
pub fn offset_lightness(c: Vec3, delta: f32) -> Vec3 {
    let (h, s, l) = rgb_to_hsl(c);
    hsl_to_rgb(h, s, (l + delta).clamp(0.0, 1.0))
}
