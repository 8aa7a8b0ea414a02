// Host-side tests for target shape generation.

mod common;

use celestial_core::*;
use common::{BlockRasterizer, UnavailableRasterizer};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn point(data: &[f32], i: usize) -> Vec3 {
    Vec3::new(data[i * 3], data[i * 3 + 1], data[i * 3 + 2])
}

fn make_set(count: usize, seed: u64) -> ParticleSet {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(
        DEFAULT_TEXT,
        DEFAULT_FONT_SIZE,
        &GeneratorParams { count },
        &mut BlockRasterizer,
        &mut rng,
    )
}

#[test]
fn all_arrays_have_three_floats_per_particle() {
    for count in [0, 1, 7, 2_500] {
        let set = make_set(count, 1);
        assert_eq!(set.tree.len(), count * 3);
        assert_eq!(set.galaxy.len(), count * 3);
        assert_eq!(set.text.len(), count * 3);
        assert_eq!(set.colors.len(), count * 3);
        assert_eq!(set.len(), count);
    }
}

#[test]
fn default_count_matches_budget() {
    let set = make_set(GeneratorParams::default().count, 2);
    assert_eq!(set.len(), DEFAULT_PARTICLE_COUNT);
    assert_eq!(set.colors.len(), 3 * DEFAULT_PARTICLE_COUNT);
}

#[test]
fn tree_points_stay_inside_scattered_cone() {
    let set = make_set(10_000, 3);
    for i in 0..set.len() {
        let p = point(&set.tree, i);
        assert!(
            (-TREE_HALF_HEIGHT..=TREE_HALF_HEIGHT).contains(&p.y),
            "tree y {} out of range",
            p.y
        );
        let allowed = ((TREE_HALF_HEIGHT - p.y) * TREE_RADIUS_SLOPE).max(0.0) + TREE_SCATTER;
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        assert!(
            radial <= allowed + 1e-4,
            "particle {i}: radius {radial} exceeds {allowed} at y={}",
            p.y
        );
    }
}

#[test]
fn tree_is_wide_at_base_and_narrow_at_tip() {
    let set = make_set(10_000, 4);
    let (mut low, mut high) = (0.0_f32, 0.0_f32);
    for i in 0..set.len() {
        let p = point(&set.tree, i);
        let radial = (p.x * p.x + p.z * p.z).sqrt();
        if p.y < -2.0 {
            low = low.max(radial);
        } else if p.y > 2.0 {
            high = high.max(radial);
        }
    }
    assert!(low > 2.0, "base radius {low} too small");
    assert!(high < 0.5, "tip radius {high} too large");
}

#[test]
fn galaxy_disc_radius_is_capped_before_tilt() {
    let set = make_set(10_000, 5);
    // x/z noise can push a point past the radial cap by at most half the noise width per axis.
    let tolerance = GALAXY_NOISE / 2.0 * std::f32::consts::SQRT_2 + 1e-4;
    for i in 0..set.len() {
        let flat = untilt_galaxy_point(point(&set.galaxy, i));
        let radial = (flat.x * flat.x + flat.z * flat.z).sqrt();
        assert!(
            radial <= GALAXY_RADIUS + tolerance,
            "particle {i}: galaxy radius {radial}"
        );
    }
}

#[test]
fn galaxy_mass_concentrates_toward_core() {
    let set = make_set(10_000, 6);
    let inner = (0..set.len())
        .filter(|&i| {
            let flat = untilt_galaxy_point(point(&set.galaxy, i));
            (flat.x * flat.x + flat.z * flat.z).sqrt() < GALAXY_RADIUS / 2.0
        })
        .count();
    // r = u^1.8 * R, so P(r < R/2) = 0.5^(1/1.8) ~ 0.68
    let fraction = inner as f32 / set.len() as f32;
    assert!((0.63..0.73).contains(&fraction), "inner fraction {fraction}");
}

#[test]
fn galaxy_disc_is_tilted() {
    let set = make_set(5_000, 7);
    // A flat disc would keep |y| tiny; the tilt mixes z into y.
    let max_y = (0..set.len())
        .map(|i| point(&set.galaxy, i).y.abs())
        .fold(0.0_f32, f32::max);
    assert!(max_y > 3.0, "galaxy looks untilted (max |y| = {max_y})");
}

#[test]
fn unavailable_rasterizer_collapses_text_to_origin() {
    let mut rng = StdRng::seed_from_u64(8);
    let set = generate(
        "HELLO",
        120.0,
        &GeneratorParams { count: 3_000 },
        &mut UnavailableRasterizer,
        &mut rng,
    );
    assert!(set.text.iter().all(|&v| v == 0.0));
    // Other shapes are unaffected.
    assert!(set.tree.iter().any(|&v| v != 0.0));
    assert!(set.galaxy.iter().any(|&v| v != 0.0));
}

#[test]
fn blank_text_collapses_to_origin() {
    let mut rng = StdRng::seed_from_u64(9);
    for text in ["", "   ", "\n\n"] {
        let set = generate(
            text,
            120.0,
            &GeneratorParams { count: 500 },
            &mut BlockRasterizer,
            &mut rng,
        );
        assert!(set.text.iter().all(|&v| v == 0.0), "text {text:?} produced ink");
    }
}

#[test]
fn text_points_cluster_on_ink() {
    let mut rng = StdRng::seed_from_u64(10);
    let set = generate(
        "HI",
        200.0,
        &GeneratorParams { count: 4_000 },
        &mut BlockRasterizer,
        &mut rng,
    );
    let (x0, y0, x1, y1) =
        BlockRasterizer::block_bounds("HI", 200.0, TEXT_CANVAS_WIDTH, TEXT_CANVAS_HEIGHT);
    let min = pixel_to_world(glam::UVec2::new(x0.floor() as u32, y1.ceil() as u32));
    let max = pixel_to_world(glam::UVec2::new(x1.ceil() as u32, y0.floor() as u32));
    let fuzz = TEXT_FUZZ / 2.0 + 1e-4;
    for i in 0..set.len() {
        let p = point(&set.text, i);
        assert!(p.x >= min.x - fuzz && p.x <= max.x + fuzz, "x {} outside ink", p.x);
        assert!(p.y >= min.y - fuzz && p.y <= max.y + fuzz, "y {} outside ink", p.y);
        assert!(p.z.abs() <= TEXT_FUZZ_Z / 2.0 + 1e-4, "z {} too deep", p.z);
    }
}

#[test]
fn multi_line_text_spreads_vertically() {
    let mut rng = StdRng::seed_from_u64(11);
    let set = generate(
        "A\nB",
        100.0,
        &GeneratorParams { count: 4_000 },
        &mut BlockRasterizer,
        &mut rng,
    );
    let above = (0..set.len()).filter(|&i| point(&set.text, i).y > 0.0).count();
    let below = set.len() - above;
    // Two lines centred on the canvas: roughly half the particles on each.
    assert!(above > 1_500 && below > 1_500, "above={above} below={below}");
}

#[derive(PartialEq)]
enum Tone {
    Gold,
    Red,
    Green,
}

fn classify(c: Vec3) -> Tone {
    if c.y > c.x {
        Tone::Green
    } else if c.y > c.z {
        Tone::Gold
    } else {
        Tone::Red
    }
}

#[test]
fn palette_split_matches_probabilities() {
    let set = make_set(18_000, 12);
    let n = set.len() as f32;
    let tones: Vec<Tone> = (0..set.len()).map(|i| classify(point(&set.colors, i))).collect();
    let gold = tones.iter().filter(|t| **t == Tone::Gold).count() as f32 / n;
    let red = tones.iter().filter(|t| **t == Tone::Red).count() as f32 / n;
    let green = tones.iter().filter(|t| **t == Tone::Green).count() as f32 / n;
    assert!((gold - 0.10).abs() < 0.02, "gold fraction {gold}");
    assert!((red - 0.25).abs() < 0.02, "red fraction {red}");
    assert!((green - 0.65).abs() < 0.02, "green fraction {green}");
}

#[test]
fn colors_are_valid_linear_rgb() {
    let set = make_set(5_000, 13);
    assert!(set.colors.iter().all(|&c| (0.0..=1.0).contains(&c)));
    // Lightness jitter means not every green is identical.
    let greens: Vec<Vec3> = (0..set.len())
        .map(|i| point(&set.colors, i))
        .filter(|c| classify(*c) == Tone::Green)
        .collect();
    assert!(greens.windows(2).any(|w| (w[0] - w[1]).length() > 1e-3));
}

#[test]
fn regeneration_is_not_reproducible_across_seeds() {
    let a = make_set(1_000, 100);
    let b = make_set(1_000, 101);
    assert_ne!(a.tree, b.tree);
    assert_ne!(a.text, b.text);
}

#[test]
fn same_seed_reproduces_the_cloud() {
    let a = make_set(1_000, 42);
    let b = make_set(1_000, 42);
    assert_eq!(a.tree, b.tree);
    assert_eq!(a.galaxy, b.galaxy);
    assert_eq!(a.text, b.text);
    assert_eq!(a.colors, b.colors);
}

#[test]
fn mode_cycles_through_all_shapes() {
    assert_eq!(Mode::default(), Mode::Tree);
    assert_eq!(Mode::Tree.next(), Mode::Galaxy);
    assert_eq!(Mode::Galaxy.next(), Mode::Text);
    assert_eq!(Mode::Text.next(), Mode::Tree);
    let set = make_set(10, 14);
    assert_eq!(set.target(Mode::Galaxy), set.galaxy.as_slice());
    assert_eq!(set.target(Mode::Text), set.text.as_slice());
}
