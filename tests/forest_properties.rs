//! End-to-end checks of the forest-fire rules through the public API.

#![cfg(not(target_arch = "wasm32"))]

use forestfire::rendering::parse_patches;
use forestfire::sim::random::default_source;
use forestfire::{
    Forest, ForestConfig, InitialPattern, RandomSource, SimulationParameters, State,
};
use proptest::prelude::*;

fn seeded(text: &str, growth: f64, lightning: f64, seed: u64) -> Forest {
    let pattern = parse_patches(text).unwrap();
    Forest::from_patches(
        pattern.width,
        pattern.height,
        SimulationParameters::new(growth, lightning).unwrap(),
        pattern.patches,
        default_source(Some(seed)),
    )
    .unwrap()
}

#[test]
fn fire_spreads_to_all_eight_neighbors() {
    let mut forest = seeded("TTT\nTBT\nTTT", 0.0, 0.0, 1);
    forest.tick();
    assert_eq!(forest.render(), "BBB\nBEB\nBBB\n");
    forest.tick();
    assert_eq!(forest.render(), "EEE\nEEE\nEEE\n");
}

#[test]
fn fire_front_advances_one_patch_per_tick() {
    let mut forest = seeded("BTTTT", 0.0, 0.0, 1);
    let expected = ["EBTTT", "EEBTT", "EEEBT", "EEEEB", "EEEEE"];
    for line in expected {
        forest.tick();
        assert_eq!(forest.render().trim_end(), line);
    }
}

#[test]
fn barren_forest_without_growth_stays_empty() {
    let mut forest = ForestConfig::new(16, 9, 0.0, 0.0)
        .with_initial(InitialPattern::Barren)
        .with_seed(5)
        .build()
        .unwrap();
    for _ in 0..50 {
        forest.tick();
        assert!(forest.patches().iter().all(|&b| b == State::Empty as u8));
    }
}

#[test]
fn full_growth_fills_every_empty_patch() {
    let mut forest = seeded("EEEE\nEBTE\nEEEE", 1.0, 0.0, 9);
    forest.tick();
    // The tree next to the fire ignites; every empty patch grows.
    assert_eq!(forest.render(), "TTTT\nTEBT\nTTTT\n");
}

#[test]
fn certain_lightning_ignites_every_tree() {
    let mut forest = Forest::with_seed(7, 3, 0.0, 1.0, 3).unwrap();
    forest.tick();
    assert_eq!(forest.census().burning, 21);
    forest.tick();
    assert_eq!(forest.census().empty, 21);
}

#[test]
fn patches_and_render_describe_the_same_generation() {
    let mut forest = Forest::with_seed(12, 8, 0.1, 0.01, 77).unwrap();
    for _ in 0..30 {
        forest.tick();
        let from_bytes: String = forest
            .patches()
            .chunks(forest.width() as usize)
            .map(|row| {
                let mut line: String = row
                    .iter()
                    .map(|&b| State::try_from(b).unwrap().glyph())
                    .collect();
                line.push('\n');
                line
            })
            .collect();
        assert_eq!(from_bytes, forest.render());
    }
}

/// Always draws the same value.
struct Constant(f64);

impl RandomSource for Constant {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn injected_source_drives_the_rules() {
    let params = SimulationParameters::new(0.6, 0.4).unwrap();
    let mut forest =
        Forest::with_source(5, 5, params, InitialPattern::Barren, Constant(0.5)).unwrap();
    forest.tick();
    assert_eq!(forest.census().trees, 25);
    // 0.5 is not below the lightning probability, so nothing ever ignites.
    for _ in 0..10 {
        forest.tick();
    }
    assert_eq!(forest.census().trees, 25);
    assert_eq!(forest.generation(), 11);
}

#[test]
fn construction_rejects_invalid_input() {
    assert!(Forest::new(0, 10, 0.1, 0.1).is_err());
    assert!(Forest::new(10, 0, 0.1, 0.1).is_err());
    assert!(Forest::new(10, 10, 1.1, 0.1).is_err());
    assert!(Forest::new(10, 10, 0.1, -0.5).is_err());
}

proptest! {
    #[test]
    fn every_byte_is_a_valid_state(
        width in 1u32..24,
        height in 1u32..24,
        growth in 0.0f64..=1.0,
        lightning in 0.0f64..=1.0,
        seed in any::<u64>(),
        ticks in 0usize..40,
    ) {
        let mut forest = Forest::with_seed(width, height, growth, lightning, seed).unwrap();
        for _ in 0..ticks {
            forest.tick();
        }
        let patches = forest.patches();
        prop_assert_eq!(patches.len(), (width * height) as usize);
        prop_assert!(patches.iter().all(|&b| State::try_from(b).is_ok()));
        prop_assert_eq!(forest.census().total(), (width * height) as usize);
    }

    #[test]
    fn render_has_one_line_per_row(
        width in 1u32..24,
        height in 1u32..24,
        seed in any::<u64>(),
        ticks in 0usize..10,
    ) {
        let mut forest = Forest::with_seed(width, height, 0.3, 0.05, seed).unwrap();
        for _ in 0..ticks {
            forest.tick();
        }
        let text = forest.render();
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), height as usize);
        prop_assert!(lines.iter().all(|line| line.chars().count() == width as usize));
    }

    #[test]
    fn burning_never_lasts_two_ticks(
        width in 1u32..20,
        height in 1u32..20,
        growth in 0.0f64..=1.0,
        lightning in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut forest = Forest::with_seed(width, height, growth, lightning, seed).unwrap();
        for _ in 0..25 {
            let before = forest.cells().to_vec();
            forest.tick();
            for (old, new) in before.iter().zip(forest.cells()) {
                if *old == State::Burning {
                    prop_assert_eq!(*new, State::Empty);
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_identical_runs(
        width in 1u32..20,
        height in 1u32..20,
        growth in 0.0f64..=1.0,
        lightning in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut a = Forest::with_seed(width, height, growth, lightning, seed).unwrap();
        let mut b = Forest::with_seed(width, height, growth, lightning, seed).unwrap();
        for _ in 0..25 {
            a.tick();
            b.tick();
            prop_assert_eq!(a.patches(), b.patches());
        }
    }
}
