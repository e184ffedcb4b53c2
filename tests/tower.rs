use std::collections::HashSet;

use proptest::prelude::*;
use rock_tower::direction::parse_push_pattern;
use rock_tower::shape::standard_catalog;
use rock_tower::simulator::{Settled, Simulation};
use rock_tower::{solve, Config};

const SAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";
const SHORT_SAMPLE: &str = ">>><<><>><<<>><>>><<<>><>><>><<<>>";

fn brute_force() -> Config {
    Config {
        detect_cycles: false,
        ..Config::default()
    }
}

fn with_threshold(threshold: u32) -> Config {
    Config {
        confirmation_threshold: threshold,
        ..Config::default()
    }
}

fn run(pattern: &str, shapes: usize) -> (Vec<Settled>, HashSet<(i64, i64)>) {
    let mut sim = Simulation::new(
        7,
        standard_catalog().unwrap(),
        parse_push_pattern(pattern).unwrap(),
    )
    .unwrap();
    let settled = (0..shapes).map(|_| sim.drop_next().unwrap()).collect();
    let cells = sim.field().cells().copied().collect();
    (settled, cells)
}

#[test]
fn sample_after_2022_rocks() {
    assert_eq!(solve(&brute_force(), SAMPLE, 2022).unwrap().height, 3068);
    assert_eq!(solve(&Config::default(), SAMPLE, 2022).unwrap().height, 3068);
}

#[test]
fn sample_after_a_trillion_rocks() {
    let outcome = solve(&Config::default(), SAMPLE, 1_000_000_000_000).unwrap();
    assert_eq!(outcome.height, 1_514_285_714_288);
    assert!(outcome.simulated < 1_000);

    let e = outcome.extrapolation.unwrap();
    assert_eq!(e.period, 35);
    assert_eq!(e.height_per_period, 53);
}

#[test]
fn short_sample_golden_heights() {
    assert_eq!(solve(&brute_force(), SHORT_SAMPLE, 2022).unwrap().height, 3155);
    assert_eq!(
        solve(&Config::default(), SHORT_SAMPLE, 1_000_000_000_000)
            .unwrap()
            .height,
        1_560_000_000_003
    );
}

#[test]
fn extrapolation_matches_brute_force_at_low_threshold() {
    for pattern in [SAMPLE, SHORT_SAMPLE] {
        let expected = solve(&brute_force(), pattern, 10_000).unwrap();
        let outcome = solve(&with_threshold(3), pattern, 10_000).unwrap();
        assert!(outcome.extrapolation.is_some());
        assert!(outcome.simulated < 10_000);
        assert_eq!(outcome.height, expected.height);
    }
}

#[test]
fn one_rock_on_an_empty_field() {
    let outcome = solve(&Config::default(), SAMPLE, 1).unwrap();
    assert_eq!(outcome.height, 1);
    assert_eq!(outcome.simulated, 1);
    assert!(outcome.extrapolation.is_none());
}

#[test]
fn repeated_runs_are_identical() {
    let a = run(SAMPLE, 5_000);
    let b = run(SAMPLE, 5_000);
    assert_eq!(a.0, b.0);
    assert_eq!(a.1, b.1);
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::bool::ANY, 1..24)
        .prop_map(|v| v.into_iter().map(|right| if right { '>' } else { '<' }).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn height_grows_by_at_most_one_shape(pattern in pattern_strategy(), shapes in 1usize..400) {
        let catalog = standard_catalog().unwrap();
        let (settled, cells) = run(&pattern, shapes);

        let mut previous = 0;
        let mut expected_cells = 0;
        for s in &settled {
            let shape = &catalog[s.shape_index];
            prop_assert!(s.height >= previous);
            prop_assert!(s.height - previous <= shape.height());
            previous = s.height;
            expected_cells += shape.cell_count();
        }

        // No two shapes ever claim the same cell.
        prop_assert_eq!(cells.len(), expected_cells);
        prop_assert!(cells.iter().all(|(col, row)| (0..7).contains(col) && *row >= 0));
    }

    #[test]
    fn runs_are_deterministic(pattern in pattern_strategy(), shapes in 1usize..300) {
        prop_assert_eq!(run(&pattern, shapes), run(&pattern, shapes));
    }

    #[test]
    fn extrapolation_agrees_with_brute_force(pattern in pattern_strategy(), shapes in 1i64..2500) {
        let expected = solve(&brute_force(), &pattern, shapes).unwrap();
        let outcome = solve(&with_threshold(40), &pattern, shapes).unwrap();
        prop_assert_eq!(outcome.height, expected.height);
    }
}
