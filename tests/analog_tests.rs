mod common;

use common::{FIRST_YEAR, store_from, synthetic_store};
use rayon::prelude::*;
use snow_analog::{
    AnalogError, AnalogParams, Signal, get_analog,
    analysis::{SignalDistances, fuse_ranks},
    rank_analogs,
};

fn params(start_year: i32, look_back: u32, distance_exponent: f64, count: usize) -> AnalogParams {
    AnalogParams {
        look_back,
        start_year,
        distance_exponent,
        count,
    }
}

#[test]
fn test_end_to_end_three_analogs_for_2022() {
    let store = synthetic_store();
    let analogs = get_analog(&store, 2022, &params(1964, 0, 1.0, 3)).unwrap();

    assert_eq!(analogs.len(), 3, "Expected exactly 3 analogs, got {:?}", analogs);
    assert!(
        analogs.iter().all(|&y| (1964..2022).contains(&y)),
        "Analog outside [1964, 2022): {:?}",
        analogs
    );
}

#[test]
fn test_never_returns_target_or_later() {
    let store = synthetic_store();
    for target in 1966..=2022 {
        let analogs = get_analog(&store, target, &AnalogParams::default()).unwrap();
        assert!(
            analogs.iter().all(|&y| y < target),
            "Target {} got analogs {:?}",
            target,
            analogs
        );
    }
}

#[test]
fn test_result_length_is_min_of_count_and_pool() {
    let store = synthetic_store();

    // Pool 1964..=1966 holds 3 years
    assert_eq!(get_analog(&store, 1967, &params(1964, 0, 1.0, 5)).unwrap().len(), 3);
    assert_eq!(get_analog(&store, 1967, &params(1964, 0, 1.0, 2)).unwrap().len(), 2);
    assert_eq!(get_analog(&store, 2022, &params(1964, 0, 1.0, 500)).unwrap().len(), 58);
    assert!(get_analog(&store, 2022, &params(1964, 0, 1.0, 0)).unwrap().is_empty());
}

#[test]
fn test_identical_calls_are_deterministic() {
    let store = synthetic_store();
    let p = params(1964, 1, 2.0, 10);

    let first = rank_analogs(&store, 2015, &p).unwrap();
    let second = rank_analogs(&store, 2015, &p).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_calls_match_sequential() {
    let store = synthetic_store();
    let p = AnalogParams::default();

    let sequential: Vec<Vec<i32>> = (1990..2022)
        .map(|year| get_analog(&store, year, &p).unwrap())
        .collect();
    let parallel: Vec<Vec<i32>> = (1990..2022)
        .into_par_iter()
        .map(|year| get_analog(&store, year, &p).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_look_back_raises_pool_floor() {
    let store = synthetic_store();
    let analogs = get_analog(&store, 2022, &params(FIRST_YEAR, 2, 1.0, 500)).unwrap();

    assert_eq!(analogs.len(), 56, "Pool should be 1966..=2021");
    assert_eq!(analogs.iter().min(), Some(&1966));
    assert!(!analogs.contains(&1964) && !analogs.contains(&1965));
}

#[test]
fn test_target_at_or_before_floor_is_invalid_range() {
    let store = synthetic_store();

    assert_eq!(
        get_analog(&store, 1964, &params(1964, 0, 1.0, 5)).unwrap_err(),
        AnalogError::InvalidRange {
            target: 1964,
            effective_start: 1964
        }
    );
    assert_eq!(
        get_analog(&store, 1965, &params(1964, 1, 1.0, 5)).unwrap_err(),
        AnalogError::InvalidRange {
            target: 1965,
            effective_start: 1965
        }
    );
}

#[test]
fn test_unknown_target_is_missing_year() {
    let store = synthetic_store();
    let err = get_analog(&store, 2030, &AnalogParams::default()).unwrap_err();
    assert_eq!(
        err,
        AnalogError::MissingYear {
            series: "ONI".to_string(),
            year: 2030
        }
    );
}

#[test]
fn test_start_year_before_history_is_missing_year() {
    let store = synthetic_store();
    let err = get_analog(&store, 1970, &params(1950, 0, 1.0, 5)).unwrap_err();
    assert!(
        matches!(err, AnalogError::MissingYear { year: 1950, .. }),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_higher_exponent_punishes_single_big_miss() {
    // Target 2003 is flat. On ONI:
    //   2000: one miss of 3.0         -> E1 = 3.0, E3 = 27.0
    //   2001: four misses of 1.0      -> E1 = 4.0, E3 = 4.0
    //   2002: two misses of 1.75      -> E1 = 3.5, E3 = 10.72
    // PDO is identical everywhere, so its ranks follow year order.
    let oni = [
        (2000, vec![3.0, 0.0, 0.0, 0.0]),
        (2001, vec![1.0, 1.0, 1.0, 1.0]),
        (2002, vec![1.75, 1.75, 0.0, 0.0]),
        (2003, vec![0.0, 0.0, 0.0, 0.0]),
    ];
    let pdo = [
        (2000, vec![0.0, 0.0]),
        (2001, vec![0.0, 0.0]),
        (2002, vec![0.0, 0.0]),
        (2003, vec![0.0, 0.0]),
    ];
    let store = store_from(&oni, &pdo);

    let manhattan = get_analog(&store, 2003, &params(2000, 0, 1.0, 3)).unwrap();
    assert_eq!(manhattan, vec![2000, 2001, 2002]);

    let cubed = get_analog(&store, 2003, &params(2000, 0, 3.0, 3)).unwrap();
    assert_eq!(cubed, vec![2001, 2000, 2002]);
}

#[test]
fn test_candidate_tail_beyond_target_length_is_ignored() {
    // 2001 matches the target on the first three values; its huge tail must not count.
    let oni = [
        (2000, vec![0.5, 0.5, 0.5, 0.0, 0.0]),
        (2001, vec![0.0, 0.0, 0.0, 100.0, -100.0]),
        (2002, vec![0.0, 0.0, 0.0]),
    ];
    let pdo = [
        (2000, vec![0.5, 0.5, 0.5, 0.0, 0.0]),
        (2001, vec![0.0, 0.0, 0.0, 100.0, -100.0]),
        (2002, vec![0.0, 0.0, 0.0]),
    ];
    let store = store_from(&oni, &pdo);

    let ranking = rank_analogs(&store, 2002, &params(2000, 0, 1.0, 2)).unwrap();
    assert_eq!(ranking[0].year, 2001);
    assert_eq!(ranking[0].fused_score, 1.0);
    assert_eq!(ranking[1].year, 2000);
    assert_eq!(ranking[1].fused_score, 2.0);
}

#[test]
fn test_reversed_signal_orders_tie_in_input_order() {
    let oni = SignalDistances {
        signal: Signal::Oni,
        totals: vec![(1, 0.5), (2, 1.0), (3, 1.5)],
    };
    let pdo = SignalDistances {
        signal: Signal::Pdo,
        totals: vec![(1, 9.0), (2, 6.0), (3, 3.0)],
    };

    let fused = fuse_ranks(&[oni, pdo]).unwrap();
    assert_eq!(fused, vec![(1, 2.0), (2, 2.0), (3, 2.0)]);
}
