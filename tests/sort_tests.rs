// Integration tests for the instrumented sort library

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sortty::sorts::{Algorithm, Metrics};
use sortty::step::{record_steps, NoopSink};

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

fn random_array(seed: u64, len: usize, max: i64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1..=max)).collect()
}

#[test]
fn test_every_algorithm_sorts_every_shape() {
    let shapes: Vec<Vec<i64>> = vec![
        vec![],
        vec![7],
        vec![2, 1],
        (1..=32).collect(),
        (1..=32).rev().collect(),
        vec![5, 5, 5, 5, 5],
        vec![3, 1, 3, 3, 2, 1, 3, 2, 2],
        random_array(42, 64, 100),
        vec![-5, 3, 0, -1, 12, -5],
    ];

    for algorithm in Algorithm::ALL {
        for input in &shapes {
            let mut arr = input.clone();
            algorithm.run(&mut arr, &mut NoopSink);
            assert_eq!(arr.len(), input.len(), "{} changed length", algorithm);
            assert!(is_sorted(&arr), "{} left {:?} unsorted", algorithm, arr);
            assert!(
                is_permutation(&arr, input),
                "{} lost elements on {:?}",
                algorithm,
                input
            );
        }
    }
}

#[test]
fn test_boundary_inputs_cost_nothing() {
    for algorithm in Algorithm::ALL {
        for input in [vec![], vec![42]] {
            let (sorted, metrics, events) = record_steps(algorithm, &input);
            assert_eq!(sorted, input, "{} mutated a trivial input", algorithm);
            assert_eq!(metrics, Metrics::default(), "{} counted work", algorithm);
            assert!(events.is_empty(), "{} emitted steps", algorithm);
        }
    }
}

#[test]
fn test_counters_are_deterministic() {
    let input = random_array(7, 80, 500);
    for algorithm in Algorithm::ALL {
        let mut first = input.clone();
        let m1 = algorithm.run(&mut first, &mut NoopSink);
        let mut second = input.clone();
        let m2 = algorithm.run(&mut second, &mut NoopSink);
        assert_eq!(first, second);
        assert_eq!(m1, m2, "{} counters varied between runs", algorithm);
    }
}

#[test]
fn test_sorting_is_idempotent() {
    let input = random_array(11, 50, 200);
    for algorithm in Algorithm::ALL {
        let mut once = input.clone();
        algorithm.run(&mut once, &mut NoopSink);
        let mut twice = once.clone();
        algorithm.run(&mut twice, &mut NoopSink);
        assert_eq!(once, twice, "{} is not idempotent", algorithm);
    }
}

#[test]
fn test_space_is_zero_except_merge() {
    let input = random_array(3, 40, 100);
    for algorithm in Algorithm::ALL {
        let mut arr = input.clone();
        let metrics = algorithm.run(&mut arr, &mut NoopSink);
        if algorithm == Algorithm::Merge {
            assert!(metrics.space > 0);
        } else {
            assert_eq!(metrics.space, 0, "{} reported aux space", algorithm);
        }
    }
}

#[test]
fn test_all_algorithms_agree_on_random_input() {
    let input = random_array(99, 100, 1000);

    let mut outputs = Vec::new();
    let mut loops = Vec::new();
    for algorithm in Algorithm::ALL {
        let mut arr = input.clone();
        let metrics = algorithm.run(&mut arr, &mut NoopSink);
        outputs.push(arr);
        loops.push((algorithm, metrics.loops));
    }

    for output in &outputs[1..] {
        assert_eq!(output, &outputs[0]);
    }

    // Quadratic scan counts are exact for bubble and selection:
    // n(n-1)/2 with n = 100
    let by_algo = |wanted: Algorithm| {
        loops
            .iter()
            .find(|(a, _)| *a == wanted)
            .map(|(_, l)| *l)
            .unwrap()
    };
    assert_eq!(by_algo(Algorithm::Bubble), 4950);
    assert_eq!(by_algo(Algorithm::Selection), 4950);

    // The n log n algorithms land well below the quadratic ones
    assert!(by_algo(Algorithm::Merge) < by_algo(Algorithm::Bubble));
    assert!(by_algo(Algorithm::Heap) < by_algo(Algorithm::Bubble));
    assert!(by_algo(Algorithm::QuickMedian3) < by_algo(Algorithm::Bubble));
}

#[test]
fn test_step_streams_end_at_the_sorted_array() {
    let input = random_array(13, 24, 50);
    for algorithm in Algorithm::ALL {
        let (sorted, _, events) = record_steps(algorithm, &input);
        assert!(is_sorted(&sorted));
        for event in &events {
            assert!(event.index < input.len(), "{} emitted oob index", algorithm);
            assert_eq!(event.snapshot.len(), input.len());
        }
        // The last emitted frame is the finished array
        let last = events.last().expect("a non-trivial sort must emit steps");
        assert_eq!(last.snapshot, sorted, "{} final frame mismatch", algorithm);
    }
}

#[test]
fn test_recording_never_changes_counters() {
    // Animation is a pure observer: metrics match the silent run exactly
    let input = random_array(5, 60, 300);
    for algorithm in Algorithm::ALL {
        let mut silent = input.clone();
        let silent_metrics = algorithm.run(&mut silent, &mut NoopSink);
        let (recorded, recorded_metrics, _) = record_steps(algorithm, &input);
        assert_eq!(silent, recorded);
        assert_eq!(silent_metrics, recorded_metrics);
    }
}

#[test]
fn test_quick_last_degrades_on_sorted_input() {
    // Last-element pivot on pre-sorted data scans every suffix:
    // (n-1) + (n-2) + ... + 1
    let sorted: Vec<i64> = (1..=30).collect();
    let mut arr = sorted.clone();
    let last = Algorithm::QuickLast.run(&mut arr, &mut NoopSink);
    assert_eq!(last.loops, 29 * 30 / 2);

    let mut arr = sorted.clone();
    let median = Algorithm::QuickMedian3.run(&mut arr, &mut NoopSink);
    assert!(median.loops < last.loops);
}
