use dai_core::{ConvergenceMonitor, DaiRng, Real};
use proptest::prelude::*;

/// Maximum of the last `capacity` samples, NaN only if all of them are NaN
fn reference_max(samples: &[Real], capacity: usize, default_value: Real) -> Real {
    if samples.len() < capacity {
        return default_value;
    }
    let window = &samples[samples.len() - capacity..];
    window
        .iter()
        .copied()
        .filter(|x| !x.is_nan())
        .reduce(Real::max)
        .unwrap_or(Real::NAN)
}

fn same(a: Real, b: Real) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

fn sample() -> impl Strategy<Value = Real> {
    prop_oneof![
        8 => -100.0f64..100.0,
        2 => (-5i32..5).prop_map(Real::from),
        1 => Just(Real::NAN),
        1 => Just(Real::INFINITY),
        1 => Just(Real::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn max_diff_matches_trailing_window(
        capacity in 1usize..12,
        default_value in -10.0f64..10.0,
        samples in prop::collection::vec(sample(), 0..80),
    ) {
        let mut monitor = ConvergenceMonitor::new(capacity, default_value).unwrap();
        prop_assert_eq!(monitor.max_diff(), default_value);
        for i in 0..samples.len() {
            monitor.push(samples[i]);
            let expected = reference_max(&samples[..=i], capacity, default_value);
            let got = monitor.max_diff();
            prop_assert!(same(got, expected), "push #{} got={} expected={}", i, got, expected);
            // Querying twice does not change the answer.
            prop_assert!(same(monitor.max_diff(), got));
        }
    }

    #[test]
    fn default_reported_until_full(
        capacity in 1usize..20,
        samples in prop::collection::vec(-1.0f64..1.0, 0..40),
    ) {
        let mut monitor = ConvergenceMonitor::new(capacity, 42.0).unwrap();
        for (i, &x) in samples.iter().enumerate() {
            monitor.push(x);
            prop_assert_eq!(monitor.len(), (i + 1).min(capacity));
            if i + 1 < capacity {
                prop_assert_eq!(monitor.max_diff(), 42.0);
            } else {
                prop_assert!(monitor.max_diff() <= 1.0);
            }
        }
    }

    #[test]
    fn window_holds_last_samples(
        capacity in 1usize..10,
        samples in prop::collection::vec(-50.0f64..50.0, 0..40),
    ) {
        let mut monitor = ConvergenceMonitor::new(capacity, 0.0).unwrap();
        for &x in &samples {
            monitor.push(x);
        }
        let start = samples.len().saturating_sub(capacity);
        prop_assert_eq!(monitor.window().collect::<Vec<_>>(), samples[start..].to_vec());
    }

    #[test]
    fn rescans_bounded_by_evictions(
        capacity in 1usize..16,
        samples in prop::collection::vec(-1.0f64..1.0, 0..200),
    ) {
        let mut monitor = ConvergenceMonitor::new(capacity, 0.0).unwrap();
        for &x in &samples {
            monitor.push(x);
        }
        let evictions = samples.len().saturating_sub(capacity) as u64;
        prop_assert!(monitor.rescans() <= evictions);
    }
}

#[test]
fn random_stream_rescans_are_rare() {
    let mut rng = DaiRng::new(2009);
    let capacity = 64;
    let pushes = 100_000;
    let mut monitor = ConvergenceMonitor::new(capacity, 1.0).unwrap();
    for _ in 0..pushes {
        monitor.push(rng.uniform());
    }
    // With i.i.d. samples the maximum is evicted about once per window.
    let full_pushes = (pushes - capacity) as u64;
    assert!(monitor.rescans() > 0);
    assert!(
        monitor.rescans() < full_pushes / 16,
        "rescans={} full_pushes={}",
        monitor.rescans(),
        full_pushes
    );
}

#[test]
fn converges_on_geometric_decay() {
    let mut monitor = ConvergenceMonitor::new(5, 1.0).unwrap();
    let tolerance = 1e-6;
    let mut diff = 1.0;
    let mut iterations = 0;
    while !monitor.converged(tolerance) {
        diff *= 0.5;
        monitor.push(diff);
        iterations += 1;
        assert!(iterations < 100);
    }
    // 2^-20 < 1e-6, and the window must hold five such steps.
    assert_eq!(iterations, 24);
}
