// File: crates/column-core/tests/scale.rs
// Purpose: Band and continuous scale math, nicing, log guards, and degenerate domains.

use approx::assert_relative_eq;
use column_core::settings::ScaleConfig;
use column_core::ticks::{nice, tick_step, ticks};
use column_core::{BandScale, Domain, Range, Scale, ScaleKind, ScaleSpec, Side};

fn keys(names: &[&str]) -> Domain {
    Domain::Categories(names.iter().map(|s| s.to_string()).collect())
}

fn continuous(domain: Domain, kind: ScaleKind, range: Range) -> column_core::ContinuousScale {
    match ScaleSpec::new(domain, kind).bind(range) {
        Scale::Continuous(c) => c,
        Scale::Band(_) => panic!("expected a continuous scale"),
    }
}

#[test]
fn band_slots_fill_the_range() {
    let scale = ScaleSpec::new(keys(&["a", "b", "c"]), ScaleKind::Band).bind(Range::new(0.0, 300.0));
    let band = scale.as_band().expect("band");
    let n = 3.0;
    let step = band.step();
    // n bands + (n - 1) inner gaps + 2 outer gaps
    let total = band.bandwidth() * n + step * 0.1 * (n - 1.0) + step * 0.1 * 2.0;
    assert_relative_eq!(total, 300.0, epsilon = 1e-9);
    assert_relative_eq!(band.position("a").unwrap(), step * 0.1, epsilon = 1e-9);
    assert_relative_eq!(band.position("c").unwrap() + band.bandwidth() + step * 0.1, 300.0, epsilon = 1e-9);
    assert!(band.position("zzz").is_none());
}

#[test]
fn band_duplicates_share_first_slot() {
    let scale = ScaleSpec::new(keys(&["a", "b", "a"]), ScaleKind::Band).bind(Range::new(0.0, 100.0));
    let band = scale.as_band().expect("band");
    assert_eq!(band.domain().len(), 2);
    assert!(band.position("a").unwrap() < band.position("b").unwrap());
}

#[test]
fn band_lookup_handles_many_keys() {
    let n = 50_000usize;
    let mut names: Vec<String> = (0..n).map(|i| format!("k{i}")).collect();
    names.push("k0".to_string());
    let band = BandScale::new(&names, Range::new(0.0, 1_000_000.0));
    assert_eq!(band.domain().len(), n);
    let mut last = f64::NEG_INFINITY;
    for name in &names[..n] {
        let x = band.position(name).expect("every key has a slot");
        assert!(x > last);
        last = x;
    }
    assert_eq!(band.position("k0"), Some(band.step() * 0.1));

    let flipped = band.with_range(Range::new(1_000_000.0, 0.0));
    assert_relative_eq!(flipped.position("k0").unwrap(), band.position(&names[n - 1]).unwrap(), epsilon = 1e-6);
}

#[test]
fn linear_maps_zero_inside_range() {
    let s = continuous(Domain::numeric(-4.0, 10.0), ScaleKind::Linear, Range::new(500.0, 0.0));
    assert_eq!(s.domain(), (-4.0, 10.0));
    assert_relative_eq!(s.apply(-4.0), 500.0, epsilon = 1e-9);
    assert_relative_eq!(s.apply(10.0), 0.0, epsilon = 1e-9);
    assert_relative_eq!(s.apply(0.0), 500.0 - 500.0 * 4.0 / 14.0, epsilon = 1e-9);
}

#[test]
fn nice_extends_to_round_values() {
    assert_eq!(nice(0.0, 11.0, 10), (0.0, 11.0));
    assert_eq!(nice(0.0, 97.0, 10), (0.0, 100.0));
    assert_eq!(nice(-3.3, 47.0, 10), (-5.0, 50.0));
    assert_eq!(nice(2.0, 2.0, 10), (2.0, 2.0));
}

#[test]
fn ticks_are_round_and_ordered() {
    assert_eq!(ticks(0.0, 10.0, 10), (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
}

#[test]
fn power_scale_is_sign_preserving() {
    let s = continuous(Domain::numeric(-10.0, 10.0), ScaleKind::Power { exponent: 2.0 }, Range::new(0.0, 200.0));
    assert_relative_eq!(s.apply(0.0), 100.0, epsilon = 1e-9);
    assert_relative_eq!(s.apply(5.0), 125.0, epsilon = 1e-9);
    assert_relative_eq!(s.apply(-5.0), 75.0, epsilon = 1e-9);
}

#[test]
fn log_domain_guard_replaces_non_positive_lower_bound() {
    let s = continuous(Domain::numeric(0.0, 500.0), ScaleKind::Log { base: 10.0 }, Range::new(300.0, 0.0));
    let (lo, hi) = s.domain();
    assert!(lo > 0.0);
    assert!(hi >= 500.0);
    // values at or below zero clamp to the lower bound
    assert_relative_eq!(s.apply(0.0), 300.0, epsilon = 1e-9);
    assert_relative_eq!(s.apply(-5.0), 300.0, epsilon = 1e-9);
    assert!(s.apply(50.0) < 300.0);
    assert!(s.ticks().iter().all(|t| *t > 0.0));
}

#[test]
fn log_domain_without_positive_bound_is_constant() {
    let s = continuous(Domain::numeric(-5.0, 0.0), ScaleKind::Log { base: 10.0 }, Range::new(300.0, 0.0));
    assert_eq!(s.apply(-5.0), 150.0);
    assert_eq!(s.apply(0.0), 150.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = continuous(Domain::numeric(0.0, 0.0), ScaleKind::Linear, Range::new(400.0, 0.0));
    assert_eq!(s.apply(0.0), 200.0);
    assert_eq!(s.apply(12.0), 200.0);
    assert_eq!(s.ticks(), vec![0.0]);
}

#[test]
fn rebinding_keeps_domain() {
    let spec = ScaleSpec::new(Domain::numeric(0.0, 11.0), ScaleKind::Linear);
    let a = spec.bind(Range::new(100.0, 0.0));
    let b = a.with_range(Range::new(80.0, 20.0));
    assert_eq!(b, spec.bind(Range::new(80.0, 20.0)));
    assert_eq!(b.as_continuous().unwrap().domain(), (0.0, 11.0));
    assert_relative_eq!(b.as_continuous().unwrap().apply(11.0), 20.0, epsilon = 1e-9);
}

#[test]
fn side_constrains_scale_kind() {
    assert_eq!(ScaleKind::for_side(Side::Top, &ScaleConfig::log(10.0)), ScaleKind::Band);
    assert_eq!(ScaleKind::for_side(Side::Left, &ScaleConfig::band()), ScaleKind::Linear);
    assert_eq!(ScaleKind::for_side(Side::Right, &ScaleConfig::log(2.0)), ScaleKind::Log { base: 2.0 });
    assert_eq!(ScaleKind::for_side(Side::Left, &ScaleConfig::default()), ScaleKind::Linear);
}
