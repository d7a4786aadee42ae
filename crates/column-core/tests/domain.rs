// File: crates/column-core/tests/domain.rs
// Purpose: Domain resolution per variant, zero anchoring, and axis selection.

use column_core::domain::{resolve_all, resolve_numeric};
use column_core::{AxisSpec, ChartSettings, ChartVariant, Dataset, Domain, Record, Side};
use proptest::prelude::*;

fn sample() -> Dataset {
    Dataset::new(
        "key",
        vec!["a".into(), "b".into()],
        vec![Record::new("Jan", vec![10.0, -4.0]), Record::new("Feb", vec![6.0, 5.0])],
    )
    .expect("valid dataset")
}

fn single(values: &[f64]) -> Dataset {
    let records = values
        .iter()
        .enumerate()
        .map(|(i, v)| Record::new(format!("k{i}"), vec![*v]))
        .collect();
    Dataset::new("key", vec!["v".into()], records).expect("valid dataset")
}

#[test]
fn overlaid_and_clustered_use_raw_extent() {
    let data = sample();
    assert_eq!(resolve_numeric(&data, &ChartVariant::Overlaid), Domain::numeric(-4.0, 10.0));
    assert_eq!(resolve_numeric(&data, &ChartVariant::Clustered), Domain::numeric(-4.0, 10.0));
}

#[test]
fn stacked_uses_running_sums() {
    // Jan: 10, 6   Feb: 6, 11
    assert_eq!(resolve_numeric(&sample(), &ChartVariant::Stacked), Domain::numeric(0.0, 11.0));
}

#[test]
fn stacked_bounds_deepest_downward_stack() {
    let data = Dataset::new(
        "key",
        vec!["a".into(), "b".into()],
        vec![Record::new("Jan", vec![-3.0, -5.0]), Record::new("Feb", vec![2.0, 1.0])],
    )
    .expect("valid dataset");
    assert_eq!(resolve_numeric(&data, &ChartVariant::Stacked), Domain::numeric(-8.0, 3.0));
}

#[test]
fn stacked100_follows_total_sign() {
    assert_eq!(resolve_numeric(&single(&[1.0, 2.0]), &ChartVariant::Stacked100), Domain::numeric(0.0, 1.0));
    assert_eq!(resolve_numeric(&single(&[-1.0, -2.0]), &ChartVariant::Stacked100), Domain::numeric(-1.0, 0.0));
    assert_eq!(resolve_numeric(&single(&[-1.0, 2.0]), &ChartVariant::Stacked100), Domain::numeric(-1.0, 1.0));
    assert_eq!(resolve_numeric(&single(&[0.0, 0.0]), &ChartVariant::Stacked100), Domain::numeric(0.0, 0.0));
}

#[test]
fn positive_data_is_floored_at_zero() {
    assert_eq!(resolve_numeric(&single(&[3.0, 7.0]), &ChartVariant::Overlaid), Domain::numeric(0.0, 7.0));
    assert_eq!(resolve_numeric(&single(&[-3.0, -7.0]), &ChartVariant::Overlaid), Domain::numeric(-7.0, 0.0));
}

#[test]
fn only_displayed_axes_get_domains() {
    let settings = ChartSettings::new(ChartVariant::Overlaid)
        .with_axis(Side::Bottom, AxisSpec::shown())
        .with_axis(Side::Left, AxisSpec::shown());
    let domains = resolve_all(&sample(), &settings);
    assert!(domains.get(Side::Top).is_none());
    assert!(domains.get(Side::Right).is_none());
    assert_eq!(
        domains.get(Side::Bottom).as_ref().and_then(Domain::as_categories),
        Some(&["Jan".to_string(), "Feb".to_string()][..])
    );
    assert_eq!(domains.get(Side::Left).as_ref().and_then(Domain::as_numeric), Some((-4.0, 10.0)));
}

#[test]
fn categories_keep_duplicates_in_order() {
    let data = Dataset::new(
        "key",
        vec!["v".into()],
        vec![Record::new("b", vec![1.0]), Record::new("a", vec![1.0]), Record::new("b", vec![2.0])],
    )
    .expect("valid dataset");
    let settings = ChartSettings::new(ChartVariant::Overlaid).with_axis(Side::Top, AxisSpec::shown());
    let domains = resolve_all(&data, &settings);
    let keys = domains.get(Side::Top).as_ref().and_then(Domain::as_categories).map(<[String]>::to_vec);
    assert_eq!(keys, Some(vec!["b".to_string(), "a".to_string(), "b".to_string()]));
}

fn variant() -> impl Strategy<Value = ChartVariant> {
    prop_oneof![
        Just(ChartVariant::Overlaid),
        Just(ChartVariant::Clustered),
        Just(ChartVariant::Stacked),
        Just(ChartVariant::Stacked100),
    ]
}

proptest! {
    #[test]
    fn numeric_domain_contains_zero(
        rows in prop::collection::vec(prop::collection::vec(-1.0e6f64..1.0e6, 3), 1..12),
        variant in variant(),
    ) {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| Record::new(format!("r{i}"), values))
            .collect();
        let data = Dataset::new("key", vec!["a".into(), "b".into(), "c".into()], records).unwrap();
        let (min, max) = resolve_numeric(&data, &variant).as_numeric().unwrap();
        prop_assert!(min <= 0.0);
        prop_assert!(0.0 <= max);
    }
}
