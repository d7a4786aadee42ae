// File: crates/column-core/tests/settings.rs
// Purpose: Settings deserialization, aliases, defaults, and builders.

use column_core::{AxisSpec, ChartSettings, ChartVariant, ScaleConfig, ScaleKindName, Side};

#[test]
fn json_settings_with_aliases() {
    let json = r#"{
        "type": "stacked100",
        "description": "Share of turnover",
        "background": true,
        "axes": {
            "bottom": { "display": true, "label": { "display": true, "text": "Month" } },
            "left": { "display": true, "scale": { "type": "logarithmic", "base": 2 } },
            "right": { "display": false }
        }
    }"#;
    let s = ChartSettings::from_json_str(json).expect("parse settings");
    assert_eq!(s.variant, ChartVariant::Stacked100);
    assert!(s.background);
    assert!(s.axes.is_displayed(Side::Bottom));
    assert!(!s.axes.is_displayed(Side::Top));
    assert!(s.axes.get(Side::Bottom).label.is_visible());
    assert_eq!(s.axes.left.scale.kind, ScaleKindName::Log);
    assert_eq!(s.axes.left.scale.base, Some(2.0));
}

#[test]
fn unknown_variant_is_preserved() {
    let s = ChartSettings::from_json_str(r#"{"variant":"Waterfall"}"#).unwrap();
    assert_eq!(s.variant, ChartVariant::Unrecognized("Waterfall".into()));
    assert_eq!(s.variant.to_string(), "Waterfall");
    let s = ChartSettings::from_json_str(r#"{"variant":"Clustered"}"#).unwrap();
    assert_eq!(s.variant, ChartVariant::Clustered);
}

#[test]
fn defaults_are_empty_overlaid() {
    let s = ChartSettings::from_json_str("{}").unwrap();
    assert_eq!(s, ChartSettings::default());
    assert_eq!(s.variant, ChartVariant::Overlaid);
    assert!(Side::ALL.iter().all(|side| !s.axes.is_displayed(*side)));
}

#[test]
fn settings_round_trip_through_json() {
    let s = ChartSettings::new(ChartVariant::Stacked)
        .with_axis(Side::Top, AxisSpec::shown().labelled("Quarter"))
        .with_axis(Side::Right, AxisSpec::shown().with_scale(ScaleConfig::power(0.5)));
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains(r#""variant":"stacked""#));
    assert_eq!(ChartSettings::from_json_str(&json).unwrap(), s);
}

#[test]
fn invalid_json_is_an_error() {
    assert!(ChartSettings::from_json_str(r#"{"axes": 3}"#).is_err());
}
