// File: crates/column-render-skia/tests/raster.rs
// Purpose: PNG rasterization of rendered scenes and Skia-backed text measurement.

use column_core::{AxisSpec, ChartSettings, ChartVariant, Dataset, Insets, SceneOptions, Side, Size, TextMetrics};
use column_render_skia::{parse_color, render_png, render_scene, SkiaTextMetrics};

fn data() -> Dataset {
    Dataset::from_json_str(
        r#"[{"month":"2020-01","turnover":10,"profit":-4},{"month":"2020-02","turnover":6,"profit":5}]"#,
    )
    .expect("dataset")
}

fn settings() -> ChartSettings {
    ChartSettings::new(ChartVariant::Overlaid)
        .with_axis(Side::Bottom, AxisSpec::shown().labelled("Month"))
        .with_axis(Side::Left, AxisSpec::shown().labelled("Amount"))
}

#[test]
fn png_has_requested_size() {
    let opts = SceneOptions { width: 320.0, height: 200.0, insets: Insets::uniform(8), ..SceneOptions::default() };
    let bytes = render_png(&settings(), &data(), opts).expect("render png");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 200);
}

#[test]
fn bars_are_painted_in_series_colours() {
    let scene = render_scene(&settings(), &data(), SceneOptions::default());
    let bytes = column_render_skia::rasterize_png(&scene).expect("rasterize");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    // #61B0DC somewhere in the plot
    let has_primary = img.pixels().any(|p| p.0 == [0x61, 0xB0, 0xDC, 0xFF]);
    assert!(has_primary, "no pixel in the first series colour");
}

#[test]
fn text_measurement_is_monotonic() {
    let m = SkiaTextMetrics::new();
    assert_eq!(m.measure("", 10.0), Size::ZERO);
    let short = m.measure("$1", 10.0);
    let long = m.measure("$1,000,000", 10.0);
    assert!(short.width <= long.width);
    assert!(m.ascent(10.0) >= 0.0);
}

#[test]
fn colours_parse_from_svg_values() {
    assert_eq!(parse_color("#61B0DC"), Some(skia_safe::Color::from_rgb(0x61, 0xB0, 0xDC)));
    assert_eq!(parse_color("#fff"), Some(skia_safe::Color::WHITE));
    assert_eq!(parse_color("green"), Some(skia_safe::Color::from_rgb(0, 128, 0)));
    assert_eq!(parse_color("currentColor"), Some(skia_safe::Color::BLACK));
    assert_eq!(parse_color("none"), None);
    assert_eq!(parse_color("#12"), None);
}
