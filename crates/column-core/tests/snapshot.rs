// File: crates/column-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic clustered chart to an SVG string.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use column_core::{
    render_chart, AxisSpec, ChartSettings, ChartVariant, Dataset, SceneOptions, SceneSurface, Side,
};

fn render_svg() -> String {
    let data = Dataset::from_json_str(
        r#"[
            {"month":"2020-01","turnover":1200,"profit":300},
            {"month":"2020-02","turnover":900,"profit":-150},
            {"month":"2020-03","turnover":1500,"profit":450}
        ]"#,
    )
    .expect("dataset");
    let settings = ChartSettings::new(ChartVariant::Clustered)
        .with_axis(Side::Bottom, AxisSpec::shown().labelled("Month"))
        .with_axis(Side::Left, AxisSpec::shown().labelled("Amount"))
        .with_description("Turnover and profit per month");
    let mut scene = SceneSurface::new(SceneOptions::default());
    render_chart(&mut scene, &settings, &data);
    scene.to_svg()
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render_svg(), render_svg());
}

#[test]
fn golden_clustered_chart() {
    let svg = render_svg();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("clustered_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &svg).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), svg.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(svg, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn svg_exposes_styling_hooks() {
    let svg = render_svg();
    for hook in [
        r#"class="axis x-axis bottom-axis""#,
        r#"class="axis-scale y-axis-scale left-axis-scale""#,
        r#"class="axis-label x-axis-label bottom-axis-label""#,
        r#"class="gridline hgridline""#,
        r#"class="column" tabindex="0""#,
        r#"class="turnover""#,
        r#"class="column-label profit""#,
        "<title>January 2020\nturnover: $1,200.00\nprofit: $300.00</title>",
        "<desc>Turnover and profit per month</desc>",
        ">Jan 2020</text>",
        ">$1k</text>",
    ] {
        assert!(svg.contains(hook), "missing {hook}");
    }
}
