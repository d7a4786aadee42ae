// File: crates/column-examples/src/bin/columns.rs
// Summary: Renders one small dataset in every column variant to SVG files.

use anyhow::Result;
use column_core::{
    render_chart, AxisSpec, ChartSettings, ChartVariant, Dataset, Record, ScaleConfig, SceneOptions, SceneSurface,
    Side,
};

fn main() -> Result<()> {
    let data = Dataset::new(
        "quarter",
        vec!["north".into(), "south".into(), "west".into()],
        vec![
            Record::new("2024-01", vec![420.0, 310.0, 120.0]),
            Record::new("2024-04", vec![510.0, -80.0, 200.0]),
            Record::new("2024-07", vec![380.0, 290.0, 260.0]),
            Record::new("2024-10", vec![600.0, 330.0, 90.0]),
        ],
    )?;

    let out_dir = std::path::PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir)?;

    for variant in [
        ChartVariant::Overlaid,
        ChartVariant::Clustered,
        ChartVariant::Stacked,
        ChartVariant::Stacked100,
    ] {
        let settings = ChartSettings::new(variant.clone())
            .with_axis(Side::Bottom, AxisSpec::shown().labelled("Quarter"))
            .with_axis(Side::Left, AxisSpec::shown().labelled("Sales"))
            .with_description(format!("Regional sales, {variant}"));
        let mut scene = SceneSurface::new(SceneOptions::default());
        render_chart(&mut scene, &settings, &data);

        let out = out_dir.join(format!("example_columns_{variant}.svg"));
        std::fs::write(&out, scene.to_svg())?;
        println!("Wrote {}", out.display());
    }

    // Power scale on the right with a top category axis
    let settings = ChartSettings::new(ChartVariant::Clustered)
        .with_axis(Side::Top, AxisSpec::shown().labelled("Quarter"))
        .with_axis(Side::Right, AxisSpec::shown().labelled("Sales (sqrt)").with_scale(ScaleConfig::power(0.5)));
    let mut scene = SceneSurface::new(SceneOptions::default());
    render_chart(&mut scene, &settings, &data);
    let out = out_dir.join("example_columns_top_right.svg");
    std::fs::write(&out, scene.to_svg())?;
    println!("Wrote {}", out.display());

    Ok(())
}
