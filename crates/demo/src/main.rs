// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV dataset and JSON chart settings and renders the column chart to SVG and PNG.

use anyhow::{Context, Result};
use column_core::{ChartSettings, Dataset, Record, SceneOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SAMPLE_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sales.csv");
const SAMPLE_SETTINGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/settings.json");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // Accept paths from CLI or fall back to the bundled sample
    let data_path = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| SAMPLE_DATA.to_string()));
    let settings_path = PathBuf::from(std::env::args().nth(2).unwrap_or_else(|| SAMPLE_SETTINGS.to_string()));

    let data = load_csv(&data_path).with_context(|| format!("failed to load CSV '{}'", data_path.display()))?;
    info!(
        records = data.len(),
        series = ?data.series_names(),
        "loaded {}",
        data_path.display()
    );

    let json = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("failed to read settings '{}'", settings_path.display()))?;
    let settings = ChartSettings::from_json_str(&json)
        .with_context(|| format!("invalid settings '{}'", settings_path.display()))?;
    if let column_core::ChartVariant::Unrecognized(name) = &settings.variant {
        warn!(variant = %name, "unknown chart variant; only columns will be drawn");
    }

    let scene = column_render_skia::render_scene(&settings, &data, SceneOptions::default());

    let out_svg = out_name_for(&data_path, "svg");
    std::fs::write(&out_svg, scene.to_svg()).with_context(|| format!("failed to write '{}'", out_svg.display()))?;
    info!("wrote {}", out_svg.display());

    let out_png = out_svg.with_extension("png");
    let png = column_render_skia::rasterize_png(&scene)?;
    std::fs::write(&out_png, png).with_context(|| format!("failed to write '{}'", out_png.display()))?;
    info!("wrote {}", out_png.display());

    Ok(())
}

/// Produce output file name like target/out/column_<stem>.<ext>
fn out_name_for(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("column_{stem}.{ext}"));
    out
}

/// Load a CSV whose first column is the category key and whose remaining
/// columns are numeric series.
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let mut fields = headers.iter().map(str::to_string);
    let category = fields.next().context("CSV has no columns")?;
    let series: Vec<String> = fields.collect();

    let mut records = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let key = rec.get(0).unwrap_or_default().to_string();
        let values = rec
            .iter()
            .skip(1)
            .zip(&series)
            .map(|(cell, name)| {
                cell.parse::<f64>()
                    .with_context(|| format!("row {} column '{}': '{}' is not a number", row + 1, name, cell))
            })
            .collect::<Result<Vec<f64>>>()?;
        records.push(Record::new(key, values));
    }
    Ok(Dataset::new(category, series, records)?)
}
