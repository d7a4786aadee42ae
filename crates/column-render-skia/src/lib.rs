// File: crates/column-render-skia/src/lib.rs
// Summary: Skia integration crate; text metrics for layout and PNG output for rendered scenes.

pub mod raster;
pub mod text;

use anyhow::Result;
use column_core::{render_chart, ChartSettings, Dataset, SceneOptions, SceneSurface};

pub use raster::{parse_color, rasterize_png};
pub use text::SkiaTextMetrics;

/// Lay out the chart with Skia-measured text and return it as a scene.
pub fn render_scene(settings: &ChartSettings, data: &Dataset, opts: SceneOptions) -> SceneSurface<SkiaTextMetrics> {
    let mut scene = SceneSurface::from_settings(settings, opts, SkiaTextMetrics::new());
    render_chart(&mut scene, settings, data);
    scene
}

/// [`render_scene`] followed by [`rasterize_png`].
pub fn render_png(settings: &ChartSettings, data: &Dataset, opts: SceneOptions) -> Result<Vec<u8>> {
    rasterize_png(&render_scene(settings, data, opts))
}
