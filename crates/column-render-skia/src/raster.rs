// File: crates/column-render-skia/src/raster.rs
// Summary: Paint a rendered SceneSurface onto a Skia CPU raster surface and encode it as PNG.
// Notes:
// - Only what the column engine emits is supported: groups, rects, polyline
//   paths and text, with translate/rotate transforms.

use anyhow::Result;
use column_core::surface::{AttrValue, ElementId, ElementKind, Surface};
use column_core::{PathData, SceneSurface, Transform};
use skia_safe as skia;
use tracing::debug;

use crate::text::SkiaTextMetrics;

const INK: skia::Color = skia::Color::BLACK;
const GRID: skia::Color = skia::Color::from_argb(255, 224, 224, 228);

/// Rasterize `scene` at its configured size and return PNG bytes.
pub fn rasterize_png(scene: &SceneSurface<SkiaTextMetrics>) -> Result<Vec<u8>> {
    let opts = scene.options();
    let (w, h) = (opts.width.round() as i32, opts.height.round() as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::WHITE);
    paint_node(canvas, scene, scene.canvas_root());

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(width = w, height = h, bytes = data.as_bytes().len(), "rasterized scene");
    Ok(data.as_bytes().to_vec())
}

fn paint_node(canvas: &skia::Canvas, scene: &SceneSurface<SkiaTextMetrics>, id: ElementId) {
    let node = scene.node(id);
    canvas.save();
    apply_transform(canvas, &node.transform());
    match node.kind() {
        ElementKind::Rect => {
            if let Some(color) = fill_of(scene, id) {
                let rect = skia::Rect::from_xywh(
                    node.num("x") as f32,
                    node.num("y") as f32,
                    node.num("width") as f32,
                    node.num("height") as f32,
                );
                let mut paint = skia::Paint::default();
                paint.set_color(color);
                paint.set_anti_alias(true);
                canvas.draw_rect(rect, &paint);
            }
        }
        ElementKind::Path => {
            if let Some(AttrValue::Path(d)) = node.attr("d") {
                let color = match node.attr("stroke").and_then(AttrValue::as_str) {
                    Some(s) => parse_color(s).unwrap_or(INK),
                    None if node.has_class("gridline") => GRID,
                    None => INK,
                };
                let mut paint = skia::Paint::default();
                paint.set_color(color);
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(1.0);
                canvas.draw_path(&to_skia_path(d), &paint);
            }
        }
        ElementKind::Text => {
            if let (Some(text), Some(color)) = (node.text(), fill_of(scene, id)) {
                let metrics = scene.metrics();
                let fs = scene.font_size(id);
                let width = metrics.layout(text, fs as f32, color).longest_line() as f64;
                let shift = match scene.inherited(id, "text-anchor").and_then(AttrValue::as_str) {
                    Some("middle") => width / 2.0,
                    Some("end") => width,
                    _ => 0.0,
                };
                let dy = match node.attr("dy") {
                    Some(AttrValue::Em(em)) => em * fs,
                    Some(AttrValue::Num(px)) => *px,
                    _ => 0.0,
                };
                let top = node.num("y") + dy - column_core::TextMetrics::ascent(metrics, fs);
                metrics.draw(canvas, text, (node.num("x") - shift) as f32, top as f32, fs as f32, color);
            }
        }
        ElementKind::Group | ElementKind::Title => {}
    }
    for &child in node.children() {
        paint_node(canvas, scene, child);
    }
    canvas.restore();
}

fn apply_transform(canvas: &skia::Canvas, t: &Transform) {
    if t.tx != 0.0 || t.ty != 0.0 {
        canvas.translate((t.tx as f32, t.ty as f32));
    }
    if t.rotate_deg != 0.0 {
        canvas.rotate(t.rotate_deg as f32, None);
    }
}

fn to_skia_path(d: &PathData) -> skia::Path {
    let mut path = skia::Path::new();
    for (i, (x, y)) in d.points().into_iter().enumerate() {
        if i == 0 {
            path.move_to((x as f32, y as f32));
        } else {
            path.line_to((x as f32, y as f32));
        }
    }
    path
}

/// Effective fill: the nearest `fill` up the tree, black when unset, `None`
/// for `fill="none"`.
fn fill_of(scene: &SceneSurface<SkiaTextMetrics>, id: ElementId) -> Option<skia::Color> {
    match scene.node(id).attr("fill").and_then(AttrValue::as_str) {
        Some(own) => parse_color(own),
        None => scene.inherited(id, "fill").and_then(AttrValue::as_str).map_or(Some(INK), parse_color),
    }
}

/// `#rrggbb`, `#rgb`, a few CSS names, `currentColor` (black). `none` and
/// anything unknown yield `None`.
pub fn parse_color(s: &str) -> Option<skia::Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        let expand = |c: u8| c * 17;
        let digits: Vec<u8> = hex.chars().map(|c| c.to_digit(16).map(|d| d as u8)).collect::<Option<_>>()?;
        return match digits.as_slice() {
            [r, g, b] => Some(skia::Color::from_rgb(expand(*r), expand(*g), expand(*b))),
            [r1, r2, g1, g2, b1, b2] => Some(skia::Color::from_rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
            _ => None,
        };
    }
    match s.to_ascii_lowercase().as_str() {
        "currentcolor" | "black" => Some(INK),
        "white" => Some(skia::Color::WHITE),
        "green" => Some(skia::Color::from_rgb(0, 128, 0)),
        "grey" | "gray" => Some(skia::Color::from_rgb(128, 128, 128)),
        "red" => Some(skia::Color::from_rgb(255, 0, 0)),
        "blue" => Some(skia::Color::from_rgb(0, 0, 255)),
        _ => None,
    }
}
