// File: crates/column-render-skia/src/text.rs
// Summary: Skia textlayout shaper; measures text for the layout engine and paints it onto a canvas.

use column_core::{Size, TextMetrics};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

const FAMILIES: [&str; 6] = ["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Text measurement backed by the system font manager.
pub struct SkiaTextMetrics {
    fonts: FontCollection,
}

impl SkiaTextMetrics {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&FAMILIES);
        ts
    }

    /// Shape `text` at `size` pixels; lines break only at `\n`.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` with its line box's top-left corner at `(x, top)`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, top: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, top));
    }
}

impl Default for SkiaTextMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for SkiaTextMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let p = self.layout(text, font_size as f32, skia::Color::TRANSPARENT);
        Size::new(f64::from(p.longest_line()), f64::from(p.height()))
    }

    fn ascent(&self, font_size: f64) -> f64 {
        let p = self.layout("Hg", font_size as f32, skia::Color::TRANSPARENT);
        f64::from(p.alphabetic_baseline())
    }
}
