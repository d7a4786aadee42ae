// File: crates/column-core/src/text.rs
// Summary: Text measurement seam used by surfaces to size tick and label text.

use crate::geometry::Size;

/// Measures laid-out text. Implementations must be deterministic for a given
/// font setup.
pub trait TextMetrics {
    /// Extent of `text` rendered at `font_size` pixels. Multi-line text
    /// reports the longest line and the stacked line height.
    fn measure(&self, text: &str, font_size: f64) -> Size;

    /// Distance from the top of the line box to the baseline.
    fn ascent(&self, font_size: f64) -> f64 {
        font_size * 0.8
    }
}

/// Fixed-advance approximation: every character is `advance` ems wide and
/// every line `line_height` ems tall. Good enough for headless layout and
/// stable across platforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMetrics {
    pub advance: f64,
    pub line_height: f64,
}

impl Default for ApproxTextMetrics {
    fn default() -> Self {
        Self { advance: 0.6, line_height: 1.2 }
    }
}

impl TextMetrics for ApproxTextMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let lines = text.lines().count().max(1);
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Size::new(
            longest as f64 * self.advance * font_size,
            lines as f64 * self.line_height * font_size,
        )
    }

    fn ascent(&self, font_size: f64) -> f64 {
        font_size * self.line_height * 0.8
    }
}

impl<T: TextMetrics + ?Sized> TextMetrics for Box<T> {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        (**self).measure(text, font_size)
    }

    fn ascent(&self, font_size: f64) -> f64 {
        (**self).ascent(font_size)
    }
}
