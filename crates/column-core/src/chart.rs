// File: crates/column-core/src/chart.rs
// Summary: Chart entry points; domains -> axis layout -> gridlines -> columns on a Surface.

use tracing::debug;

use crate::axis::{layout_axes, AxisLayout};
use crate::bars::render_bars;
use crate::data::Dataset;
use crate::domain::resolve_all;
use crate::grid::render_gridlines;
use crate::settings::ChartSettings;
use crate::surface::Surface;
use crate::theme::Palette;

/// Settings plus data, ready to render onto any [`Surface`].
#[derive(Clone, Debug)]
pub struct Chart {
    pub settings: ChartSettings,
    pub data: Dataset,
    pub palette: Palette,
}

impl Chart {
    pub fn new(settings: ChartSettings, data: Dataset) -> Self {
        Self { settings, data, palette: Palette::default() }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Render axes, gridlines and columns; returns the final layout.
    ///
    /// Elements are appended to the surface. Rendering twice onto the same
    /// surface draws the chart twice; clear the target first to redraw.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> AxisLayout {
        draw(surface, &self.settings, &self.data, &self.palette)
    }
}

/// Render `data` with `settings` onto `surface`.
///
/// The surface is appended to, never cleared; callers that redraw must clear
/// the target themselves.
pub fn render_chart<S: Surface + ?Sized>(surface: &mut S, settings: &ChartSettings, data: &Dataset) {
    render_chart_with_layout(surface, settings, data);
}

/// [`render_chart`], returning the axis layout it settled on.
pub fn render_chart_with_layout<S: Surface + ?Sized>(
    surface: &mut S,
    settings: &ChartSettings,
    data: &Dataset,
) -> AxisLayout {
    draw(surface, settings, data, &Palette::default())
}

fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    settings: &ChartSettings,
    data: &Dataset,
    palette: &Palette,
) -> AxisLayout {
    debug!(
        variant = %settings.variant,
        records = data.len(),
        series = data.series_count(),
        "rendering chart"
    );
    let domains = resolve_all(data, settings);
    let layout = layout_axes(surface, settings, &domains);
    render_gridlines(surface, &layout);
    render_bars(surface, &settings.variant, data, &layout, palette);
    layout
}
