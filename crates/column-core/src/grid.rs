// File: crates/column-core/src/grid.rs
// Summary: Horizontal gridlines at the value scale's ticks, trimmed where an axis line already sits.

use tracing::debug;

use crate::axis::AxisLayout;
use crate::geometry::PathData;
use crate::surface::{Attrs, ElementId, ElementKind, Surface};
use crate::types::Side;

/// Pixel rows gridlines are drawn at, in tick order.
pub fn gridline_rows(layout: &AxisLayout) -> Vec<f64> {
    let Some(scale) = layout.value_scale() else {
        return Vec::new();
    };
    let mut ticks = scale.ticks();
    // The lowest tick coincides with the bottom axis line, the highest with the top one.
    if layout.has(Side::Bottom) && !ticks.is_empty() {
        ticks.remove(0);
    }
    if layout.has(Side::Top) {
        ticks.pop();
    }
    ticks.into_iter().map(|t| scale.apply(t)).collect()
}

/// Append one `gridline hgridline` path per row to the plot area.
pub fn render_gridlines<S: Surface + ?Sized>(surface: &mut S, layout: &AxisLayout) -> Vec<ElementId> {
    let rows = gridline_rows(layout);
    debug!(count = rows.len(), "rendering gridlines");
    let root = surface.plot_area_root();
    let (x0, x1) = (layout.horizontal.start, layout.horizontal.end);
    rows.into_iter()
        .map(|y| {
            let d = PathData::new().move_to(x0, y).h(x1);
            surface.create_child(ElementKind::Path, root, Attrs::class("gridline hgridline").set("d", d), None)
        })
        .collect()
}
