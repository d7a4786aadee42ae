// File: crates/column-core/src/bars.rs
// Summary: Bar geometry per chart variant, and emission of columns, bars and value labels.
// Notes:
// - Geometry is computed into plain values first (`ColumnGeometry`), then
//   emitted. Nothing here measures the surface.

use tracing::debug;

use crate::axis::AxisLayout;
use crate::data::{Dataset, Record};
use crate::format::{currency, tooltip};
use crate::scale::{BandScale, ContinuousScale};
use crate::settings::ChartVariant;
use crate::surface::{Attrs, ElementId, ElementKind, Surface};
use crate::theme::{series_class, Palette};
use crate::types::VALUE_LABEL_OFFSET;

/// One series rectangle, in plot-area pixels. `height` is never negative.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Currency label drawn next to a bar, centred on `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Everything drawn for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnGeometry {
    pub key: String,
    /// Left edge of the record's band.
    pub x: f64,
    pub width: f64,
    pub bars: Vec<BarRect>,
    pub labels: Vec<ValueLabel>,
}

/// Compute bar geometry for every record. Unrecognized variants yield
/// columns without bars.
pub fn layout_bars(
    variant: &ChartVariant,
    data: &Dataset,
    band: &BandScale,
    value: &ContinuousScale,
) -> Vec<ColumnGeometry> {
    let bandwidth = band.bandwidth();
    data.records()
        .iter()
        .map(|record| {
            let x = band.position(&record.key).unwrap_or(band.range().min());
            let mut column = ColumnGeometry {
                key: record.key.clone(),
                x,
                width: bandwidth,
                bars: Vec::new(),
                labels: Vec::new(),
            };
            match variant {
                ChartVariant::Overlaid => side_by_side(&mut column, record, value, 1),
                ChartVariant::Clustered => side_by_side(&mut column, record, value, record.values.len()),
                ChartVariant::Stacked => stack(&mut column, record, value, 1.0),
                ChartVariant::Stacked100 => {
                    let total = record.total().abs();
                    // An all-zero record has no share to draw.
                    let scale = if total > 0.0 { 1.0 / total } else { 0.0 };
                    stack(&mut column, record, value, scale);
                }
                ChartVariant::Unrecognized(_) => {}
            }
            column
        })
        .collect()
}

/// Bars anchored at zero. With `slots == 1` every series shares the whole
/// band (overlaid); otherwise series `i` takes slot `i` of `slots`.
fn side_by_side(column: &mut ColumnGeometry, record: &Record, value: &ContinuousScale, slots: usize) {
    let zero = value.apply(0.0);
    let slots = slots.max(1);
    let width = column.width / slots as f64;
    for (i, v) in record.values.iter().copied().enumerate() {
        let x = if slots == 1 { column.x } else { column.x + width * i as f64 };
        let top = value.apply(v);
        column.bars.push(BarRect {
            series: i,
            x,
            y: if v > 0.0 { top } else { zero },
            width,
            height: (zero - top).abs(),
        });
        let y = if v >= 0.0 { top - VALUE_LABEL_OFFSET } else { top + VALUE_LABEL_OFFSET };
        column.labels.push(ValueLabel { series: i, x: x + width / 2.0, y, text: currency(v) });
    }
}

/// Segments between consecutive running sums, each sum multiplied by `factor`.
fn stack(column: &mut ColumnGeometry, record: &Record, value: &ContinuousScale, factor: f64) {
    let mut below = 0.0;
    for (i, through) in record.running_sums().into_iter().enumerate() {
        let a = value.apply(below * factor);
        let b = value.apply(through * factor);
        column.bars.push(BarRect {
            series: i,
            x: column.x,
            y: a.min(b),
            width: column.width,
            height: (a - b).abs(),
        });
        below = through;
    }
}

/// Emit one `g.column` per record into the plot area. Needs a band scale and
/// a value scale; without either nothing is drawn.
pub fn render_bars<S: Surface + ?Sized>(
    surface: &mut S,
    variant: &ChartVariant,
    data: &Dataset,
    layout: &AxisLayout,
    palette: &Palette,
) -> Vec<ElementId> {
    let (Some(band), Some(value)) = (layout.band_scale(), layout.value_scale()) else {
        debug!("no band or value scale; skipping columns");
        return Vec::new();
    };
    let columns = layout_bars(variant, data, band, value);
    debug!(variant = %variant, columns = columns.len(), "rendering columns");

    let classes: Vec<String> = data
        .series_names()
        .iter()
        .enumerate()
        .map(|(i, name)| series_class(name, i))
        .collect();
    let root = surface.plot_area_root();
    let canvas = surface.canvas_root();
    let vrange = value.range();

    columns
        .iter()
        .zip(data.records())
        .map(|(geom, record)| {
            let col = surface.create_child(
                ElementKind::Group,
                root,
                Attrs::class("column").set("tabindex", 0.0),
                None,
            );
            surface.bind_class_toggle(col, canvas, "bars-hovered");
            surface.create_child(ElementKind::Title, col, Attrs::new(), Some(tooltip(record, data).as_str()));
            surface.create_child(
                ElementKind::Rect,
                col,
                Attrs::new()
                    .set("x", geom.x)
                    .set("y", vrange.min())
                    .set("width", geom.width)
                    .set("height", vrange.span())
                    .set("fill", "none")
                    .set("pointer-events", "all"),
                None,
            );
            for bar in &geom.bars {
                let attrs = Attrs::class(classes[bar.series].clone())
                    .set("x", bar.x)
                    .set("y", bar.y)
                    .set("width", bar.width)
                    .set("height", bar.height)
                    .set("fill", palette.fill(bar.series));
                surface.create_child(ElementKind::Rect, col, attrs, None);
            }
            for label in &geom.labels {
                let attrs = Attrs::class(format!("column-label {}", classes[label.series]))
                    .set("x", label.x)
                    .set("y", label.y)
                    .set("text-anchor", "middle")
                    .set("fill", palette.ink(label.series));
                surface.create_child(ElementKind::Text, col, attrs, Some(label.text.as_str()));
            }
            col
        })
        .collect()
}
