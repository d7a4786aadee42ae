// File: crates/column-core/src/axis.rs
// Summary: Axis layout engine; renders, measures and positions up to four axes and fixes the plot ranges.
// Notes:
// - Tick and label sizes depend on the plot ranges and the ranges depend on
//   those sizes. The loop is resolved in two phases: a provisional render
//   against the full plot area, then a final render against the ranges
//   corrected by the measured footprints.
// - Every step is one procedure over `Side`; absent axes are skipped, never
//   treated as zero-sized.

use tracing::debug;

use crate::domain::Domain;
use crate::format::{month_year, NumberFormat};
use crate::geometry::{PathData, Size, Transform};
use crate::scale::{BandScale, ContinuousScale, Range, Scale, ScaleKind, ScaleSpec};
use crate::settings::ChartSettings;
use crate::surface::{AttrValue, Attrs, ElementId, ElementKind, Surface};
use crate::types::{Side, Sides, FONT_SIZE, GUTTER, TICK_PADDING, TICK_SIZE};

/// How tick values are turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Category keys as `%b %Y`.
    MonthYear,
    Number(NumberFormat),
}

impl TickFormat {
    pub fn for_side(side: Side, settings: &ChartSettings) -> Self {
        if side.is_horizontal() {
            TickFormat::MonthYear
        } else {
            TickFormat::Number(NumberFormat::for_variant(&settings.variant))
        }
    }
}

/// Sizes read back from the surface during the provisional pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisMeasure {
    /// Whole axis group, after the tick group was self-positioned.
    pub axis: Size,
    pub ticks: Size,
    /// Zero when the axis has no label.
    pub label: Size,
}

/// An axis after layout: its final scale plus the elements and measurements
/// that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct LaidOutAxis {
    pub side: Side,
    pub spec: ScaleSpec,
    pub scale: Scale,
    pub measure: AxisMeasure,
    pub group: ElementId,
    pub ticks: ElementId,
    pub label: Option<ElementId>,
}

/// Result of the axis layout: final plot extents and every active axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// Plot-area size the layout started from.
    pub size: Size,
    /// Final horizontal extent (`start` = left edge of the bands).
    pub horizontal: Range,
    /// Final vertical extent (`start` = baseline pixel of the lowest value).
    pub vertical: Range,
    axes: Sides<Option<LaidOutAxis>>,
}

impl AxisLayout {
    pub fn axis(&self, side: Side) -> Option<&LaidOutAxis> {
        self.axes.get(side).as_ref()
    }

    pub fn has(&self, side: Side) -> bool {
        self.axes.has(side)
    }

    pub fn axes(&self) -> impl Iterator<Item = &LaidOutAxis> + '_ {
        self.axes.present().map(|(_, a)| a)
    }

    /// Category scale bars are placed on: top when present, else bottom.
    pub fn band_scale(&self) -> Option<&BandScale> {
        [Side::Top, Side::Bottom]
            .into_iter()
            .find_map(|s| self.axis(s).and_then(|a| a.scale.as_band()))
    }

    /// Value scale bars and gridlines use: right when present, else left.
    pub fn value_scale(&self) -> Option<&ContinuousScale> {
        [Side::Right, Side::Left]
            .into_iter()
            .find_map(|s| self.axis(s).and_then(|a| a.scale.as_continuous()))
    }
}

/// Lay out and render every axis that has a domain.
pub fn layout_axes<S: Surface + ?Sized>(
    surface: &mut S,
    settings: &ChartSettings,
    domains: &Sides<Option<Domain>>,
) -> AxisLayout {
    let size = surface.plot_area_size();
    let full_horizontal = Range::new(0.0, size.width);
    let full_vertical = Range::new(size.height, 0.0);
    let root = surface.plot_area_root();

    // Provisional ranges, scales and tick groups.
    let mut axes: Sides<Option<LaidOutAxis>> = Sides::default();
    for side in Side::ALL {
        let Some(domain) = domains.get(side) else { continue };
        let kind = ScaleKind::for_side(side, &settings.axes.get(side).scale);
        let spec = ScaleSpec::new(domain.clone(), kind);
        let range = if side.is_horizontal() { full_horizontal } else { full_vertical };
        let scale = spec.bind(range);

        let dim = side.dimension();
        let name = side.name();
        let group = surface.create_child(
            ElementKind::Group,
            root,
            Attrs::class(format!("axis {dim}-axis {name}-axis")),
            None,
        );
        let ticks = surface.create_child(
            ElementKind::Group,
            group,
            tick_group_attrs(side),
            None,
        );
        render_ticks(surface, ticks, side, &scale, TickFormat::for_side(side, settings));
        axes.set(
            side,
            Some(LaidOutAxis {
                side,
                spec,
                scale,
                measure: AxisMeasure::default(),
                group,
                ticks,
                label: None,
            }),
        );
    }

    for side in Side::ALL {
        if let Some(axis) = axes.get_mut(side) {
            axis.measure.ticks = surface.measure_bounding_box(axis.ticks);
        }
    }

    // Labels, placed clear of the provisional ticks.
    for side in Side::ALL {
        let Some(axis) = axes.get_mut(side) else { continue };
        let spec = &settings.axes.get(side).label;
        if !spec.is_visible() {
            continue;
        }
        let transform = if side.is_horizontal() {
            Transform::translate(0.0, axis.measure.ticks.height + GUTTER)
        } else {
            Transform::rotate(270.0)
        };
        let dim = side.dimension();
        let name = side.name();
        let attrs = Attrs::class(format!("axis-label {dim}-axis-label {name}-axis-label"))
            .set("dy", AttrValue::Em(1.0))
            .set("text-anchor", "middle")
            .set("transform", transform);
        axis.label = Some(surface.create_child(ElementKind::Text, axis.group, attrs, Some(spec.text.as_str())));
    }

    for side in Side::ALL {
        if let Some(axis) = axes.get_mut(side) {
            if let Some(label) = axis.label {
                axis.measure.label = surface.measure_bounding_box(label);
            }
        }
    }

    // Left and top ticks move inward past their own label.
    for side in Side::ALL {
        let Some(axis) = axes.get(side) else { continue };
        let m = axis.measure;
        let offset = match side {
            Side::Left => Transform::translate(m.label.height + m.ticks.width + GUTTER, 0.0),
            Side::Top => Transform::translate(0.0, m.label.height + m.ticks.height + GUTTER),
            Side::Bottom | Side::Right => continue,
        };
        surface.set_attribute(axis.ticks, "transform", AttrValue::Transform(offset));
    }

    for side in Side::ALL {
        if let Some(axis) = axes.get_mut(side) {
            axis.measure.axis = surface.measure_bounding_box(axis.group);
            debug!(
                side = side.name(),
                axis_w = axis.measure.axis.width,
                axis_h = axis.measure.axis.height,
                ticks_w = axis.measure.ticks.width,
                ticks_h = axis.measure.ticks.height,
                label_h = axis.measure.label.height,
                "measured axis"
            );
        }
    }

    // Each present axis shrinks the extent orthogonal to it.
    let mut horizontal = full_horizontal;
    let mut vertical = full_vertical;
    for (side, axis) in axes.present() {
        let m = axis.measure;
        match side {
            Side::Bottom => vertical.start = size.height - m.axis.height,
            Side::Left => horizontal.start = m.axis.width,
            Side::Top => vertical.end = m.label.height + m.ticks.height + GUTTER,
            Side::Right => horizontal.end = size.width - m.label.height - m.ticks.width - GUTTER,
        }
    }
    debug!(
        x0 = horizontal.start,
        x1 = horizontal.end,
        y0 = vertical.start,
        y1 = vertical.end,
        "corrected plot ranges"
    );

    // Final pass against the corrected ranges.
    for side in Side::ALL {
        let Some(axis) = axes.get_mut(side) else { continue };
        let range = if side.is_horizontal() { horizontal } else { vertical };
        axis.scale = axis.spec.bind(range);

        surface.clear_children(axis.ticks);
        render_ticks(surface, axis.ticks, side, &axis.scale, TickFormat::for_side(side, settings));

        let m = axis.measure;
        if let Some(label) = axis.label {
            let placed = match side {
                Side::Bottom => Transform::translate(horizontal.mid(), m.ticks.height),
                Side::Top => Transform::translate(horizontal.mid(), 0.0),
                Side::Left => Transform::translate(0.0, vertical.mid()).then_rotate(270.0),
                Side::Right => Transform::translate(m.ticks.width, vertical.mid()).then_rotate(270.0),
            };
            surface.set_attribute(label, "transform", AttrValue::Transform(placed));
        }
        match side {
            Side::Bottom => surface.set_attribute(
                axis.group,
                "transform",
                AttrValue::Transform(Transform::translate(0.0, vertical.start)),
            ),
            Side::Right => surface.set_attribute(
                axis.group,
                "transform",
                AttrValue::Transform(Transform::translate(horizontal.end, 0.0)),
            ),
            Side::Top | Side::Left => {}
        }
    }

    AxisLayout { size, horizontal, vertical, axes }
}

fn tick_group_attrs(side: Side) -> Attrs {
    let dim = side.dimension();
    let name = side.name();
    let anchor = match side {
        Side::Right => "start",
        Side::Left => "end",
        Side::Top | Side::Bottom => "middle",
    };
    Attrs::class(format!("axis-scale {dim}-axis-scale {name}-axis-scale"))
        .set("fill", "none")
        .set("font-size", FONT_SIZE)
        .set("font-family", "sans-serif")
        .set("text-anchor", anchor)
}

/// Draw the domain line and one tick (mark + text) per tick value into
/// `group`, d3-axis style.
pub fn render_ticks<S: Surface + ?Sized>(
    surface: &mut S,
    group: ElementId,
    side: Side,
    scale: &Scale,
    format: TickFormat,
) {
    let k = side.outward_sign();
    let outer = k * TICK_SIZE;
    let range = scale.range();
    let domain = if side.is_horizontal() {
        PathData::new().move_to(range.start, outer).v(0.0).h(range.end).v(outer)
    } else {
        PathData::new().move_to(outer, range.start).h(0.0).v(range.end).h(outer)
    };
    surface.create_child(
        ElementKind::Path,
        group,
        Attrs::class("domain").set("stroke", "currentColor").set("d", domain),
        None,
    );

    for (pos, text) in tick_entries(scale, format) {
        let at = if side.is_horizontal() {
            Transform::translate(pos, 0.0)
        } else {
            Transform::translate(0.0, pos)
        };
        let tick = surface.create_child(
            ElementKind::Group,
            group,
            Attrs::class("tick").set("opacity", 1.0).set("transform", at),
            None,
        );
        let mark = if side.is_horizontal() {
            PathData::new().move_to(0.0, 0.0).v(outer)
        } else {
            PathData::new().move_to(0.0, 0.0).h(outer)
        };
        surface.create_child(
            ElementKind::Path,
            tick,
            Attrs::new().set("stroke", "currentColor").set("d", mark),
            None,
        );
        let offset = k * (TICK_SIZE + TICK_PADDING);
        let dy = match side {
            Side::Top => 0.0,
            Side::Bottom => 0.71,
            Side::Left | Side::Right => 0.32,
        };
        let attrs = Attrs::new()
            .set("fill", "currentColor")
            .set(if side.is_horizontal() { "y" } else { "x" }, offset)
            .set("dy", AttrValue::Em(dy));
        surface.create_child(ElementKind::Text, tick, attrs, Some(text.as_str()));
    }
}

/// `(pixel, text)` for each tick of `scale`.
fn tick_entries(scale: &Scale, format: TickFormat) -> Vec<(f64, String)> {
    let text_of_number = |v: f64| match format {
        TickFormat::Number(nf) => nf.format(v),
        TickFormat::MonthYear => v.to_string(),
    };
    match scale {
        Scale::Band(b) => b
            .domain()
            .filter_map(|key| {
                let text = match format {
                    TickFormat::MonthYear => month_year(key),
                    TickFormat::Number(_) => key.to_string(),
                };
                b.center(key).map(|x| (x, text))
            })
            .collect(),
        Scale::Continuous(c) => c.ticks().into_iter().map(|v| (c.apply(v), text_of_number(v))).collect(),
    }
}
