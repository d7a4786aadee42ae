// File: crates/column-core/src/scene.rs
// Summary: Retained in-memory Surface: element tree with bounding-box measurement and SVG output.

use std::fmt::Write as _;

use crate::geometry::{BBox, Size, Transform};
use crate::settings::ChartSettings;
use crate::surface::{AttrValue, Attrs, ElementId, ElementKind, Surface};
use crate::text::{ApproxTextMetrics, TextMetrics};
use crate::types::{Insets, FONT_SIZE, HEIGHT, WIDTH};

/// Canvas configuration for a [`SceneSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneOptions {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    /// Font size used when no ancestor sets `font-size`.
    pub font_size: f64,
    /// Fill of the background rectangle; `None` draws no background.
    pub background: Option<String>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            font_size: FONT_SIZE,
            background: None,
        }
    }
}

/// One element of the scene tree.
#[derive(Clone, Debug)]
pub struct Node {
    kind: ElementKind,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attrs: Attrs,
    text: Option<String>,
}

impl Node {
    pub fn kind(&self) -> ElementKind { self.kind }
    pub fn parent(&self) -> Option<ElementId> { self.parent }
    pub fn children(&self) -> &[ElementId] { &self.children }
    pub fn attrs(&self) -> &Attrs { &self.attrs }
    pub fn text(&self) -> Option<&str> { self.text.as_deref() }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn num(&self, name: &str) -> f64 {
        self.attr(name).and_then(AttrValue::as_num).unwrap_or(0.0)
    }

    pub fn transform(&self) -> Transform {
        match self.attr("transform") {
            Some(AttrValue::Transform(t)) => *t,
            _ => Transform::default(),
        }
    }

    /// `true` when the whitespace-separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .and_then(AttrValue::as_str)
            .is_some_and(|c| c.split_whitespace().any(|t| t == class))
    }
}

/// Declarative hover/focus hook recorded by [`Surface::bind_class_toggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassToggle {
    pub element: ElementId,
    pub target: ElementId,
    pub class: String,
}

/// Headless surface that keeps every created element in memory.
pub struct SceneSurface<M: TextMetrics = ApproxTextMetrics> {
    nodes: Vec<Node>,
    canvas: ElementId,
    plot_area: ElementId,
    opts: SceneOptions,
    metrics: M,
    description: String,
    toggles: Vec<ClassToggle>,
    measure_calls: usize,
}

impl SceneSurface<ApproxTextMetrics> {
    pub fn new(opts: SceneOptions) -> Self {
        Self::with_metrics(opts, ApproxTextMetrics::default())
    }
}

impl<M: TextMetrics> SceneSurface<M> {
    pub fn with_metrics(opts: SceneOptions, metrics: M) -> Self {
        let mut scene = Self {
            nodes: Vec::new(),
            canvas: ElementId(0),
            plot_area: ElementId(0),
            opts,
            metrics,
            description: String::new(),
            toggles: Vec::new(),
            measure_calls: 0,
        };
        scene.canvas = scene.push(ElementKind::Group, None, Attrs::class("canvas"), None);
        if let Some(fill) = scene.opts.background.clone() {
            let attrs = Attrs::class("background")
                .set("width", scene.opts.width)
                .set("height", scene.opts.height)
                .set("fill", fill);
            scene.push(ElementKind::Rect, Some(scene.canvas), attrs, None);
        }
        let attrs = Attrs::class("chart-area").set(
            "transform",
            Transform::translate(f64::from(scene.opts.insets.left), f64::from(scene.opts.insets.top)),
        );
        scene.plot_area = scene.push(ElementKind::Group, Some(scene.canvas), attrs, None);
        scene
    }

    /// Scene configured from the host-facing fields of `settings`: `id`,
    /// `description`, and `background` (white unless `opts` names a fill).
    pub fn from_settings(settings: &ChartSettings, mut opts: SceneOptions, metrics: M) -> Self {
        if settings.background && opts.background.is_none() {
            opts.background = Some("white".to_string());
        } else if !settings.background {
            opts.background = None;
        }
        let mut scene = Self::with_metrics(opts, metrics);
        if !settings.id.is_empty() {
            let canvas = scene.canvas;
            scene.set_attribute(canvas, "id", AttrValue::Str(settings.id.clone()));
        }
        scene.description = settings.description.clone();
        scene
    }

    fn push(&mut self, kind: ElementKind, parent: Option<ElementId>, attrs: Attrs, text: Option<&str>) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node { kind, parent, children: Vec::new(), attrs, text: text.map(str::to_string) });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    pub fn options(&self) -> &SceneOptions {
        &self.opts
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn node(&self, id: ElementId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn toggles(&self) -> &[ClassToggle] {
        &self.toggles
    }

    /// Number of `measure_bounding_box` calls served so far.
    pub fn measure_calls(&self) -> usize {
        self.measure_calls
    }

    /// Elements reachable from the canvas, in document order.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// Attached elements carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<ElementId> {
        self.descendants(self.canvas)
            .into_iter()
            .filter(|id| self.nodes[id.0].has_class(class))
            .collect()
    }

    /// Attribute lookup that walks up the ancestors (for `font-size`,
    /// `text-anchor`).
    pub fn inherited(&self, id: ElementId, name: &str) -> Option<&AttrValue> {
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = &self.nodes[c.0];
            if let Some(v) = node.attr(name) {
                return Some(v);
            }
            cur = node.parent;
        }
        None
    }

    pub fn font_size(&self, id: ElementId) -> f64 {
        self.inherited(id, "font-size").and_then(AttrValue::as_num).unwrap_or(self.opts.font_size)
    }

    /// Position of `id`'s local origin in canvas coordinates.
    pub fn origin_in_canvas(&self, id: ElementId) -> (f64, f64) {
        let mut p = (0.0, 0.0);
        let mut cur = Some(id);
        while let Some(c) = cur {
            let node = &self.nodes[c.0];
            p = node.transform().apply(p);
            cur = node.parent;
        }
        p
    }

    /// Bounding box of `id` in its own user space; `None` when empty.
    pub fn bbox(&self, id: ElementId) -> Option<BBox> {
        let node = &self.nodes[id.0];
        let mut acc = self.own_bbox(id);
        for &child in &node.children {
            if let Some(b) = self.bbox(child) {
                let b = b.transformed(&self.nodes[child.0].transform());
                acc = Some(acc.map_or(b, |a| a.union(&b)));
            }
        }
        acc
    }

    fn own_bbox(&self, id: ElementId) -> Option<BBox> {
        let node = &self.nodes[id.0];
        match node.kind {
            ElementKind::Group | ElementKind::Title => None,
            ElementKind::Rect => {
                let (w, h) = (node.num("width"), node.num("height"));
                let x = node.num("x") + w.min(0.0);
                let y = node.num("y") + h.min(0.0);
                Some(BBox::from_xywh(x, y, w.abs(), h.abs()))
            }
            ElementKind::Path => match node.attr("d") {
                Some(AttrValue::Path(p)) => BBox::from_points(p.points()),
                _ => None,
            },
            ElementKind::Text => {
                let text = node.text.as_deref().unwrap_or("");
                if text.is_empty() {
                    return None;
                }
                let fs = self.font_size(id);
                let size = self.metrics.measure(text, fs);
                let dy = match node.attr("dy") {
                    Some(AttrValue::Em(em)) => em * fs,
                    Some(AttrValue::Num(px)) => *px,
                    _ => 0.0,
                };
                let anchor = self.inherited(id, "text-anchor").and_then(AttrValue::as_str).unwrap_or("start");
                let shift = match anchor {
                    "middle" => size.width / 2.0,
                    "end" => size.width,
                    _ => 0.0,
                };
                let top = node.num("y") + dy - self.metrics.ascent(fs);
                Some(BBox::from_xywh(node.num("x") - shift, top, size.width, size.height))
            }
        }
    }

    /// Serialize the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let canvas = &self.nodes[self.canvas.0];
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}""#,
            w = crate::geometry::num(self.opts.width),
            h = crate::geometry::num(self.opts.height),
        );
        write_attrs(&mut out, &canvas.attrs);
        out.push('>');
        if !self.description.is_empty() {
            let _ = write!(out, "<desc>{}</desc>", escape(&self.description));
        }
        for &child in &canvas.children {
            self.write_node(&mut out, child);
        }
        out.push_str("</svg>\n");
        out
    }

    fn write_node(&self, out: &mut String, id: ElementId) {
        let node = &self.nodes[id.0];
        let tag = node.kind.tag();
        out.push('<');
        out.push_str(tag);
        write_attrs(out, &node.attrs);
        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(t) = &node.text {
            out.push_str(&escape(t));
        }
        for &child in &node.children {
            self.write_node(out, child);
        }
        let _ = write!(out, "</{tag}>");
    }
}

impl<M: TextMetrics> Surface for SceneSurface<M> {
    fn canvas_root(&self) -> ElementId {
        self.canvas
    }

    fn plot_area_root(&self) -> ElementId {
        self.plot_area
    }

    fn plot_area_size(&self) -> Size {
        Size::new(
            (self.opts.width - f64::from(self.opts.insets.hsum())).max(0.0),
            (self.opts.height - f64::from(self.opts.insets.vsum())).max(0.0),
        )
    }

    fn create_child(&mut self, kind: ElementKind, parent: ElementId, attrs: Attrs, text: Option<&str>) -> ElementId {
        self.push(kind, Some(parent), attrs, text)
    }

    fn set_attribute(&mut self, element: ElementId, name: &'static str, value: AttrValue) {
        self.nodes[element.0].attrs.insert(name, value);
    }

    fn clear_children(&mut self, element: ElementId) {
        let children = std::mem::take(&mut self.nodes[element.0].children);
        for c in children {
            self.nodes[c.0].parent = None;
        }
    }

    fn measure_bounding_box(&mut self, element: ElementId) -> Size {
        self.measure_calls += 1;
        self.bbox(element).map_or(Size::ZERO, |b| b.size())
    }

    fn bind_class_toggle(&mut self, element: ElementId, target: ElementId, class: &str) {
        self.toggles.push(ClassToggle { element, target, class: class.to_string() });
    }
}

fn write_attrs(out: &mut String, attrs: &Attrs) {
    for (name, value) in attrs.iter() {
        let _ = write!(out, r#" {name}="{}""#, escape(&value.to_string()));
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
