// File: crates/column-core/src/surface.rs
// Summary: Drawing-surface capability trait the layout engine renders through.
// Notes:
// - The engine never owns elements. It asks the surface to create them, sets
//   attributes on them, and reads back measured sizes.

use std::fmt;

use crate::geometry::{num, PathData, Size, Transform};

/// Opaque handle to an element created by a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Primitive shape kinds a surface can create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Group,
    Rect,
    Path,
    Text,
    Title,
}

impl ElementKind {
    /// SVG tag name.
    pub const fn tag(self) -> &'static str {
        match self {
            ElementKind::Group => "g",
            ElementKind::Rect => "rect",
            ElementKind::Path => "path",
            ElementKind::Text => "text",
            ElementKind::Title => "title",
        }
    }
}

/// Attribute value. Geometric values stay structured so surfaces can measure
/// without re-parsing strings.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Str(String),
    Num(f64),
    /// Length in ems (`dy="0.71em"`).
    Em(f64),
    Transform(Transform),
    Path(PathData),
}

impl AttrValue {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            AttrValue::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Num(v) => f.write_str(&num(*v)),
            AttrValue::Em(v) => write!(f, "{}em", num(*v)),
            AttrValue::Transform(t) => write!(f, "{t}"),
            AttrValue::Path(p) => write!(f, "{p}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Num(v)
    }
}

impl From<Transform> for AttrValue {
    fn from(t: Transform) -> Self {
        AttrValue::Transform(t)
    }
}

impl From<PathData> for AttrValue {
    fn from(p: PathData) -> Self {
        AttrValue::Path(p)
    }
}

/// Ordered attribute list passed to [`Surface::create_child`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs(Vec<(&'static str, AttrValue)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a `class` attribute.
    pub fn class(class: impl Into<String>) -> Self {
        Self::new().set("class", class.into())
    }

    pub fn set(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Insert or replace `name`.
    pub fn insert(&mut self, name: &'static str, value: AttrValue) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> + '_ {
        self.0.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Host drawing surface.
///
/// Single-owner and synchronous. `measure_bounding_box` may be expensive; the
/// engine calls it a bounded number of times per layout phase.
pub trait Surface {
    /// Outermost element (the whole canvas).
    fn canvas_root(&self) -> ElementId;

    /// Element that hosts the plot area; its origin is the plot-area origin.
    fn plot_area_root(&self) -> ElementId;

    /// Size of the plot area in pixels.
    fn plot_area_size(&self) -> Size;

    /// Create a child of `parent`, appended after its existing children.
    fn create_child(
        &mut self,
        kind: ElementKind,
        parent: ElementId,
        attrs: Attrs,
        text: Option<&str>,
    ) -> ElementId;

    /// Set or replace one attribute.
    fn set_attribute(&mut self, element: ElementId, name: &'static str, value: AttrValue);

    /// Remove every descendant of `element`.
    fn clear_children(&mut self, element: ElementId);

    /// Rendered size of `element` in its own user space (its own transform
    /// excluded, descendants' transforms included).
    fn measure_bounding_box(&mut self, element: ElementId) -> Size;

    /// Ask the host to add `class` to `target` while `element` is hovered or
    /// focused, and remove it afterwards. Hosts without interaction ignore it.
    fn bind_class_toggle(&mut self, _element: ElementId, _target: ElementId, _class: &str) {}
}
