// File: crates/column-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (sizes, boxes, transforms, path data).

use std::fmt;

/// Width/height pair as reported by surface measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box in some element's user space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let (mut l, mut t, mut r, mut b) = (x0, y0, x0, y0);
        for (x, y) in it {
            l = l.min(x);
            t = t.min(y);
            r = r.max(x);
            b = b.max(y);
        }
        Some(Self::from_xywh(l, t, r - l, b - t))
    }

    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn size(&self) -> Size { Size::new(self.width, self.height) }

    pub fn union(&self, other: &BBox) -> BBox {
        let l = self.x.min(other.x);
        let t = self.y.min(other.y);
        let r = self.right().max(other.right());
        let b = self.bottom().max(other.bottom());
        BBox::from_xywh(l, t, r - l, b - t)
    }

    /// Box enclosing the four transformed corners.
    pub fn transformed(&self, tr: &Transform) -> BBox {
        let corners = [
            (self.x, self.y),
            (self.right(), self.y),
            (self.x, self.bottom()),
            (self.right(), self.bottom()),
        ];
        // non-empty input, always Some
        BBox::from_points(corners.into_iter().map(|p| tr.apply(p))).unwrap_or(*self)
    }
}

/// `translate(tx,ty) rotate(deg)`; rotation is applied first, then translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
    pub rotate_deg: f64,
}

impl Transform {
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self { tx, ty, rotate_deg: 0.0 }
    }

    pub const fn rotate(deg: f64) -> Self {
        Self { tx: 0.0, ty: 0.0, rotate_deg: deg }
    }

    pub const fn then_rotate(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }

    pub fn apply(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let (x, y) = if self.rotate_deg == 0.0 {
            (x, y)
        } else {
            let (s, c) = self.rotate_deg.to_radians().sin_cos();
            (x * c - y * s, x * s + y * c)
        };
        (x + self.tx, y + self.ty)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_translate = self.tx != 0.0 || self.ty != 0.0;
        if has_translate || self.rotate_deg == 0.0 {
            write!(f, "translate({},{})", num(self.tx), num(self.ty))?;
        }
        if self.rotate_deg != 0.0 {
            if has_translate {
                f.write_str(" ")?;
            }
            write!(f, "rotate({})", num(self.rotate_deg))?;
        }
        Ok(())
    }
}

/// One SVG path command (absolute coordinates only).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    HorizontalTo(f64),
    VerticalTo(f64),
}

/// Axis-aligned path data, serialized as an SVG `d` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.cmds.push(PathCmd::MoveTo(x, y));
        self
    }

    pub fn h(mut self, x: f64) -> Self {
        self.cmds.push(PathCmd::HorizontalTo(x));
        self
    }

    pub fn v(mut self, y: f64) -> Self {
        self.cmds.push(PathCmd::VerticalTo(y));
        self
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Absolute vertices visited by the path, in order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(self.cmds.len());
        let mut cur = (0.0, 0.0);
        for cmd in &self.cmds {
            cur = match *cmd {
                PathCmd::MoveTo(x, y) => (x, y),
                PathCmd::HorizontalTo(x) => (x, cur.1),
                PathCmd::VerticalTo(y) => (cur.0, y),
            };
            out.push(cur);
        }
        out
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCmd::MoveTo(x, y) => write!(f, "M{} {}", num(x), num(y))?,
                PathCmd::HorizontalTo(x) => write!(f, "H{}", num(x))?,
                PathCmd::VerticalTo(y) => write!(f, "V{}", num(y))?,
            }
        }
        Ok(())
    }
}

/// Compact number formatting for attribute output: integers without a
/// trailing `.0`, everything else rounded to 3 decimals.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        let s = format!("{r:.3}");
        s.trim_end_matches('0').to_string()
    }
}
