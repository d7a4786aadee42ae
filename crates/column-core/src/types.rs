// File: crates/column-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, axis sides).

/// Default surface width in pixels.
pub const WIDTH: f64 = 960.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 540.0;

/// Spacing between axis elements, in pixels.
pub const GUTTER: f64 = 4.0;
/// Inner and outer padding fraction of band scales.
pub const BAND_PADDING: f64 = 0.1;
/// Length of tick marks and of the domain path end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Distance between a tick mark and its text.
pub const TICK_PADDING: f64 = 3.0;
/// Default font size for tick and label text.
pub const FONT_SIZE: f64 = 10.0;
/// Vertical offset of a value label from its bar edge.
pub const VALUE_LABEL_OFFSET: f64 = 10.0;
/// Tick count hint used by continuous scales.
pub const TICK_COUNT: usize = 10;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same inset on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(10)
    }
}

/// One of the four chart edges an axis can sit on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Layout order used by every pass.
    pub const ALL: [Side; 4] = [Side::Bottom, Side::Left, Side::Top, Side::Right];

    /// `true` for top/bottom, which carry the categorical band scale.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Tick direction: top/left ticks point toward negative coordinates.
    pub const fn outward_sign(self) -> f64 {
        match self {
            Side::Top | Side::Left => -1.0,
            Side::Bottom | Side::Right => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// `x` for horizontal axes, `y` for vertical ones (class-name prefix).
    pub const fn dimension(self) -> &'static str {
        if self.is_horizontal() { "x" } else { "y" }
    }

    pub const fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

/// A value per side, indexed by [`Side`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sides<T> {
    items: [T; 4],
}

impl<T> Sides<T> {
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self { items: [f(Side::Top), f(Side::Bottom), f(Side::Left), f(Side::Right)] }
    }

    pub fn get(&self, side: Side) -> &T {
        &self.items[side.index()]
    }

    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.items[side.index()]
    }

    pub fn set(&mut self, side: Side, value: T) {
        self.items[side.index()] = value;
    }
}

impl<T> Sides<Option<T>> {
    /// Present entries in [`Side::ALL`] order.
    pub fn present(&self) -> impl Iterator<Item = (Side, &T)> + '_ {
        Side::ALL.into_iter().filter_map(move |s| self.get(s).as_ref().map(|v| (s, v)))
    }

    pub fn has(&self, side: Side) -> bool {
        self.get(side).is_some()
    }
}
