// File: crates/column-core/src/lib.rs
// Summary: Core library entry point; exports the column chart layout engine and its surfaces.

pub mod axis;
pub mod bars;
pub mod chart;
pub mod data;
pub mod domain;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod settings;
pub mod surface;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{AxisLayout, AxisMeasure, LaidOutAxis, TickFormat};
pub use bars::{layout_bars, BarRect, ColumnGeometry, ValueLabel};
pub use chart::{render_chart, render_chart_with_layout, Chart};
pub use data::{Dataset, Record};
pub use domain::Domain;
pub use error::{ChartError, ChartResult};
pub use geometry::{BBox, PathData, Size, Transform};
pub use scale::{BandScale, ContinuousScale, Range, Scale, ScaleKind, ScaleSpec};
pub use scene::{SceneOptions, SceneSurface};
pub use settings::{AxisSpec, Axes, ChartSettings, ChartVariant, LabelSpec, ScaleConfig, ScaleKindName};
pub use surface::{AttrValue, Attrs, ElementId, ElementKind, Surface};
pub use text::{ApproxTextMetrics, TextMetrics};
pub use theme::Palette;
pub use types::{Insets, Side, Sides};
