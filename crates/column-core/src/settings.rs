// File: crates/column-core/src/settings.rs
// Summary: Declarative chart configuration: variant, per-side axis specs, scale kinds and labels.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::types::Side;

/// Bar layout variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartVariant {
    /// Every series drawn full-width at the same x.
    #[default]
    Overlaid,
    /// Series side by side inside the band.
    Clustered,
    /// Series stacked on their running sums.
    Stacked,
    /// Stacked, each record normalized to its total.
    Stacked100,
    /// Name that matched no variant; renders no bars.
    Unrecognized(String),
}

impl ChartVariant {
    pub fn as_str(&self) -> &str {
        match self {
            ChartVariant::Overlaid => "overlaid",
            ChartVariant::Clustered => "clustered",
            ChartVariant::Stacked => "stacked",
            ChartVariant::Stacked100 => "stacked100",
            ChartVariant::Unrecognized(s) => s,
        }
    }
}

impl FromStr for ChartVariant {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "overlaid" => ChartVariant::Overlaid,
            "clustered" => ChartVariant::Clustered,
            "stacked" => ChartVariant::Stacked,
            "stacked100" => ChartVariant::Stacked100,
            _ => ChartVariant::Unrecognized(s.to_string()),
        })
    }
}

impl From<String> for ChartVariant {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }
}

impl From<ChartVariant> for String {
    fn from(v: ChartVariant) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for ChartVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured scale family of an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKindName {
    #[default]
    Linear,
    #[serde(alias = "logarithmic")]
    Log,
    #[serde(alias = "pow")]
    Power,
    Band,
}

/// Scale configuration: kind plus kind-specific parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScaleConfig {
    #[serde(alias = "type")]
    pub kind: ScaleKindName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exponent: Option<f64>,
}

impl ScaleConfig {
    pub fn linear() -> Self {
        Self::default()
    }

    pub fn log(base: f64) -> Self {
        Self { kind: ScaleKindName::Log, base: Some(base), exponent: None }
    }

    pub fn power(exponent: f64) -> Self {
        Self { kind: ScaleKindName::Power, base: None, exponent: Some(exponent) }
    }

    pub fn band() -> Self {
        Self { kind: ScaleKindName::Band, base: None, exponent: None }
    }
}

/// Axis title configuration. Empty text suppresses the label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSpec {
    pub display: bool,
    pub text: String,
}

impl LabelSpec {
    /// `true` when the label should be rendered.
    pub fn is_visible(&self) -> bool {
        self.display && !self.text.is_empty()
    }
}

/// Per-side axis configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSpec {
    pub display: bool,
    pub label: LabelSpec,
    pub scale: ScaleConfig,
}

impl AxisSpec {
    /// A displayed axis with no label and a linear scale.
    pub fn shown() -> Self {
        Self { display: true, ..Self::default() }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn labelled(mut self, text: impl Into<String>) -> Self {
        self.label = LabelSpec { display: true, text: text.into() };
        self
    }

    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }
}

/// The four axis slots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axes {
    pub top: AxisSpec,
    pub bottom: AxisSpec,
    pub left: AxisSpec,
    pub right: AxisSpec,
}

impl Axes {
    pub fn get(&self, side: Side) -> &AxisSpec {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut AxisSpec {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_displayed(&self, side: Side) -> bool {
        self.get(side).display
    }
}

/// Complete chart configuration.
///
/// `description`, `id`, `target` and `background` are carried for the host
/// surface (see [`crate::scene::SceneSurface::from_settings`]); the layout
/// engine reads only `variant` and `axes`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSettings {
    #[serde(alias = "type")]
    pub variant: ChartVariant,
    pub axes: Axes,
    pub description: String,
    pub id: String,
    pub target: String,
    pub background: bool,
}

impl ChartSettings {
    pub fn new(variant: ChartVariant) -> Self {
        Self { variant, ..Self::default() }
    }

    pub fn with_axis(mut self, side: Side, spec: AxisSpec) -> Self {
        *self.axes.get_mut(side) = spec;
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
