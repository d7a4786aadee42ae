// File: crates/column-core/src/domain.rs
// Summary: Domain resolver; the value range each active axis must cover.

use tracing::warn;

use crate::data::Dataset;
use crate::settings::{ChartSettings, ChartVariant};
use crate::types::{Side, Sides};

/// Input extent of a scale.
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    /// Category keys in record order (duplicates permitted).
    Categories(Vec<String>),
    /// Numeric extent; resolved domains always satisfy `min <= 0 <= max`.
    Numeric { min: f64, max: f64 },
}

impl Domain {
    pub fn numeric(min: f64, max: f64) -> Self {
        Domain::Numeric { min, max }
    }

    pub fn as_numeric(&self) -> Option<(f64, f64)> {
        match *self {
            Domain::Numeric { min, max } => Some((min, max)),
            Domain::Categories(_) => None,
        }
    }

    pub fn as_categories(&self) -> Option<&[String]> {
        match self {
            Domain::Categories(c) => Some(c),
            Domain::Numeric { .. } => None,
        }
    }
}

/// Domains for every displayed axis; undisplayed sides stay `None`.
pub fn resolve_all(data: &Dataset, settings: &ChartSettings) -> Sides<Option<Domain>> {
    let numeric = if settings.axes.is_displayed(Side::Left) || settings.axes.is_displayed(Side::Right) {
        Some(resolve_numeric(data, &settings.variant))
    } else {
        None
    };
    Sides::from_fn(|side| {
        if !settings.axes.is_displayed(side) {
            None
        } else if side.is_horizontal() {
            Some(resolve_categories(data))
        } else {
            numeric.clone()
        }
    })
}

pub fn resolve_categories(data: &Dataset) -> Domain {
    Domain::Categories(data.keys())
}

/// Numeric domain for the value axes, zero-anchored.
pub fn resolve_numeric(data: &Dataset, variant: &ChartVariant) -> Domain {
    let (raw_min, raw_max) = match variant {
        ChartVariant::Stacked => extent(data.records().iter().flat_map(|r| r.running_sums())),
        ChartVariant::Stacked100 => return stacked100_domain(data),
        _ => extent(data.records().iter().flat_map(|r| r.values.iter().copied())),
    };
    let min = if raw_min < 0.0 { raw_min } else { 0.0 };
    let max = if raw_max > 0.0 { raw_max } else { 0.0 };
    Domain::numeric(min, max)
}

fn stacked100_domain(data: &Dataset) -> Domain {
    let totals: Vec<f64> = data.records().iter().map(|r| r.total()).collect();
    let any_negative = totals.iter().any(|t| *t < 0.0);
    let any_positive = totals.iter().any(|t| *t > 0.0);
    if any_negative && any_positive {
        warn!(
            records = totals.len(),
            "stacked100 expects every record total to share one sign; using [-1, 1]"
        );
    }
    Domain::numeric(
        if any_negative { -1.0 } else { 0.0 },
        if any_positive { 1.0 } else { 0.0 },
    )
}

/// Finite min/max of `values`; `(0, 0)` when there are none.
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo.is_finite() { (lo, hi) } else { (0.0, 0.0) }
}
