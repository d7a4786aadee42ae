// File: crates/column-core/src/scale.rs
// Summary: Scale factory; band and continuous (linear/log/power) value-to-pixel mappings.
// Notes:
// - A `ScaleSpec` (domain + kind) is immutable. Binding it to a `Range` yields a
//   `Scale`; when the layout engine corrects a range it binds the `ScaleSpec` again
//   instead of mutating the scale in place.

use indexmap::IndexMap;
use tracing::warn;

use crate::domain::Domain;
use crate::settings::{ScaleConfig, ScaleKindName};
use crate::ticks::{log_ticks, nice, nice_log, ticks};
use crate::types::{Side, BAND_PADDING, TICK_COUNT};

/// Pixel interval a scale maps into. `start` corresponds to the domain minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        (self.end - self.start).abs()
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }
}

/// Resolved scale family with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleKind {
    Linear,
    Log { base: f64 },
    Power { exponent: f64 },
    Band,
}

impl ScaleKind {
    /// Kind used for `side`: top/bottom are always band scales, left/right
    /// never are.
    pub fn for_side(side: Side, cfg: &ScaleConfig) -> Self {
        if side.is_horizontal() {
            return ScaleKind::Band;
        }
        match cfg.kind {
            ScaleKindName::Linear => ScaleKind::Linear,
            ScaleKindName::Log => {
                let base = cfg.base.unwrap_or(10.0);
                if base > 0.0 && base != 1.0 && base.is_finite() {
                    ScaleKind::Log { base }
                } else {
                    warn!(side = side.name(), base, "invalid log base, using 10");
                    ScaleKind::Log { base: 10.0 }
                }
            }
            ScaleKindName::Power => ScaleKind::Power { exponent: cfg.exponent.unwrap_or(1.0) },
            ScaleKindName::Band => {
                warn!(side = side.name(), "band scale on a value axis, using linear");
                ScaleKind::Linear
            }
        }
    }
}

/// Immutable half of a scale: domain and kind. The continuous domain is
/// already niced (and guarded, for log scales).
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSpec {
    domain: Domain,
    kind: ScaleKind,
    /// Effective continuous domain; `None` when the mapping is degenerate.
    continuous: Option<(f64, f64)>,
}

impl ScaleSpec {
    pub fn new(domain: Domain, kind: ScaleKind) -> Self {
        let continuous = match (&domain, kind) {
            (Domain::Numeric { min, max }, ScaleKind::Log { base }) => log_domain(*min, *max, base),
            (Domain::Numeric { min, max }, _) => {
                let (lo, hi) = nice(*min, *max, TICK_COUNT);
                (lo != hi && lo.is_finite() && hi.is_finite()).then_some((lo, hi))
            }
            (Domain::Categories(_), _) => None,
        };
        Self { domain, kind, continuous }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Materialize the callable scale for `range`.
    pub fn bind(&self, range: Range) -> Scale {
        match &self.domain {
            Domain::Categories(keys) => Scale::Band(BandScale::new(keys, range)),
            Domain::Numeric { min, max } => Scale::Continuous(ContinuousScale {
                domain: self.continuous.unwrap_or((*min, *max)),
                degenerate: self.continuous.is_none(),
                kind: self.kind,
                range,
            }),
        }
    }
}

fn log_domain(min: f64, max: f64, base: f64) -> Option<(f64, f64)> {
    if !(max > 0.0) {
        warn!(min, max, "log scale domain has no positive bound; mapping is constant");
        return None;
    }
    let lo = if min > 0.0 {
        min
    } else {
        let lo = 1f64.min(max / base);
        warn!(min, substitute = lo, "log scale domain crosses zero; clamping lower bound");
        lo
    };
    let (lo, hi) = nice_log(lo, max, base);
    (lo < hi).then_some((lo, hi))
}

/// A scale bound to a pixel range.
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    Band(BandScale),
    Continuous(ContinuousScale),
}

impl Scale {
    pub fn range(&self) -> Range {
        match self {
            Scale::Band(b) => b.range(),
            Scale::Continuous(c) => c.range(),
        }
    }

    /// Same domain and kind mapped into `range`.
    pub fn with_range(&self, range: Range) -> Scale {
        match self {
            Scale::Band(b) => Scale::Band(b.with_range(range)),
            Scale::Continuous(c) => Scale::Continuous(ContinuousScale { range, ..c.clone() }),
        }
    }

    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Scale::Band(b) => Some(b),
            Scale::Continuous(_) => None,
        }
    }

    pub fn as_continuous(&self) -> Option<&ContinuousScale> {
        match self {
            Scale::Continuous(c) => Some(c),
            Scale::Band(_) => None,
        }
    }
}

/// Discrete categories mapped to evenly spaced padded slots.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    /// Key -> left edge of its slot, in domain order.
    slots: IndexMap<String, f64>,
    range: Range,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Duplicate keys collapse onto their first slot.
    pub fn new(keys: &[String], range: Range) -> Self {
        let mut slots = IndexMap::with_capacity(keys.len());
        for k in keys {
            slots.entry(k.clone()).or_insert(0.0);
        }
        Self::place(slots, range)
    }

    /// Same keys laid out across `range`.
    pub fn with_range(&self, range: Range) -> Self {
        Self::place(self.slots.clone(), range)
    }

    fn place(mut slots: IndexMap<String, f64>, range: Range) -> Self {
        let count = slots.len();
        let n = count as f64;
        let reverse = range.end < range.start;
        let (lo, hi) = if reverse { (range.end, range.start) } else { (range.start, range.end) };
        let step = (hi - lo) / (n - BAND_PADDING + BAND_PADDING * 2.0).max(1.0);
        let first = lo + (hi - lo - step * (n - BAND_PADDING)) * 0.5;
        for (i, start) in slots.values_mut().enumerate() {
            let slot = if reverse { count - 1 - i } else { i };
            *start = first + step * slot as f64;
        }
        Self { slots, range, step, bandwidth: step * (1.0 - BAND_PADDING) }
    }

    /// Left edge of the slot for `key`.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.slots.get(key).copied()
    }

    /// Centre of the slot for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn padding(&self) -> f64 {
        BAND_PADDING
    }

    /// Unique keys in domain order.
    pub fn domain(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.slots.keys().map(String::as_str)
    }

    pub fn range(&self) -> Range {
        self.range
    }
}

/// Linear, logarithmic or power mapping from numbers to pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousScale {
    domain: (f64, f64),
    range: Range,
    kind: ScaleKind,
    degenerate: bool,
}

impl ContinuousScale {
    fn transform(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Log { base } => v.max(self.domain.0).ln() / base.ln(),
            ScaleKind::Power { exponent } => v.signum() * v.abs().powf(exponent),
            ScaleKind::Linear | ScaleKind::Band => v,
        }
    }

    /// Pixel for `value`. Degenerate scales map everything to the range
    /// midpoint.
    pub fn apply(&self, value: f64) -> f64 {
        if self.degenerate {
            return self.range.mid();
        }
        let t0 = self.transform(self.domain.0);
        let t1 = self.transform(self.domain.1);
        let t = self.transform(value);
        let span = t1 - t0;
        if span == 0.0 || !span.is_finite() || !t.is_finite() {
            return self.range.mid();
        }
        self.range.start + (t - t0) / span * (self.range.end - self.range.start)
    }

    /// Effective (niced) domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// Tick values in ascending order.
    pub fn ticks(&self) -> Vec<f64> {
        let (lo, hi) = self.domain;
        if self.degenerate {
            return vec![lo];
        }
        match self.kind {
            ScaleKind::Log { base } => log_ticks(lo, hi, base, TICK_COUNT),
            _ => ticks(lo, hi, TICK_COUNT),
        }
    }
}
