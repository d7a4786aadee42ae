// File: crates/column-core/src/ticks.rs
// Summary: d3-compatible tick generation and domain "nicing" for continuous scales.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(i1, i2, inc)` such that ticks are `i * inc` (inc > 0) or `i / -inc`
/// (inc < 0) for `i` in `i1..=i2`.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    if !(count > 0.0) {
        return None;
    }
    let step = (stop - start) / count;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some((i1, i2, inc))
}

/// Signed tick increment for `[start, stop]`; negative values encode
/// `1 / -inc` steps. Returns 0 for empty or degenerate spans.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).map_or(0.0, |(_, _, inc)| inc)
}

/// Actual step between adjacent ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let inc = tick_increment(start.min(stop), start.max(stop), count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Roughly `count` evenly spaced round values covering `[start, stop]`.
/// Descending when `stop < start`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (a, b) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(a, b, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let value = |i: i64| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc };
    let mut out: Vec<f64> = (i1..=i2).map(value).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Extend `[start, stop]` outward to multiples of the tick step. The domain is
/// returned unchanged when the step never settles or the span is degenerate.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }
    let reverse = stop < start;
    let (mut a, mut b) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep: Option<f64> = None;
    for _ in 0..10 {
        let step = tick_increment(a, b, count);
        if prestep == Some(step) {
            return if reverse { (b, a) } else { (a, b) };
        } else if step > 0.0 {
            a = (a / step).floor() * step;
            b = (b / step).ceil() * step;
        } else if step < 0.0 {
            a = (a * step).ceil() / step;
            b = (b * step).floor() / step;
        } else {
            break;
        }
        prestep = Some(step);
    }
    (start, stop)
}

/// Extend a positive `[lo, hi]` to whole powers of `base`.
pub fn nice_log(lo: f64, hi: f64, base: f64) -> (f64, f64) {
    let lb = base.ln();
    let lo2 = base.powf((lo.ln() / lb).floor());
    let hi2 = base.powf((hi.ln() / lb).ceil());
    if lo2.is_finite() && hi2.is_finite() && lo2 > 0.0 {
        (lo2, hi2)
    } else {
        (lo, hi)
    }
}

/// Ticks for a positive log domain: powers of `base`, plus integer multiples
/// of each power when the domain spans few decades and the base is integral.
pub fn log_ticks(lo: f64, hi: f64, base: f64, count: usize) -> Vec<f64> {
    if !(lo > 0.0) || !(hi >= lo) || !(base > 1.0) {
        return Vec::new();
    }
    let lb = base.ln();
    let i = (lo.ln() / lb).floor() as i64;
    let j = (hi.ln() / lb).ceil() as i64;
    let eps = hi * 1e-12;
    let mut out = Vec::new();
    if base.fract() == 0.0 && ((j - i) as usize) < count {
        let b = base as i64;
        for k in i..=j {
            let p = base.powi(k as i32);
            for t in 1..b {
                let x = t as f64 * p;
                if x < lo - eps {
                    continue;
                }
                if x > hi + eps {
                    break;
                }
                out.push(x);
            }
        }
        if out.len() * 2 < count {
            return ticks(lo, hi, count);
        }
    } else {
        for k in i..=j {
            let x = base.powi(k as i32);
            if x >= lo - eps && x <= hi + eps {
                out.push(x);
            }
        }
    }
    out
}
