// File: crates/column-core/src/format.rs
// Summary: Tick and label formatting: month/year categories, SI currency, percent, currency values.

use chrono::{DateTime, NaiveDate};

use crate::data::{Dataset, Record};
use crate::settings::ChartVariant;

/// Typographic minus used for negative numbers.
const MINUS: &str = "\u{2212}";

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "\u{b5}", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// How numeric ticks are labelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// `.0%`
    Percent,
    /// `$.1s`
    SiCurrency,
}

impl NumberFormat {
    pub fn for_variant(variant: &ChartVariant) -> Self {
        if *variant == ChartVariant::Stacked100 {
            NumberFormat::Percent
        } else {
            NumberFormat::SiCurrency
        }
    }

    pub fn format(self, v: f64) -> String {
        match self {
            NumberFormat::Percent => percent(v),
            NumberFormat::SiCurrency => si_currency(v),
        }
    }
}

/// Parse a category key as a calendar date. Accepts RFC 3339, `YYYY-MM-DD`,
/// `YYYY-MM`, `Mon YYYY` and integer epoch milliseconds.
pub fn parse_key_date(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(key) {
        return Some(dt.date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("1 {key}"), "%d %b %Y") {
        return Some(d);
    }
    // a bare year is a year, not an epoch offset
    if key.len() == 4 && key.bytes().all(|b| b.is_ascii_digit()) {
        return key.parse().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    key.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.date_naive())
}

/// `%b %Y` (e.g. `Jan 2020`); keys that are not dates are returned verbatim.
pub fn month_year(key: &str) -> String {
    parse_key_date(key).map_or_else(|| key.to_string(), |d| d.format("%b %Y").to_string())
}

/// `%B %Y` (e.g. `January 2020`); keys that are not dates are returned verbatim.
pub fn month_year_long(key: &str) -> String {
    parse_key_date(key).map_or_else(|| key.to_string(), |d| d.format("%B %Y").to_string())
}

/// One significant digit with an SI prefix and a dollar sign: `$2k`, `$500m`.
pub fn si_currency(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return "$0".to_string();
    }
    let a = v.abs();
    let mut exp = a.log10().floor() as i32;
    let mut mant = (a / 10f64.powi(exp)).round();
    if mant >= 10.0 {
        mant /= 10.0;
        exp += 1;
    }
    let group = exp.div_euclid(3).clamp(-8, 8);
    let coefficient = mant * 10f64.powi(exp - group * 3);
    let prefix = SI_PREFIXES[(group + 8) as usize];
    let sign = if v < 0.0 { MINUS } else { "" };
    format!("{sign}${}{prefix}", trim_number(coefficient))
}

/// Whole percent: `0.25` -> `25%`.
pub fn percent(v: f64) -> String {
    let p = (v * 100.0).round();
    if p == 0.0 || !p.is_finite() {
        return "0%".to_string();
    }
    let sign = if p < 0.0 { MINUS } else { "" };
    format!("{sign}{}%", p.abs() as i64)
}

/// Grouped currency with two decimals: `1234.5` -> `$1,234.50`.
pub fn currency(v: f64) -> String {
    if !v.is_finite() {
        return "$0.00".to_string();
    }
    let fixed = format!("{:.2}", v.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 && fixed != "0.00" { MINUS } else { "" };
    format!("{sign}${grouped}.{frac}")
}

/// Column tooltip: long month/year, then one `series: $value` line per series.
pub fn tooltip(record: &Record, data: &Dataset) -> String {
    let mut out = month_year_long(&record.key);
    for (name, v) in data.series_names().iter().zip(&record.values) {
        out.push('\n');
        out.push_str(name);
        out.push_str(": ");
        out.push_str(&currency(*v));
    }
    out
}

fn trim_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.6}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
