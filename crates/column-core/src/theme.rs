// File: crates/column-core/src/theme.rs
// Summary: Series palette: bar fills and value-label ink, keyed by series index.

/// Two-tone palette: series 0 gets the `primary_*` colours, every other series
/// the `secondary_*` ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary_fill: &'static str,
    pub secondary_fill: &'static str,
    pub primary_ink: &'static str,
    pub secondary_ink: &'static str,
}

impl Palette {
    pub const fn classic() -> Self {
        Self {
            name: "classic",
            primary_fill: "#61B0DC",
            secondary_fill: "green",
            primary_ink: "black",
            secondary_ink: "white",
        }
    }

    pub fn fill(&self, series: usize) -> &'static str {
        if series == 0 { self.primary_fill } else { self.secondary_fill }
    }

    pub fn ink(&self, series: usize) -> &'static str {
        if series == 0 { self.primary_ink } else { self.secondary_ink }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

/// Class-name token for a series: lowercase ASCII alphanumerics, everything
/// else collapsed to single dashes. Empty names become `series-<index>`.
pub fn series_class(name: &str, index: usize) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        format!("series-{index}")
    } else {
        trimmed.to_string()
    }
}
