// File: crates/meridian-core/src/palette.rs
// Summary: Ordinal group -> color mapping (Category10 unless colors are configured).

use crate::config::Auto;
use crate::theme::Color;

pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Color scale over the chart's group keys, assigned in domain order and wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    domain: Vec<String>,
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(configured: &Auto<Vec<String>>, domain: Vec<String>) -> Self {
        let names: Vec<&str> = match configured.explicit() {
            Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
            _ => CATEGORY10.to_vec(),
        };
        let mut colors: Vec<Color> = names
            .iter()
            .filter_map(|n| {
                let c = Color::parse(n);
                if c.is_none() { tracing::warn!(color = %n, "unrecognised color, skipping"); }
                c
            })
            .collect();
        if colors.is_empty() {
            colors = CATEGORY10.iter().filter_map(|n| Color::from_hex(n)).collect();
        }
        Self { domain, colors }
    }

    pub fn domain(&self) -> &[String] { &self.domain }

    /// Color for a group key; keys outside the domain take the first color.
    pub fn color(&self, group: &str) -> Color {
        let i = self.domain.iter().position(|g| g == group).unwrap_or(0);
        self.colors.get(i % self.colors.len().max(1)).copied().unwrap_or(Color::BLACK)
    }
}
