// File: crates/meridian-core/src/format.rs
// Summary: Numeric tick/label formatting from short format strings (",.2f", ".0%", "e", "d").

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatKind {
    Fixed,
    Exponent,
    Percent,
    Integer,
    General,
}

/// Parsed numeric format: `[,][.precision][f|e|%|d|g]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub grouping: bool,
    pub precision: Option<usize>,
    pub kind: FormatKind,
}

impl NumberFormat {
    pub const fn fixed(precision: usize) -> Self {
        Self { grouping: false, precision: Some(precision), kind: FormatKind::Fixed }
    }

    /// Fixed format with just enough precision to tell ticks `step` apart.
    pub fn for_step(step: f64) -> Self {
        let step = step.abs();
        if step == 0.0 || !step.is_finite() {
            return Self { grouping: false, precision: None, kind: FormatKind::General };
        }
        let exponent = step.log10().floor() as i32;
        Self::fixed((-exponent).max(0) as usize)
    }

    pub fn format(&self, v: f64) -> String {
        if !v.is_finite() { return v.to_string(); }
        let body = match self.kind {
            FormatKind::Fixed => format!("{:.*}", self.precision.unwrap_or(6), v),
            FormatKind::Integer => format!("{}", v.round() as i64),
            FormatKind::Percent => format!("{:.*}%", self.precision.unwrap_or(0), v * 100.0),
            FormatKind::Exponent => format_exponent(v, self.precision.unwrap_or(6)),
            FormatKind::General => general(v, self.precision),
        };
        if self.grouping { group_thousands(&body) } else { body }
    }
}

impl FromStr for NumberFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.trim();
        let grouping = rest.starts_with(',');
        if grouping { rest = &rest[1..]; }
        let mut precision = None;
        if let Some(after) = rest.strip_prefix('.') {
            let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() { return Err(format!("missing precision in format '{s}'")); }
            precision = Some(digits.parse::<usize>().map_err(|e| e.to_string())?);
            rest = &after[digits.len()..];
        }
        let kind = match rest {
            "" | "g" => FormatKind::General,
            "f" => FormatKind::Fixed,
            "e" => FormatKind::Exponent,
            "%" => FormatKind::Percent,
            "d" => FormatKind::Integer,
            other => return Err(format!("unsupported format type '{other}' in '{s}'")),
        };
        Ok(Self { grouping, precision, kind })
    }
}

/// Format a value with an optional explicit spec, falling back to step-derived precision.
pub fn format_value(spec: Option<&str>, v: f64, step: f64) -> String {
    match spec.map(str::parse::<NumberFormat>) {
        Some(Ok(f)) => f.format(v),
        Some(Err(e)) => {
            tracing::warn!(%e, "ignoring invalid number format");
            NumberFormat::for_step(step).format(v)
        }
        None => NumberFormat::for_step(step).format(v),
    }
}

// ---- helpers ----

fn general(v: f64, precision: Option<usize>) -> String {
    let s = match precision {
        Some(p) => format!("{:.*}", p, v),
        None => format!("{v}"),
    };
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn format_exponent(v: f64, precision: usize) -> String {
    // Rust renders 1.5e3; normalise to 1.5e+3
    let s = format!("{:.*e}", precision, v);
    match s.split_once('e') {
        Some((m, e)) if !e.starts_with('-') => format!("{m}e+{e}"),
        _ => s,
    }
}

fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", s),
    };
    let split = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (int, tail) = rest.split_at(split);
    let mut out = String::with_capacity(s.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 { out.push(','); }
        out.push(c);
    }
    format!("{sign}{out}{tail}")
}

