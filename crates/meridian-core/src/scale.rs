// File: crates/meridian-core/src/scale.rs
// Summary: Linear and point (ordinal) scales mapping data domains onto pixel ranges.

use serde::{Deserialize, Serialize};

use crate::grid;
use crate::types::Datum;

/// Data extent of one axis: numeric bounds or an ordered category list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Domain {
    Continuous(f64, f64),
    Categorical(Vec<String>),
}

impl Domain {
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Domain::Continuous(a, b) => Some((*a, *b)),
            Domain::Categorical(_) => None,
        }
    }

    pub fn categories(&self) -> Option<&[String]> {
        match self {
            Domain::Categorical(c) => Some(c),
            Domain::Continuous(..) => None,
        }
    }

    pub fn is_categorical(&self) -> bool { matches!(self, Domain::Categorical(_)) }
}

impl Default for Domain {
    fn default() -> Self { Domain::Continuous(0.0, 0.0) }
}

/// Continuous mapping `domain -> range`. A zero-width domain maps everything to the range start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self { Self { domain, range } }

    #[inline]
    pub fn map(&self, v: f64) -> f64 { interpolate(self.domain, self.range, v) }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 { interpolate(self.range, self.domain, px) }

    pub fn with_domain(&self, domain: (f64, f64)) -> Self { Self::new(domain, self.range) }

    pub fn ticks(&self, count: usize) -> Vec<f64> { grid::ticks(self.domain.0, self.domain.1, count) }

    pub fn tick_step(&self, count: usize) -> f64 { grid::tick_step(self.domain.0, self.domain.1, count) }

    /// Domain bounds in ascending order.
    pub fn extent(&self) -> (f64, f64) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }
}

/// Evenly spaced points for a category list, with `padding` steps split across both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct PointScale {
    pub domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
}

impl PointScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self { domain, range, padding }
    }

    pub fn step(&self) -> f64 {
        let n = self.domain.len();
        if n < 2 { return 0.0; }
        (self.range.1 - self.range.0) / (n as f64 - 1.0 + self.padding)
    }

    pub fn positions(&self) -> Vec<f64> {
        let n = self.domain.len();
        if n < 2 {
            let mid = (self.range.0 + self.range.1) / 2.0;
            return vec![mid; n];
        }
        let step = self.step();
        let start = self.range.0 + step * self.padding / 2.0;
        (0..n).map(|i| start + step * i as f64).collect()
    }

    pub fn map(&self, category: &str) -> Option<f64> {
        let i = self.domain.iter().position(|c| c == category)?;
        self.positions().get(i).copied()
    }

    /// Nearest category to a pixel position.
    pub fn invert(&self, px: f64) -> Option<&str> {
        self.positions()
            .iter()
            .zip(&self.domain)
            .min_by(|a, b| (a.0 - px).abs().total_cmp(&(b.0 - px).abs()))
            .map(|(_, c)| c.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Point(PointScale),
}

impl Scale {
    /// Builds the scale matching the domain variant. Point scales use a padding of one step.
    pub fn for_domain(domain: &Domain, range: (f64, f64)) -> Self {
        match domain {
            Domain::Continuous(a, b) => Scale::Linear(LinearScale::new((*a, *b), range)),
            Domain::Categorical(c) => Scale::Point(PointScale::new(c.clone(), range, 1.0)),
        }
    }

    pub fn range(&self) -> (f64, f64) {
        match self {
            Scale::Linear(s) => s.range,
            Scale::Point(s) => s.range,
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Scale::Linear(s) => Domain::Continuous(s.domain.0, s.domain.1),
            Scale::Point(s) => Domain::Categorical(s.domain.clone()),
        }
    }

    pub fn as_linear(&self) -> Option<&LinearScale> {
        match self {
            Scale::Linear(s) => Some(s),
            Scale::Point(_) => None,
        }
    }

    pub fn is_linear(&self) -> bool { matches!(self, Scale::Linear(_)) }

    /// Pixel position of a datum. Categories on a linear scale (and numbers on a point
    /// scale that are not in its domain) have no position.
    pub fn map(&self, d: &Datum) -> Option<f64> {
        match (self, d) {
            (Scale::Linear(s), Datum::Number(v)) => Some(s.map(*v)),
            (Scale::Linear(s), Datum::Category(c)) => c.parse::<f64>().ok().map(|v| s.map(v)),
            (Scale::Point(s), d) => s.map(&d.key()),
        }
    }

    pub fn invert(&self, px: f64) -> Option<Datum> {
        match self {
            Scale::Linear(s) => Some(Datum::Number(s.invert(px))),
            Scale::Point(s) => s.invert(px).map(Datum::from),
        }
    }
}

// ---- helpers ----

#[inline]
fn interpolate(from: (f64, f64), to: (f64, f64), v: f64) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 || !span.is_finite() { return to.0; }
    to.0 + (v - from.0) / span * (to.1 - to.0)
}
