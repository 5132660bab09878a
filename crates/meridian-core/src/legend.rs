// File: crates/meridian-core/src/legend.rs
// Summary: Legend layout/drawing, the hidden-group toggle set, and the bounded wait for mount.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::attributes::{Attributes, LegendPosition, MarkerShape};
use crate::geometry::Rect;
use crate::palette::Palette;
use crate::scene::{Anchor, Element, Shape};
use crate::theme::Color;

/// Vertical distance between legend entries.
pub const ENTRY_PITCH: f64 = 20.0;
/// How long a legend waits for its target to be attached before giving up.
pub const READY_TIMEOUT: Duration = Duration::from_secs(1);

/// Groups currently hidden by the user. Each group's membership is independent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleSet(BTreeSet<String>);

impl ToggleSet {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, group: &str) -> bool { self.0.contains(group) }

    /// Flip a group; returns true when the group is now hidden.
    pub fn toggle(&mut self, group: &str) -> bool {
        if self.0.remove(group) {
            false
        } else {
            self.0.insert(group.to_string());
            true
        }
    }

    pub fn hide(&mut self, group: &str) { self.0.insert(group.to_string()); }

    pub fn show(&mut self, group: &str) { self.0.remove(group); }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }

    pub fn to_vec(&self) -> Vec<String> { self.0.iter().cloned().collect() }
}

impl FromIterator<String> for ToggleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub group: String,
    pub color: Color,
    /// Clickable selector bounds in surface coordinates.
    pub selector: Rect,
    /// Entry origin in surface coordinates.
    pub origin: (f64, f64),
}

/// Laid-out legend, anchored at the top-right corner of the plot area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn layout(palette: &Palette, attrs: &Attributes, width: f64) -> Self {
        let lm = &attrs.legend_margin;
        let anchor = (width - attrs.margin.right, attrs.margin.top);
        let keys: Vec<String> = if attrs.legend_order.len() == palette.domain().len() {
            attrs.legend_order.clone()
        } else {
            palette.domain().to_vec()
        };
        let entries = keys
            .into_iter()
            .enumerate()
            .map(|(i, group)| {
                let origin = (anchor.0, anchor.1 + lm.top + i as f64 * ENTRY_PITCH);
                let selector = match attrs.legend_shape {
                    MarkerShape::Square => Rect::from_ltwh(origin.0 + 5.0 + lm.left, origin.1 + lm.top, 18.0, 18.0),
                    MarkerShape::Circle => {
                        let (cx, cy) = (origin.0 + 20.0 + lm.left, origin.1 + 8.0 + lm.top);
                        Rect::from_ltrb(cx - 9.0, cy - 9.0, cx + 9.0, cy + 9.0)
                    }
                };
                LegendEntry { color: palette.color(&group), group, selector, origin }
            })
            .collect();
        Self { entries }
    }

    pub fn draw(&self, attrs: &Attributes, toggles: &ToggleSet, out: &mut Vec<Element>) {
        let lm = &attrs.legend_margin;
        for e in &self.entries {
            let hidden = toggles.contains(&e.group);
            let selector = match attrs.legend_shape {
                MarkerShape::Square => Shape::Rect {
                    x: e.selector.left,
                    y: e.selector.top,
                    width: e.selector.width(),
                    height: e.selector.height(),
                    rx: 5.0,
                },
                MarkerShape::Circle => Shape::Circle {
                    cx: e.selector.left + 9.0,
                    cy: e.selector.top + 9.0,
                    r: 9.0,
                },
            };
            out.push(
                Element::new(selector)
                    .class("legend selector")
                    .id(format!("legend-{}", e.group))
                    .fill(e.color)
                    .stroke(e.color, 1.0)
                    .fill_opacity(if hidden { 0.0 } else { attrs.opacity }),
            );
            let (x, anchor) = match attrs.legend_position {
                LegendPosition::Inside => (e.origin.0 + 5.0 + lm.left, Anchor::End),
                LegendPosition::Outside => {
                    let shift = if attrs.legend_shape == MarkerShape::Circle { 7.0 } else { 0.0 };
                    (e.origin.0 + 27.0 + lm.left + shift, Anchor::Start)
                }
            };
            out.push(
                Element::new(Shape::Text { x, y: e.origin.1 + 9.0 + lm.top + 4.0, text: e.group.clone(), anchor, rotate: 0.0 })
                    .class("legend label")
                    .fill(Color::from_rgb(0x33, 0x33, 0x33)),
            );
        }
    }

    /// Group whose selector contains the surface point.
    pub fn hit(&self, x: f64, y: f64) -> Option<&str> {
        self.entries.iter().find(|e| e.selector.contains(x, y)).map(|e| e.group.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Pending,
    Expired,
}

/// Bounded wait for a target to be attached before the legend is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendWait {
    since: Instant,
    timeout: Duration,
}

impl LegendWait {
    pub fn new(since: Instant) -> Self { Self { since, timeout: READY_TIMEOUT } }

    pub fn with_timeout(since: Instant, timeout: Duration) -> Self { Self { since, timeout } }

    pub fn poll(&self, attached: bool, now: Instant) -> Readiness {
        if now.saturating_duration_since(self.since) > self.timeout {
            Readiness::Expired
        } else if attached {
            Readiness::Ready
        } else {
            Readiness::Pending
        }
    }
}
