// File: crates/meridian-core/src/tooltip.rs
// Summary: Hover tooltip resource attached to a chart.

use crate::settings;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub id: String,
    pub text: String,
    /// Surface coordinates of the tooltip's top-left corner.
    pub position: (f64, f64),
    pub opacity: f64,
    attached: bool,
}

impl Tooltip {
    pub fn new() -> Self {
        Self { id: format!("tooltip-{}", settings::uuid()), text: String::new(), position: (0.0, 0.0), opacity: 0.0, attached: true }
    }

    pub fn is_attached(&self) -> bool { self.attached }

    /// Release the tooltip from its host; a detached tooltip ignores show/hide.
    pub fn detach(&mut self) {
        self.attached = false;
        self.opacity = 0.0;
        crate::debug_log!(id = %self.id, "tooltip detached");
    }

    pub fn show(&mut self, text: impl Into<String>, position: (f64, f64)) {
        if !self.attached { return; }
        self.text = text.into();
        self.position = position;
        self.opacity = 1.0;
    }

    pub fn hide(&mut self) {
        if self.attached { self.opacity = 0.0; }
    }

    pub fn is_visible(&self) -> bool { self.attached && self.opacity > 0.0 }
}

impl Default for Tooltip {
    fn default() -> Self { Self::new() }
}
