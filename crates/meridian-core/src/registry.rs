// File: crates/meridian-core/src/registry.rs
// Summary: Owner of live charts; broadcasts global key modifiers to every chart.

use indexmap::IndexMap;
use serde_json::Value;

use crate::chart::Chart;
use crate::debug_log;
use crate::event::Modifier;
use crate::models::ChartKind;

/// Handle to a chart owned by a `Registry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartId(u64);

impl ChartId {
    pub fn get(&self) -> u64 { self.0 }
}

#[derive(Default)]
pub struct Registry {
    next: u64,
    charts: IndexMap<ChartId, Chart>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn create(&mut self, kind: ChartKind, overrides: Value) -> ChartId {
        self.insert(Chart::new(kind, overrides))
    }

    pub fn insert(&mut self, chart: Chart) -> ChartId {
        let id = ChartId(self.next);
        self.next += 1;
        debug_log!(handle = id.0, chart = %chart.id(), "chart registered");
        self.charts.insert(id, chart);
        id
    }

    pub fn remove(&mut self, id: ChartId) -> Option<Chart> { self.charts.shift_remove(&id) }

    pub fn get(&self, id: ChartId) -> Option<&Chart> { self.charts.get(&id) }

    pub fn get_mut(&mut self, id: ChartId) -> Option<&mut Chart> { self.charts.get_mut(&id) }

    pub fn len(&self) -> usize { self.charts.len() }

    pub fn is_empty(&self) -> bool { self.charts.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = ChartId> + '_ { self.charts.keys().copied() }

    pub fn iter(&self) -> impl Iterator<Item = (ChartId, &Chart)> { self.charts.iter().map(|(k, c)| (*k, c)) }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ChartId, &mut Chart)> {
        self.charts.iter_mut().map(|(k, c)| (*k, c))
    }

    /// Key chord pressed: Shift switches every chart to pan, Shift+A to annotate.
    pub fn modifier_down(&mut self, modifier: Modifier) {
        debug_log!(?modifier, charts = self.charts.len(), "modifier down");
        for chart in self.charts.values_mut() {
            match modifier {
                Modifier::Shift => chart.set_pan_mode(true),
                Modifier::ShiftA => chart.set_annotate_mode(true),
            };
        }
    }

    /// Key chord released: restores zoom mode / leaves annotate mode on every chart.
    pub fn modifier_up(&mut self, modifier: Modifier) {
        for chart in self.charts.values_mut() {
            match modifier {
                Modifier::Shift => chart.set_pan_mode(false),
                Modifier::ShiftA => chart.set_annotate_mode(false),
            };
        }
    }
}
