// File: crates/meridian-core/src/accessor.rs
// Summary: Caller-supplied functions that read x/y/group/label from records and reshape data.

use std::fmt;
use std::rc::Rc;

use crate::types::{Datum, Record, DEFAULT_GROUP};

pub type ValueFn = Rc<dyn Fn(&Record, usize) -> Datum>;
pub type KeyFn = Rc<dyn Fn(&Record, usize) -> String>;
pub type TransformFn = Rc<dyn Fn(Vec<Record>) -> Vec<Record>>;
pub type AggregateFn = Rc<dyn Fn(&[f64]) -> f64>;

/// Accessors used by every draw. Each receives the record and its index in the prepared data.
#[derive(Clone)]
pub struct Accessors {
    pub x: ValueFn,
    pub y: ValueFn,
    pub group: KeyFn,
    pub label: KeyFn,
    pub transform: TransformFn,
    /// Folds a group's values into one (pie slices).
    pub aggregate: AggregateFn,
}

impl Default for Accessors {
    fn default() -> Self {
        Self {
            x: Rc::new(|r, _| r.x.clone()),
            y: Rc::new(|r, _| r.y.clone()),
            group: Rc::new(|r, _| r.group.clone().unwrap_or_else(|| DEFAULT_GROUP.to_string())),
            label: Rc::new(|r, i| r.label.clone().unwrap_or_else(|| i.to_string())),
            transform: Rc::new(|d| d),
            aggregate: Rc::new(|v| v.iter().sum()),
        }
    }
}

impl Accessors {
    #[inline]
    pub fn x(&self, r: &Record, i: usize) -> Datum { (self.x)(r, i) }
    #[inline]
    pub fn y(&self, r: &Record, i: usize) -> Datum { (self.y)(r, i) }
    #[inline]
    pub fn group(&self, r: &Record, i: usize) -> String { (self.group)(r, i) }
    #[inline]
    pub fn label(&self, r: &Record, i: usize) -> String { (self.label)(r, i) }

    /// Distinct group keys, sorted.
    pub fn groups(&self, data: &[Record]) -> Vec<String> {
        let mut keys: Vec<String> = data.iter().enumerate().map(|(i, r)| self.group(r, i)).collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

impl fmt::Debug for Accessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Accessors { .. }") }
}
