// File: crates/meridian-core/src/types.rs
// Summary: Shared types and constants (default sizes, margins, data records).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Fallback surface width when neither the configuration nor the target supplies one.
pub const WIDTH: f64 = 1024.0;
/// Fallback surface height.
pub const HEIGHT: f64 = 640.0;
/// Group key used for records that do not name one.
pub const DEFAULT_GROUP: &str = "0";

/// Surface margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 40.0, 40.0, 65.0)
    }
}

/// Pixel offset pair used for label padding and annotation text placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// A single x or y value: numeric (continuous axes) or categorical (ordinal axes).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Category(String),
}

impl Datum {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Number(v) => Some(*v),
            Datum::Category(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::Category(s) => Some(s),
            Datum::Number(_) => None,
        }
    }

    pub fn is_category(&self) -> bool { matches!(self, Datum::Category(_)) }

    /// Stable string key; used for unique-sorting and x-group aggregation.
    pub fn key(&self) -> String { self.to_string() }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Number(v) => write!(f, "{v}"),
            Datum::Category(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self { Datum::Number(v) }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self { Datum::Number(v as f64) }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self { Datum::Category(v.to_string()) }
}

impl From<String> for Datum {
    fn from(v: String) -> Self { Datum::Category(v) }
}

/// Input record. Records are never mutated by the pipeline; transforms derive copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub x: Datum,
    pub y: Datum,
    #[serde(default, deserialize_with = "key_or_number", skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "key_or_number", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Record {
    pub fn new(x: impl Into<Datum>, y: impl Into<Datum>) -> Self {
        Self { x: x.into(), y: y.into(), group: None, label: None }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// Group keys and labels arrive as strings or bare numbers in JSON input.
fn key_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
