// File: crates/meridian-core/src/config.rs
// Summary: Configuration merge rules, the `auto` keyword wrapper, and the attribute slot table.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Deep-merge `overrides` onto `defaults` without touching either input.
///
/// Per key: keys only in `overrides` are copied in; object onto object recurses;
/// a non-array override onto an array default is wrapped in a one-element array;
/// any other combination takes the override. `null` and `"auto"` are ordinary values.
pub fn merge(defaults: &Value, overrides: &Value) -> Value {
    match (defaults, overrides) {
        (Value::Object(d), Value::Object(o)) => {
            let mut out = d.clone();
            for (k, ov) in o {
                let next = match d.get(k) {
                    Some(dv) => merge_value(dv, ov),
                    None => ov.clone(),
                };
                out.insert(k.clone(), next);
            }
            Value::Object(out)
        }
        _ => overrides.clone(),
    }
}

/// Merge a single slot: the rule `merge` applies to each key.
pub fn merge_value(current: &Value, incoming: &Value) -> Value {
    match (current, incoming) {
        (Value::Object(_), Value::Object(_)) => merge(current, incoming),
        (Value::Array(_), Value::Array(_)) => incoming.clone(),
        (Value::Array(_), other) => Value::Array(vec![other.clone()]),
        _ => incoming.clone(),
    }
}

/// A setting that is either the literal `"auto"` or an explicit value.
#[derive(Clone, Debug, PartialEq)]
pub enum Auto<T> {
    Auto,
    Explicit(T),
}

impl<T> Default for Auto<T> {
    fn default() -> Self { Auto::Auto }
}

impl<T> Auto<T> {
    pub fn is_auto(&self) -> bool { matches!(self, Auto::Auto) }

    pub fn explicit(&self) -> Option<&T> {
        match self {
            Auto::Explicit(v) => Some(v),
            Auto::Auto => None,
        }
    }

    pub fn resolve(&self, fallback: impl FnOnce() -> T) -> T
    where
        T: Clone,
    {
        match self {
            Auto::Explicit(v) => v.clone(),
            Auto::Auto => fallback(),
        }
    }
}

impl<T> From<T> for Auto<T> {
    fn from(v: T) -> Self { Auto::Explicit(v) }
}

impl<T: Serialize> Serialize for Auto<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Auto::Auto => s.serialize_str("auto"),
            Auto::Explicit(v) => v.serialize(s),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Auto<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        enum Keyword {
            #[serde(rename = "auto")]
            Auto,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Keyword(Keyword),
            Value(T),
        }

        Ok(match Repr::<T>::deserialize(d)? {
            Repr::Keyword(Keyword::Auto) => Auto::Auto,
            Repr::Value(v) => Auto::Explicit(v),
        })
    }
}

/// How a named attribute behaves when assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// Replaced on assignment.
    Scalar,
    /// Array-valued; a non-array assignment is wrapped.
    Sequence,
    /// Object-valued; an object assignment is merged.
    Structured,
    /// Attached resource (tooltip); the previous one is released first.
    Resource,
}

impl SlotKind {
    pub fn of(v: &Value) -> Self {
        match v {
            Value::Array(_) => SlotKind::Sequence,
            Value::Object(_) => SlotKind::Structured,
            _ => SlotKind::Scalar,
        }
    }
}

/// Ordered name -> slot kind table, fixed when a chart is constructed and
/// extended only when a caller sets a key the defaults never named.
#[derive(Clone, Debug, Default)]
pub struct AttributeTable {
    slots: IndexMap<String, SlotKind>,
}

impl AttributeTable {
    pub fn from_defaults(defaults: &Value, resources: &[&str]) -> Self {
        let mut slots = IndexMap::new();
        if let Value::Object(map) = defaults {
            for (k, v) in map {
                slots.insert(k.clone(), SlotKind::of(v));
            }
        }
        for r in resources {
            slots.insert((*r).to_string(), SlotKind::Resource);
        }
        Self { slots }
    }

    pub fn kind(&self, key: &str) -> Option<SlotKind> { self.slots.get(key).copied() }

    pub fn contains(&self, key: &str) -> bool { self.slots.contains_key(key) }

    pub fn register(&mut self, key: &str, kind: SlotKind) {
        self.slots.entry(key.to_string()).or_insert(kind);
    }

    /// Force the kind of `key`, overriding what its default value implied.
    pub fn set_kind(&mut self, key: &str, kind: SlotKind) {
        self.slots.insert(key.to_string(), kind);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> { self.slots.keys().map(String::as_str) }

    pub fn len(&self) -> usize { self.slots.len() }

    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}

/// Serialize a typed configuration to a JSON object; an empty object if it cannot be.
pub fn to_tree<T: Serialize>(value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(v @ Value::Object(_)) => v,
        Ok(_) => Value::Object(Map::new()),
        Err(e) => {
            tracing::warn!(%e, "configuration did not serialize");
            Value::Object(Map::new())
        }
    }
}

pub fn from_tree<T: DeserializeOwned>(tree: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(tree)
}
