//! Per-instance interaction state.
//!
//! Both stores live inside one [`crate::CardInstance`] and are dropped with
//! it. Two instances of the same document share nothing.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Live map of input id to current value for one rendered card instance.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, Value>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single mutation entry point. Overwrites any previous value.
    pub fn set(&mut self, id: impl Into<String>, value: Value) {
        self.values.insert(id.into(), value);
    }

    /// Seed an input's document default, unless the user already edited it.
    pub fn seed(&mut self, id: &str, default: Value) {
        if !self.values.contains_key(id) {
            self.values.insert(id.to_string(), default);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// Snapshot as a JSON object, for Submit payload assembly.
    pub fn snapshot(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let mut ids: Vec<&String> = self.values.keys().collect();
        ids.sort();
        for id in ids {
            map.insert(id.clone(), self.values[id].clone());
        }
        map
    }
}

/// Live map tracking which ShowCard actions are currently expanded.
/// A missing identifier means collapsed.
#[derive(Debug, Clone, Default)]
pub struct DisclosureState {
    expanded: HashMap<String, bool>,
}

impl DisclosureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id`, returning the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }
}
