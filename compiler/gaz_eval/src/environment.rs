//! The global variable table.

use rustc_hash::FxHashMap;

use crate::Value;

/// Flat name to value map. Names keep their `$` sigil. There is one scope
/// per run: blocks do not introduce new bindings.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Bind `name`, replacing any previous value.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
