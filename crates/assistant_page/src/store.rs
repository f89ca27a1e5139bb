//! Durable bounds storage: two literal keys in a page-scoped key-value
//! store, written on every filter evaluation and read once at start-up.

use std::collections::BTreeMap;

/// Storage key for the saved minimum bound.
pub const MIN_BOUND_KEY: &str = "tm4rkus_savedMinRess";

/// Storage key for the saved maximum bound.
pub const MAX_BOUND_KEY: &str = "tm4rkus_savedMaxRess";

/// String key-value storage behind the filter bounds. No expiry, no
/// namespacing beyond the two literal keys.
pub trait BoundsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Raw stored bound texts; empty when nothing is saved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedBounds {
    pub min_text: String,
    pub max_text: String,
}

/// Read both saved bounds. Missing keys read back as empty text.
pub fn load_saved_bounds(store: &dyn BoundsStore) -> SavedBounds {
    SavedBounds {
        min_text: store.get(MIN_BOUND_KEY).unwrap_or_default(),
        max_text: store.get(MAX_BOUND_KEY).unwrap_or_default(),
    }
}

/// Write both coerced bounds as stringified numbers.
pub fn persist_bounds(store: &mut dyn BoundsStore, min: f64, max: f64) {
    store.set(MIN_BOUND_KEY, &format!("{min}"));
    store.set(MAX_BOUND_KEY, &format!("{max}"));
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryBoundsStore {
    entries: BTreeMap<String, String>,
}

impl InMemoryBoundsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoundsStore for InMemoryBoundsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
