//! Dialect Registry
//!
//! Central registry for all available dialect adapters. Adapters are
//! registered explicitly at construction time and looked up by id; there is
//! no global, ambient dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::SqlDialectAdapter;

/// Registry that holds all available dialect adapters
pub struct DialectRegistry {
    adapters: HashMap<String, Arc<dyn SqlDialectAdapter>>,
}

impl DialectRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Registers a new adapter
    ///
    /// The adapter's `dialect_id()` is used as the key.
    pub fn register(&mut self, adapter: Arc<dyn SqlDialectAdapter>) {
        let id = adapter.dialect_id().to_string();
        self.adapters.insert(id, adapter);
    }

    /// Gets an adapter by its id
    pub fn get(&self, dialect_id: &str) -> Option<Arc<dyn SqlDialectAdapter>> {
        self.adapters.get(dialect_id).cloned()
    }

    /// Lists all registered dialect ids, sorted
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.adapters.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered adapters
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns true if no adapters are registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
