use super::Storage;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory slot storage for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct slot inspection, for asserting on what got persisted.
    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Pre-seed a slot, e.g. with a corrupted payload.
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
