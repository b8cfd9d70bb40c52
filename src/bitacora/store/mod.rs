//! # Storage Layer
//!
//! The persistence adapter for bitacora. The [`Storage`] trait is a plain
//! string-keyed slot interface: the journal hands it opaque serialized
//! payloads and it hands them back. The adapter knows nothing about the
//! entry format; the journal owns serialization.
//!
//! Two fixed slots exist:
//! - [`ENTRIES_KEY`]: the JSON array of all entries
//! - [`THEME_KEY`]: the color theme flag (`"light"` / `"dark"`)
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per slot under the
//!   data directory
//! - [`memory::InMemoryStore`]: in-memory slots for fast, isolated tests

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Slot holding the serialized entry collection.
pub const ENTRIES_KEY: &str = "entries";

/// Slot holding the theme flag.
pub const THEME_KEY: &str = "theme";

/// Abstract slot storage.
pub trait Storage {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
