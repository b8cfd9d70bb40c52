//! The entry store: the single source of truth for what has been logged.
//!
//! [`Journal`] owns the in-memory entry collection and the theme flag, both
//! loaded once from the storage adapter at construction. Every mutation
//! serializes the full collection back to its slot synchronously before
//! returning, so a mutation is never lost between the call and process exit.

use crate::error::{BitacoraError, Result};
use crate::model::{Entry, EntryFields, Theme};
use crate::store::{Storage, ENTRIES_KEY, THEME_KEY};
use uuid::Uuid;

pub struct Journal<S: Storage> {
    storage: S,
    entries: Vec<Entry>,
    theme: Theme,
}

impl<S: Storage> Journal<S> {
    /// Load the journal from storage. An unreadable entries payload is
    /// discarded with a warning and the journal starts empty; this is the
    /// only recovery the format gets.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get(ENTRIES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("discarding unreadable entry data: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("could not read entry data: {}", e);
                Vec::new()
            }
        };

        let theme = match storage.get(THEME_KEY) {
            Ok(value) => Theme::from_slot(value.as_deref()),
            Err(_) => Theme::default(),
        };

        Self {
            storage,
            entries,
            theme,
        }
    }

    /// Create a new entry from the given fields and prepend it to the
    /// collection, so storage order stays newest-created-first.
    pub fn create(&mut self, fields: EntryFields) -> Result<Entry> {
        let fields = normalize(fields)?;
        let entry = Entry::new(fields);
        self.entries.insert(0, entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Replace all mutable fields of the entry matching `id`.
    pub fn update(&mut self, id: Uuid, fields: EntryFields) -> Result<Entry> {
        let fields = normalize(fields)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(BitacoraError::NotFound(id))?;
        entry.apply(fields);
        let updated = entry.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Remove the entry matching `id`. Returns `Ok(false)` when no such
    /// entry exists; nothing is written in that case.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The entries whose title contains `filter` as a case-insensitive
    /// substring (empty filter matches all), newest first by creation time.
    ///
    /// A pure derived view, recomputed per call.
    pub fn list(&self, filter: &str) -> Vec<Entry> {
        let needle = filter.to_lowercase();
        let mut matched: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.storage.set(THEME_KEY, theme.as_str())
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggle())?;
        Ok(self.theme)
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries).map_err(BitacoraError::Serialization)?;
        self.storage.set(ENTRIES_KEY, &raw)
    }
}

/// Trim title and notes; reject an empty trimmed title.
fn normalize(mut fields: EntryFields) -> Result<EntryFields> {
    let title = fields.title.trim();
    if title.is_empty() {
        return Err(BitacoraError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    fields.title = title.to_string();
    fields.notes = fields.notes.trim().to_string();
    Ok(fields)
}
