use crate::error::{BitacoraError, Result};
use crate::index::{index_entries, DisplayEntry};
use crate::journal::Journal;
use crate::store::Storage;

pub fn indexed<S: Storage>(journal: &Journal<S>) -> Vec<DisplayEntry> {
    index_entries(journal.list(""))
}

/// Resolve a user-facing display index to the entry it currently names.
pub fn entry_at<S: Storage>(journal: &Journal<S>, index: usize) -> Result<DisplayEntry> {
    indexed(journal)
        .into_iter()
        .find(|de| de.index == index)
        .ok_or_else(|| BitacoraError::Api(format!("No entry at index {}", index)))
}
