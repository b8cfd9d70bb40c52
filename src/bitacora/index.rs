//! Display indexing: stable 1-based positions over the newest-first
//! listing, the handle the CLI uses to address entries. Index 1 is always
//! the most recently created entry.

use crate::model::Entry;

#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

/// Assign canonical display indexes: sort by creation time descending and
/// number from 1.
pub fn index_entries(mut entries: Vec<Entry>) -> Vec<DisplayEntry> {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            index: i + 1,
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, EntryFields};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn entry(title: &str, day: u32) -> Entry {
        let mut entry = Entry::new(EntryFields {
            title: title.to_string(),
            category: Category::Film,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            rating: 9.0,
            notes: String::new(),
        });
        entry.created_at = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        entry
    }

    #[test]
    fn newest_entry_gets_index_one() {
        let older = entry("Older", 1);
        let newer = entry("Newer", 2);

        // Hand the list over oldest-first to prove indexing re-sorts.
        let indexed = index_entries(vec![older, newer]);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].entry.title, "Newer");
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].entry.title, "Older");
    }

    #[test]
    fn empty_listing_stays_empty() {
        assert!(index_entries(Vec::new()).is_empty());
    }
}
