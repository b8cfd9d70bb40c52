//! The entry form: transient edit-session state between the user and the
//! journal.
//!
//! A [`Form`] starts at its defaults, accumulates field edits and title
//! suggestions, and on submit dispatches to the journal as either a create
//! (no edit session) or an update (an entry is under edit). The form never
//! does I/O itself; delete confirmation reaches it as a callback.

use crate::dataset::{self, Work, FAMOUS_WORKS};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::{Category, CategoryKind, Entry, EntryFields};
use crate::store::Storage;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

const DEFAULT_RATING: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Form {
    pub editing_id: Option<Uuid>,
    pub title: String,
    pub category: CategoryKind,
    pub date: NaiveDate,
    pub rating: f32,
    pub notes: String,
    pub season: String,
    pub episode: String,
    pub suggestions: Vec<&'static Work>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            category: CategoryKind::Film,
            date: Local::now().date_naive(),
            rating: DEFAULT_RATING,
            notes: String::new(),
            season: String::new(),
            episode: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the title and refresh the suggestion list. Queries of one
    /// character or less clear it.
    pub fn change_title(&mut self, text: &str) {
        self.title = text.to_string();
        if text.chars().count() > 1 {
            self.suggestions = dataset::suggest(FAMOUS_WORKS, text);
        } else {
            self.suggestions.clear();
        }
    }

    /// Take title and category from a catalog suggestion. No other field
    /// is touched.
    pub fn select_suggestion(&mut self, work: &'static Work) {
        self.title = work.title.to_string();
        self.category = work.category;
        self.suggestions.clear();
    }

    /// Load every field from an existing entry and open an edit session
    /// targeting it. Season and episode fall back to empty text when the
    /// entry is not a series.
    pub fn begin_edit(&mut self, entry: &Entry) {
        self.editing_id = Some(entry.id);
        self.title = entry.title.clone();
        self.category = entry.kind();
        self.date = entry.date;
        self.rating = entry.rating;
        self.notes = entry.notes.clone();
        let (season, episode) = match &entry.category {
            Category::Series { season, episode } => (season.clone(), episode.clone()),
            _ => (String::new(), String::new()),
        };
        self.season = season;
        self.episode = episode;
    }

    /// Clamp to [0, 10] and snap to the 0.5 step.
    pub fn set_rating(&mut self, value: f32) {
        let clamped = value.clamp(0.0, 10.0);
        self.rating = (clamped * 2.0).round() / 2.0;
    }

    /// The field set this form would submit. Season and episode are carried
    /// only while the category is Series.
    pub fn fields(&self) -> EntryFields {
        let category = match self.category {
            CategoryKind::Film => Category::Film,
            CategoryKind::Series => Category::Series {
                season: self.season.clone(),
                episode: self.episode.clone(),
            },
            CategoryKind::Concert => Category::Concert,
        };
        EntryFields {
            title: self.title.clone(),
            category,
            date: self.date,
            rating: self.rating,
            notes: self.notes.clone(),
        }
    }

    /// Submit the form. An empty trimmed title is a silent no-op returning
    /// `Ok(None)` with the form untouched. Otherwise the journal is asked
    /// to update the entry under edit, or create a new one, and on success
    /// the form resets to defaults.
    pub fn submit<S: Storage>(&mut self, journal: &mut Journal<S>) -> Result<Option<Entry>> {
        if self.title.trim().is_empty() {
            return Ok(None);
        }
        let fields = self.fields();
        let entry = match self.editing_id {
            Some(id) => journal.update(id, fields)?,
            None => journal.create(fields)?,
        };
        self.reset();
        Ok(Some(entry))
    }

    /// Back to defaults: no edit session, no suggestions, today's date,
    /// category Film, rating 10.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Ask `confirm` whether to delete the entry matching `id`, and delete it
/// only on a yes. Declining, or a vanished id, changes nothing.
pub fn request_delete<S, F>(journal: &mut Journal<S>, id: Uuid, confirm: F) -> Result<bool>
where
    S: Storage,
    F: FnOnce(&Entry) -> bool,
{
    let entry = match journal.get(id) {
        Some(entry) => entry.clone(),
        None => return Ok(false),
    };
    if !confirm(&entry) {
        return Ok(false);
    }
    journal.delete(id)
}
