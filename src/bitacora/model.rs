use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The three kinds of experience a journal records, without payload.
///
/// Used wherever only the discriminant matters: the reference dataset,
/// the form's category selector, and CLI argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Film,
    Series,
    Concert,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Film => write!(f, "Film"),
            CategoryKind::Series => write!(f, "Series"),
            CategoryKind::Concert => write!(f, "Concert"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "film" => Ok(CategoryKind::Film),
            "series" => Ok(CategoryKind::Series),
            "concert" => Ok(CategoryKind::Concert),
            other => Err(format!(
                "unknown category '{}' (expected film, series, or concert)",
                other
            )),
        }
    }
}

/// The category of an entry. The Series variant carries the season and
/// episode, so they cannot exist on a film or a concert.
///
/// Serialized internally tagged: the tag lands in the record as the
/// `category` field, and `season`/`episode` appear only for Series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum Category {
    Film,
    Series {
        #[serde(default)]
        season: String,
        #[serde(default)]
        episode: String,
    },
    Concert,
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Film => CategoryKind::Film,
            Category::Series { .. } => CategoryKind::Series,
            Category::Concert => CategoryKind::Concert,
        }
    }
}

/// One logged cultural experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub category: Category,
    pub date: NaiveDate,
    pub rating: f32,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Build a fresh entry from validated fields, stamping id and creation
    /// time. Callers go through [`crate::journal::Journal::create`], which
    /// owns validation.
    pub fn new(fields: EntryFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            category: fields.category,
            date: fields.date,
            rating: fields.rating,
            notes: fields.notes,
            created_at: Utc::now(),
        }
    }

    /// Replace every mutable field. `id` and `created_at` stay untouched.
    pub fn apply(&mut self, fields: EntryFields) {
        self.title = fields.title;
        self.category = fields.category;
        self.date = fields.date;
        self.rating = fields.rating;
        self.notes = fields.notes;
    }

    pub fn kind(&self) -> CategoryKind {
        self.category.kind()
    }
}

/// The mutable field set submitted to the journal on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub title: String,
    pub category: Category,
    pub date: NaiveDate,
    pub rating: f32,
    pub notes: String,
}

/// The persisted color theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a raw theme slot. Anything other than `"light"`,
    /// including an absent slot, means dark.
    pub fn from_slot(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
