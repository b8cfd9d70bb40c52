use bitacora::model::CategoryKind;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bita")]
#[command(about = "A personal log of films, series, and concerts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a new entry
    #[command(alias = "a")]
    Add {
        /// Title of the work
        title: String,

        /// Category: film, series, or concert
        #[arg(short, long, default_value = "film")]
        category: CategoryKind,

        /// Date watched or attended (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Rating from 0 to 10, in steps of 0.5
        #[arg(short, long, value_parser = parse_rating, default_value_t = 10.0)]
        rating: f32,

        /// Notes or a short review
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Season (series only)
        #[arg(long)]
        season: Option<String>,

        /// Episode (series only)
        #[arg(long)]
        episode: Option<String>,
    },

    /// List entries, newest first
    #[command(alias = "ls")]
    List {
        /// Show only titles containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// View one entry in full
    #[command(alias = "v")]
    View {
        /// Index of the entry (1 = newest)
        index: usize,
    },

    /// Edit an entry
    #[command(alias = "e")]
    Edit {
        /// Index of the entry (1 = newest)
        index: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New category: film, series, or concert
        #[arg(short, long)]
        category: Option<CategoryKind>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// New rating from 0 to 10, in steps of 0.5
        #[arg(short, long, value_parser = parse_rating)]
        rating: Option<f32>,

        /// New notes
        #[arg(short, long)]
        notes: Option<String>,

        /// New season (series only)
        #[arg(long)]
        season: Option<String>,

        /// New episode (series only)
        #[arg(long)]
        episode: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Index of the entry (1 = newest)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show catalog suggestions for a title
    Suggest {
        /// Partial title to match
        text: String,
    },

    /// Show or set the color theme (light, dark, toggle)
    Theme {
        /// light, dark, or toggle; omit to show the current theme
        mode: Option<String>,
    },
}

fn parse_rating(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("invalid rating: {}", s))?;
    if !(0.0..=10.0).contains(&value) {
        return Err(format!("rating must be between 0 and 10, got {}", value));
    }
    Ok(value)
}
