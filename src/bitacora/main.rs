use bitacora::api::BitacoraApi;
use bitacora::commands::theme::ThemeAction;
use bitacora::commands::{CmdMessage, MessageLevel};
use bitacora::dataset::Work;
use bitacora::error::{BitacoraError, Result};
use bitacora::form::Form;
use bitacora::index::DisplayEntry;
use bitacora::model::{Category, CategoryKind, Theme};
use bitacora::store::fs::FileStore;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api()?;

    match cli.command {
        Some(Commands::Add {
            title,
            category,
            date,
            rating,
            notes,
            season,
            episode,
        }) => handle_add(
            &mut api, title, category, date, rating, notes, season, episode,
        ),
        Some(Commands::List { search }) => handle_list(&api, search),
        Some(Commands::View { index }) => handle_view(&api, index),
        Some(Commands::Edit {
            index,
            title,
            category,
            date,
            rating,
            notes,
            season,
            episode,
        }) => handle_edit(
            &mut api, index, title, category, date, rating, notes, season, episode,
        ),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut api, index, yes),
        Some(Commands::Suggest { text }) => handle_suggest(&api, text),
        Some(Commands::Theme { mode }) => handle_theme(&mut api, mode),
        None => handle_list(&api, None),
    }
}

fn init_api() -> Result<BitacoraApi<FileStore>> {
    let data_dir = match std::env::var_os("BITACORA_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "bitacora", "bitacora")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| BitacoraError::Api("Could not determine data directory".to_string()))?,
    };
    Ok(BitacoraApi::new(FileStore::new(data_dir)))
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    api: &mut BitacoraApi<FileStore>,
    title: String,
    category: CategoryKind,
    date: Option<NaiveDate>,
    rating: f32,
    notes: String,
    season: Option<String>,
    episode: Option<String>,
) -> Result<()> {
    let mut form = Form::new();
    form.change_title(&title);
    form.category = category;
    if let Some(date) = date {
        form.date = date;
    }
    form.set_rating(rating);
    form.notes = notes;
    if let Some(season) = season {
        form.season = season;
    }
    if let Some(episode) = episode {
        form.episode = episode;
    }

    let result = api.add(&mut form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &BitacoraApi<FileStore>, search: Option<String>) -> Result<()> {
    let result = api.list(search.as_deref())?;
    print_entries(&result.listed, result.total);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(api: &BitacoraApi<FileStore>, index: usize) -> Result<()> {
    let result = api.view(index)?;
    for display in &result.listed {
        print_full_entry(display);
    }
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    api: &mut BitacoraApi<FileStore>,
    index: usize,
    title: Option<String>,
    category: Option<CategoryKind>,
    date: Option<NaiveDate>,
    rating: Option<f32>,
    notes: Option<String>,
    season: Option<String>,
    episode: Option<String>,
) -> Result<()> {
    let mut form = api.begin_edit(index)?;
    if let Some(title) = title {
        form.change_title(&title);
    }
    if let Some(category) = category {
        form.category = category;
    }
    if let Some(date) = date {
        form.date = date;
    }
    if let Some(rating) = rating {
        form.set_rating(rating);
    }
    if let Some(notes) = notes {
        form.notes = notes;
    }
    if let Some(season) = season {
        form.season = season;
    }
    if let Some(episode) = episode {
        form.episode = episode;
    }

    let result = api.update(&mut form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut BitacoraApi<FileStore>, index: usize, yes: bool) -> Result<()> {
    let result = api.delete(index, |entry| {
        if yes {
            return true;
        }
        print!("Delete \"{}\"? [y/N] ", entry.title);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim(), "y" | "Y" | "yes")
    })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_suggest(api: &BitacoraApi<FileStore>, text: String) -> Result<()> {
    let result = api.suggest(&text)?;
    if result.suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }
    for work in &result.suggestions {
        print_suggestion(work);
    }
    Ok(())
}

fn handle_theme(api: &mut BitacoraApi<FileStore>, mode: Option<String>) -> Result<()> {
    let action = match mode.as_deref() {
        None => ThemeAction::Show,
        Some("toggle") => ThemeAction::Toggle,
        Some("light") => ThemeAction::Set(Theme::Light),
        Some("dark") => ThemeAction::Set(Theme::Dark),
        Some(other) => {
            println!("Unknown theme: {} (expected light, dark, or toggle)", other);
            return Ok(());
        }
    };
    let result = api.theme(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_entries(entries: &[DisplayEntry], total: usize) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    println!("{}", format!("Entries ({})", total).dimmed());

    for display in entries {
        let entry = &display.entry;
        let idx_str = format!("{}. ", display.index);
        let badge = format!("[{}] ", entry.kind());
        let rating = format!(" {}/10", format_rating(entry.rating));
        let date = format!("  {}", entry.date);
        let time_ago = format_time_ago(entry.created_at);

        let title_content = title_with_series_tag(entry);
        let fixed_width =
            idx_str.width() + badge.width() + rating.width() + date.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let badge_colored = match entry.kind() {
            CategoryKind::Film => badge.yellow(),
            CategoryKind::Series => badge.magenta(),
            CategoryKind::Concert => badge.green(),
        };
        let rating_colored = if entry.rating >= 8.0 {
            rating.yellow()
        } else if entry.rating >= 5.0 {
            rating.normal()
        } else {
            rating.dimmed()
        };

        println!(
            "{}{}{}{}{}{}{}",
            idx_str,
            badge_colored,
            title_display,
            " ".repeat(padding),
            rating_colored,
            date.dimmed(),
            time_ago.dimmed()
        );
    }
}

fn print_full_entry(display: &DisplayEntry) {
    let entry = &display.entry;
    println!(
        "{} {} {}",
        display.index.to_string().yellow(),
        entry.title.bold(),
        format!("[{}]", entry.kind()).dimmed()
    );
    println!("--------------------------------");
    if let Category::Series { season, episode } = &entry.category {
        if !season.is_empty() || !episode.is_empty() {
            println!("Season {}  Episode {}", season, episode);
        }
    }
    println!("Rating: {}/10", format_rating(entry.rating));
    println!("Date:   {}", entry.date);
    if entry.notes.is_empty() {
        println!("{}", "No notes.".dimmed());
    } else {
        println!("{}", entry.notes);
    }
}

fn print_suggestion(work: &Work) {
    println!(
        "{}  {}",
        work.title.bold(),
        format!("{} • {}", work.year, work.category).dimmed()
    );
}

fn title_with_series_tag(entry: &bitacora::model::Entry) -> String {
    if let Category::Series { season, episode } = &entry.category {
        let mut tag = String::new();
        if !season.is_empty() {
            tag.push_str(&format!("T{}", season));
        }
        if !episode.is_empty() {
            if !tag.is_empty() {
                tag.push(' ');
            }
            tag.push_str(&format!("E{}", episode));
        }
        if !tag.is_empty() {
            return format!("{} ({})", entry.title, tag);
        }
    }
    entry.title.clone()
}

fn format_rating(rating: f32) -> String {
    if rating.fract() == 0.0 {
        format!("{:.0}", rating)
    } else {
        format!("{:.1}", rating)
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
