use crate::dataset::Work;
use crate::index::DisplayEntry;
use crate::model::{Entry, Theme};

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod suggest;
pub mod theme;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Entry>,
    pub listed: Vec<DisplayEntry>,
    pub suggestions: Vec<&'static Work>,
    pub theme: Option<Theme>,
    pub total: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<DisplayEntry>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<&'static Work>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
