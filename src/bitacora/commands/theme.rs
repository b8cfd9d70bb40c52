use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::journal::Journal;
use crate::model::Theme;
use crate::store::Storage;

#[derive(Debug, Clone, Copy)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

pub fn run<S: Storage>(journal: &mut Journal<S>, action: ThemeAction) -> Result<CmdResult> {
    let theme = match action {
        ThemeAction::Show => journal.theme(),
        ThemeAction::Set(theme) => {
            journal.set_theme(theme)?;
            theme
        }
        ThemeAction::Toggle => journal.toggle_theme()?,
    };
    let mut result = CmdResult::default().with_theme(theme);
    result.add_message(CmdMessage::info(format!("Theme: {}", theme.as_str())));
    Ok(result)
}
