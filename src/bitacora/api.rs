//! # API Facade
//!
//! The single entry point for all bitacora operations, regardless of the
//! UI driving them. A thin dispatch layer: it normalizes inputs (display
//! indexes to entries) and hands off to the command functions. No business
//! logic, no I/O, no presentation.
//!
//! `BitacoraApi<S: Storage>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.

use crate::commands;
use crate::commands::theme::ThemeAction;
use crate::error::Result;
use crate::form::Form;
use crate::journal::Journal;
use crate::model::Entry;
use crate::store::Storage;

pub struct BitacoraApi<S: Storage> {
    journal: Journal<S>,
}

impl<S: Storage> BitacoraApi<S> {
    /// Load the journal from storage and wrap it. This is the process's
    /// one startup read.
    pub fn new(storage: S) -> Self {
        Self {
            journal: Journal::load(storage),
        }
    }

    pub fn add(&mut self, form: &mut Form) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.journal, form)
    }

    pub fn update(&mut self, form: &mut Form) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.journal, form)
    }

    /// Open an edit session for the entry at a display index.
    pub fn begin_edit(&self, index: usize) -> Result<Form> {
        let display = commands::helpers::entry_at(&self.journal, index)?;
        let mut form = Form::new();
        form.begin_edit(&display.entry);
        Ok(form)
    }

    pub fn delete<F>(&mut self, index: usize, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&Entry) -> bool,
    {
        let display = commands::helpers::entry_at(&self.journal, index)?;
        commands::delete::run(&mut self.journal, display.entry.id, confirm)
    }

    pub fn list(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.journal, filter)
    }

    pub fn view(&self, index: usize) -> Result<commands::CmdResult> {
        commands::view::run(&self.journal, index)
    }

    pub fn suggest(&self, text: &str) -> Result<commands::CmdResult> {
        let mut form = Form::new();
        commands::suggest::run(&mut form, text)
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(&mut self.journal, action)
    }
}

pub use crate::commands::theme::ThemeAction as ThemeCommand;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> BitacoraApi<InMemoryStore> {
        BitacoraApi::new(InMemoryStore::new())
    }

    #[test]
    fn add_list_edit_delete_through_the_facade() {
        let mut api = api();

        let mut form = Form::new();
        form.change_title("Matrix");
        api.add(&mut form).unwrap();
        assert_eq!(api.list(None).unwrap().listed.len(), 1);

        let mut edit = api.begin_edit(1).unwrap();
        edit.change_title("Matrix Reloaded");
        api.update(&mut edit).unwrap();
        assert_eq!(api.view(1).unwrap().listed[0].entry.title, "Matrix Reloaded");

        api.delete(1, |_| true).unwrap();
        assert!(api.list(None).unwrap().listed.is_empty());
    }

    #[test]
    fn begin_edit_rejects_a_bad_index() {
        let api = api();
        assert!(api.begin_edit(1).is_err());
    }
}
