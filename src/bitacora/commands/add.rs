use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::Form;
use crate::journal::Journal;
use crate::store::Storage;

pub fn run<S: Storage>(journal: &mut Journal<S>, form: &mut Form) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match form.submit(journal)? {
        Some(entry) => {
            result.add_message(CmdMessage::success(format!(
                "Logged: {} ({})",
                entry.title,
                entry.kind()
            )));
            result.affected.push(entry);
        }
        None => result.add_message(CmdMessage::warning("Title is required.")),
    }
    Ok(result)
}
