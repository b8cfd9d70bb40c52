use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BitacoraError, Result};
use crate::form::Form;
use crate::journal::Journal;
use crate::store::Storage;

pub fn run<S: Storage>(journal: &mut Journal<S>, form: &mut Form) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match form.submit(journal) {
        Ok(Some(entry)) => {
            result.add_message(CmdMessage::success(format!("Updated: {}", entry.title)));
            result.affected.push(entry);
        }
        Ok(None) => result.add_message(CmdMessage::warning("Title is required.")),
        // The entry vanished between edit start and submit. Silent no-op.
        Err(BitacoraError::NotFound(_)) => {}
        Err(e) => return Err(e),
    }
    Ok(result)
}
