use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form;
use crate::journal::Journal;
use crate::model::Entry;
use crate::store::Storage;
use uuid::Uuid;

pub fn run<S, F>(journal: &mut Journal<S>, id: Uuid, confirm: F) -> Result<CmdResult>
where
    S: Storage,
    F: FnOnce(&Entry) -> bool,
{
    let title = journal.get(id).map(|e| e.title.clone());
    let mut result = CmdResult::default();
    if form::request_delete(journal, id, confirm)? {
        result.add_message(CmdMessage::success(format!(
            "Deleted: {}",
            title.unwrap_or_default()
        )));
    } else {
        result.add_message(CmdMessage::info("Nothing deleted."));
    }
    Ok(result)
}
