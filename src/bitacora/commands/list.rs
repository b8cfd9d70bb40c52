use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_entries;
use crate::journal::Journal;
use crate::store::Storage;

pub fn run<S: Storage>(journal: &Journal<S>, filter: Option<&str>) -> Result<CmdResult> {
    let entries = journal.list(filter.unwrap_or(""));
    let mut result = CmdResult::default().with_listed(index_entries(entries));
    result.total = journal.len();
    Ok(result)
}
