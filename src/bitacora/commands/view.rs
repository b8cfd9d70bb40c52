use crate::commands::helpers;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::journal::Journal;
use crate::store::Storage;

pub fn run<S: Storage>(journal: &Journal<S>, index: usize) -> Result<CmdResult> {
    let display = helpers::entry_at(journal, index)?;
    Ok(CmdResult::default().with_listed(vec![display]))
}
