use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::Store;

pub fn run(store: &mut Store, name: &str) -> Result<CmdResult> {
    let removed = store.delete(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record deleted: {}",
        removed.name
    )));
    Ok(result.with_record(removed))
}
