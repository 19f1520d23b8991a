use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiostatError, Result};
use crate::model::normalize_name;
use crate::store::Store;
use crate::validate::{validate, RecordInput};

/// Update a record. The existence pre-check runs on the raw name before
/// validation, so an unknown name is reported as such even when the rest
/// of the input is invalid. The stored record is replaced wholesale with
/// a freshly validated one.
pub fn run(store: &mut Store, input: &RecordInput) -> Result<CmdResult> {
    if store.find(&input.name).is_none() {
        return Err(BiostatError::NotFound(normalize_name(&input.name)));
    }

    let record = validate(input)?;
    store.update(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated: {}",
        record.name
    )));
    Ok(result.with_record(record))
}
