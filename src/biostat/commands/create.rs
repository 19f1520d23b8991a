use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiostatError, Result};
use crate::store::Store;
use crate::validate::{validate, RecordInput};

/// Create a record. The existence pre-check runs on the raw name before
/// the fields are validated: a duplicate is reported as a duplicate even
/// when the rest of the input is invalid.
pub fn run(store: &mut Store, input: &RecordInput) -> Result<CmdResult> {
    if let Some(existing) = store.find(&input.name) {
        return Err(BiostatError::AlreadyExists(existing.name.clone()));
    }

    let record = validate(input)?;
    store.create(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created: {}",
        record.name
    )));
    Ok(result.with_record(record))
}
