use crate::commands::CmdResult;
use crate::error::{BiostatError, Result};
use crate::model::normalize_name;
use crate::store::Store;

pub fn run(store: &Store, name: &str) -> Result<CmdResult> {
    match store.find(name) {
        Some(record) => Ok(CmdResult::default().with_record(record.clone())),
        None => Err(BiostatError::NotFound(normalize_name(name))),
    }
}
