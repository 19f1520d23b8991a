//! # CSV codec
//!
//! Serializes the whole store to a comma-delimited file with a header
//! row (`name,sex,age,height,weight`) and reads it back. The format is
//! symmetric and stable; fields are quoted by the `csv` crate when they
//! contain the delimiter.
//!
//! - A missing file reads as an empty collection, so the first create
//!   needs no seed file.
//! - Reads trim surrounding whitespace, which also accepts files written
//!   by older tools that padded the delimiter with tabs.
//! - Writes go to a `.tmp` sibling first and are renamed over the
//!   target, so a crash mid-write leaves the previous file intact.

use crate::error::{BiostatError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Column order is fixed by `Record`'s field order; the header is written
/// explicitly so an emptied store still round-trips.
const HEADERS: [&str; 5] = ["name", "sex", "age", "height", "weight"];

/// Read all records from the backing file. A missing file reads as empty.
pub fn read(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Write all records to the backing file, atomically replacing it: the
/// new contents go to a `.tmp` sibling which is renamed over the target.
pub fn write(path: &Path, records: &[Record]) -> Result<()> {
    let tmp_path = tmp_sibling(path);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp_path)
        .map_err(|e| write_failure(path, e))?;
    writer
        .write_record(HEADERS)
        .map_err(|e| write_failure(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| write_failure(path, e))?;
    }
    writer.flush().map_err(|source| BiostatError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    drop(writer);

    fs::rename(&tmp_path, path).map_err(|source| BiostatError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_failure(path: &Path, err: csv::Error) -> BiostatError {
    BiostatError::WriteFailure {
        path: path.to_path_buf(),
        source: std::io::Error::other(err),
    }
}
