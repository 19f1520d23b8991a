//! # In-memory store
//!
//! The [`Store`] is the whole record collection for one invocation,
//! keyed by normalized name. It is backed by a `Vec` rather than a map:
//! the collection is small, lookups are a linear scan, and serialization
//! order falls out as insertion order, which keeps the backing file
//! stable across edits (an update replaces in place, it does not move
//! the row to the end).
//!
//! Key uniqueness is enforced by construction: [`Store::load`] collapses
//! duplicate names last-write-wins, and [`Store::create`] rejects a name
//! that is already present.

use crate::error::{BiostatError, Result};
use crate::model::{normalize_name, Record};

#[derive(Debug, Default)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from decoded records. Names are normalized on the way
    /// in (decoded rows bypass the validator) and duplicate normalized
    /// names are collapsed last-write-wins; the surviving record keeps the
    /// position where the name first appeared.
    pub fn load(records: Vec<Record>) -> Self {
        let mut store = Store::new();
        for mut record in records {
            record.name = normalize_name(&record.name);
            match store.position(&record.name) {
                Some(i) => store.records[i] = record,
                None => store.records.push(record),
            }
        }
        store
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == normalized)
    }

    /// Look up a record by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let key = normalize_name(name);
        self.records.iter().find(|r| r.name == key)
    }

    /// Insert a new record. The record's name is already normalized.
    pub fn create(&mut self, record: Record) -> Result<()> {
        if self.position(&record.name).is_some() {
            return Err(BiostatError::AlreadyExists(record.name));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the same normalized name, in place.
    pub fn update(&mut self, record: Record) -> Result<()> {
        match self.position(&record.name) {
            Some(i) => {
                self.records[i] = record;
                Ok(())
            }
            None => Err(BiostatError::NotFound(record.name)),
        }
    }

    /// Remove a record by name, returning it.
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let key = normalize_name(name);
        match self.position(&key) {
            Some(i) => Ok(self.records.remove(i)),
            None => Err(BiostatError::NotFound(key)),
        }
    }

    /// All records in insertion order, for serialization.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;

    fn record(name: &str, age: u32) -> Record {
        Record::new(name.into(), Sex::Female, age, 65.0, 140.0)
    }

    #[test]
    fn create_then_find_is_case_insensitive() {
        let mut store = Store::new();
        store.create(record("alice", 30)).unwrap();
        assert_eq!(store.find("ALICE").unwrap().name, "Alice");
        assert_eq!(store.find("alice").unwrap().age, 30);
        assert!(store.find("bob").is_none());
    }

    #[test]
    fn create_duplicate_fails_regardless_of_case() {
        let mut store = Store::new();
        store.create(record("Alice", 30)).unwrap();
        let err = store.create(record("aLICE", 40)).unwrap_err();
        assert!(matches!(err, BiostatError::AlreadyExists(ref n) if n == "Alice"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("alice").unwrap().age, 30);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = Store::new();
        store.create(record("Alice", 30)).unwrap();
        store.create(record("Bob", 40)).unwrap();
        store.update(record("alice", 31)).unwrap();

        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(store.find("Alice").unwrap().age, 31);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = Store::new();
        assert!(matches!(
            store.update(record("Ghost", 30)),
            Err(BiostatError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_and_returns_the_record() {
        let mut store = Store::new();
        store.create(record("Alice", 30)).unwrap();
        let removed = store.delete("ALICE").unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(store.is_empty());
    }

    #[test]
    fn delete_missing_is_not_found_and_does_not_mutate() {
        let mut store = Store::new();
        store.create(record("Alice", 30)).unwrap();
        let err = store.delete("Bob").unwrap_err();
        assert!(matches!(err, BiostatError::NotFound(ref n) if n == "Bob"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_collapses_duplicates_last_write_wins() {
        let store = Store::load(vec![
            record("Alice", 30),
            record("Bob", 40),
            record("alice", 35),
        ]);
        assert_eq!(store.len(), 2);
        // Last write wins, first-seen position kept.
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
        assert_eq!(store.find("Alice").unwrap().age, 35);
    }
}
