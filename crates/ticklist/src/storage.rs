//! Persistence of the todo list.
//!
//! The list is stored under a single key as a JSON array of
//! `{"title": string, "date": integer}` records, newest first.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Todo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTodo {
    pub title: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub date: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to read key `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write key `{key}`: {message}")]
    Write { key: String, message: String },
}

/// A string key-value store.
pub trait Storage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Decode a persisted list. Anything that is not an array of complete
/// records decodes to an empty list.
pub fn decode(raw: Option<&str>) -> Vec<StoredTodo> {
    raw.and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_default()
}

pub fn encode(todos: &[Todo]) -> String {
    let records: Vec<StoredTodo> = todos.iter().map(Todo::to_stored).collect();
    encode_records(&records)
}

pub fn encode_records(records: &[StoredTodo]) -> String {
    // A Vec of plain string/integer structs always serializes.
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_owned())
}

/// In-memory storage, for tests and hosts without a browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Make every following `save` fail, like a full quota would.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_owned(),
                message: "quota exceeded".to_owned(),
            });
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
