use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;

use crate::{AnalyzedRecord, StringFilter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("String already exists in the system")]
    Duplicate,

    #[error("String does not exist in the system")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Default)]
struct Inner {
    by_fingerprint: HashMap<String, AnalyzedRecord>,
    // creation order of fingerprints; listing follows this
    order: Vec<String>,
}

/// Holds exactly one record per distinct input string, keyed by its content
/// fingerprint. Value uniqueness and fingerprint uniqueness coincide: the
/// fingerprint is a pure function of the value.
///
/// Internally synchronized; handlers share it behind an `Arc` and call it
/// directly from concurrent requests.
pub struct RecordStore {
    inner: RwLock<Inner>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Analyze `value` and insert the resulting record.
    /// The uniqueness check and the insert happen under one write lock:
    /// of two concurrent inserts of the same value exactly one succeeds.
    pub fn insert(&self, value: &str) -> Result<AnalyzedRecord> {
        let record = AnalyzedRecord::new(value, Utc::now());

        let mut inner = self.inner.write();
        if inner.by_fingerprint.contains_key(&record.fingerprint) {
            return Err(StoreError::Duplicate);
        }
        inner.order.push(record.fingerprint.clone());
        inner
            .by_fingerprint
            .insert(record.fingerprint.clone(), record.clone());

        Ok(record)
    }

    pub fn get(&self, value: &str) -> Result<AnalyzedRecord> {
        let key = analysis::fingerprint(value);
        self.inner
            .read()
            .by_fingerprint
            .get(&key)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub fn delete(&self, value: &str) -> Result<()> {
        let key = analysis::fingerprint(value);

        let mut inner = self.inner.write();
        if inner.by_fingerprint.remove(&key).is_none() {
            return Err(StoreError::NotFound);
        }
        inner.order.retain(|fp| fp != &key);
        Ok(())
    }

    /// All records satisfying `filter`, in creation order.
    /// A single read lock gives the caller a consistent snapshot.
    pub fn list(&self, filter: &StringFilter) -> Vec<AnalyzedRecord> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|fp| inner.by_fingerprint.get(fp))
            .filter(|rec| filter.matches(rec))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
