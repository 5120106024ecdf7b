use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored analyzed string. Immutable after creation: every derived field
/// is a pure function of `value`, computed exactly once in the constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedRecord {
    /// Content fingerprint; doubles as the external record id
    #[serde(rename = "id")]
    pub fingerprint: String,
    pub value: String,
    pub properties: Properties,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<char, u64>,
}

impl Properties {
    pub fn compute(value: &str) -> Self {
        Self {
            length: analysis::length(value),
            is_palindrome: analysis::is_palindrome(value),
            unique_characters: analysis::unique_characters(value),
            word_count: analysis::word_count(value),
            sha256_hash: analysis::fingerprint(value),
            character_frequency_map: analysis::frequency_map(value),
        }
    }
}

impl AnalyzedRecord {
    pub fn new(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = Properties::compute(&value);

        Self {
            fingerprint: properties.sha256_hash.clone(),
            value,
            properties,
            created_at,
        }
    }
}
