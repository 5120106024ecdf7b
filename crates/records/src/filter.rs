use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AnalyzedRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("{0} must be an integer")]
    InvalidInt(&'static str),

    #[error("invalid is_palindrome value")]
    InvalidBool,

    #[error("query must not be empty")]
    EmptyQuery,
}

/// Query-parameter strings exactly as they arrive on the wire.
/// Converted to a [`StringFilter`] at the boundary; never passed further in.
#[derive(Debug, Default, Deserialize)]
pub struct RawFilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// Parsed filter constraints. Absent constraints impose no restriction;
/// present ones are ANDed together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StringFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl StringFilter {
    /// Parse raw parameter strings, rejecting malformed values immediately
    pub fn from_raw(raw: &RawFilterParams) -> Result<Self, FilterError> {
        let is_palindrome = match raw.is_palindrome.as_deref() {
            None => None,
            Some(v) => match v.to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => return Err(FilterError::InvalidBool),
            },
        };

        Ok(Self {
            is_palindrome,
            min_length: parse_int(raw.min_length.as_deref(), "min_length")?,
            max_length: parse_int(raw.max_length.as_deref(), "max_length")?,
            word_count: parse_int(raw.word_count.as_deref(), "word_count")?,
            contains_character: raw
                .contains_character
                .clone()
                .filter(|s| !s.is_empty()),
        })
    }

    /// True iff `rec` satisfies every present constraint.
    /// `contains_character` is a case-insensitive substring test on the value.
    pub fn matches(&self, rec: &AnalyzedRecord) -> bool {
        let props = &rec.properties;

        if let Some(want) = self.is_palindrome {
            if props.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if (props.length as i64) < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if (props.length as i64) > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count as i64 != count {
                return false;
            }
        }
        if let Some(needle) = &self.contains_character {
            if !rec.value.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

fn parse_int(raw: Option<&str>, field: &'static str) -> Result<Option<i64>, FilterError> {
    match raw {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| FilterError::InvalidInt(field)),
    }
}
