//! User record type

use crate::error::{RecmanError, Result};
use serde::{Deserialize, Serialize};

/// A single user record
///
/// Fields missing from the JSON input decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Record {
    /// Unique identifier; an empty id marks an uninitialized record
    pub id: String,

    /// Free-form email address
    pub email: String,

    /// Age in years
    pub age: i64,
}

impl Record {
    /// Create a new record
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Record {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Decode a record from its JSON object form
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RecmanError::Decoding(format!("invalid item: {}", e)))
    }

    /// Whether this record is uninitialized (has no id)
    pub fn is_absent(&self) -> bool {
        self.id.is_empty()
    }

    /// Serialize to a JSON object, or to an empty string when the record
    /// has no id
    pub fn to_json(&self) -> Result<String> {
        if self.is_absent() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(self)?)
    }
}
