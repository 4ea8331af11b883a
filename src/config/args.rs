//! Flag/value token parsing
//!
//! Invocation tokens alternate between a flag name and its value, e.g.
//! `fileName users.json operation list`.

use crate::error::{ArgumentError, ArgumentResult};
use std::collections::HashMap;

/// Parsed flag values for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, String>,
}

impl Arguments {
    /// Get a flag value
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    /// Number of flags that carried a value
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no flag carried a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Arguments {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse alternating flag/value tokens
///
/// Flags whose value is empty are left out. A repeated flag keeps its last
/// value.
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> ArgumentResult<Arguments> {
    let mut values = HashMap::new();

    for pair in tokens.chunks(2) {
        let flag = pair[0].as_ref();
        let value = match pair.get(1) {
            Some(value) => value.as_ref(),
            None => return Err(ArgumentError::DanglingFlag(flag.to_string())),
        };

        if !value.is_empty() {
            values.insert(flag.to_string(), value.to_string());
        }
    }

    Ok(Arguments { values })
}
