//! Invocation configuration types
//!
//! An [`Invocation`] is the typed form of the flag map: it is built once
//! from [`Arguments`] and handed to the dispatcher by value.

use crate::config::Arguments;
use crate::error::{ArgumentError, ArgumentResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Flag naming the store file
pub const FILE_NAME_FLAG: &str = "fileName";

/// Flag naming the operation
pub const OPERATION_FLAG: &str = "operation";

/// Flag carrying a JSON-encoded record
pub const ITEM_FLAG: &str = "item";

/// Flag carrying a record id
pub const ID_FLAG: &str = "id";

/// Operation requested on the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    List,
    FindById,
}

impl Operation {
    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::List => "list",
            Operation::FindById => "findById",
        }
    }

    /// Whether the operation changes the store (and so saves it)
    pub fn is_mutation(&self) -> bool {
        matches!(self, Operation::Add | Operation::Remove)
    }
}

impl FromStr for Operation {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "remove" => Ok(Operation::Remove),
            "list" => Ok(Operation::List),
            "findById" => Ok(Operation::FindById),
            other => Err(ArgumentError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path of the JSON store file
    pub file_name: PathBuf,

    /// Requested operation
    pub operation: Operation,

    /// JSON-encoded record for `add`
    pub item: Option<String>,

    /// Target id for `remove` and `findById`
    pub id: Option<String>,
}

impl Invocation {
    /// Build an invocation from parsed flags
    ///
    /// `fileName` is checked before `operation`.
    pub fn from_args(args: &Arguments) -> ArgumentResult<Self> {
        let file_name = args
            .get(FILE_NAME_FLAG)
            .ok_or(ArgumentError::Missing(FILE_NAME_FLAG))?;
        let operation = args
            .get(OPERATION_FLAG)
            .ok_or(ArgumentError::Missing(OPERATION_FLAG))?
            .parse()?;

        Ok(Invocation {
            file_name: PathBuf::from(file_name),
            operation,
            item: args.get(ITEM_FLAG).map(str::to_string),
            id: args.get(ID_FLAG).map(str::to_string),
        })
    }

    /// The `item` value, required by `add`
    pub fn require_item(&self) -> ArgumentResult<&str> {
        self.item.as_deref().ok_or(ArgumentError::Missing(ITEM_FLAG))
    }

    /// The `id` value, required by `remove` and `findById`
    pub fn require_id(&self) -> ArgumentResult<&str> {
        self.id.as_deref().ok_or(ArgumentError::Missing(ID_FLAG))
    }
}
