//! Operation descriptors
//!
//! Textual form, one per line in scripts:
//! `insert 5` / `i 5` / `i5`, `search 3` / `s 3`, `delete 7` / `d 7`,
//! `inorder`, `preorder`, `postorder`, `clear`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::TraversalOrder;

/// Errors raised while parsing operation text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseOperationError {
    /// Blank input
    #[error("empty operation")]
    Empty,

    /// Verb not recognised
    #[error("unknown operation '{0}'")]
    UnknownVerb(String),

    /// Verb requires a value that was not supplied
    #[error("operation '{0}' requires an integer value")]
    MissingValue(String),

    /// Value is not an integer
    #[error("invalid value '{value}' for '{verb}'")]
    InvalidValue {
        /// Operation verb
        verb: String,
        /// Offending text
        value: String,
    },

    /// Value supplied to a verb that takes none
    #[error("operation '{0}' takes no value")]
    UnexpectedValue(String),
}

/// One user-visible BST operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
#[cfg_attr(feature = "visualize", serde(tag = "kind", content = "value", rename_all = "lowercase"))]
pub enum Operation {
    /// Insert a value
    Insert(i64),
    /// Search for a value
    Search(i64),
    /// Delete a value
    Delete(i64),
    /// Depth-first traversal
    Traverse(TraversalOrder),
    /// Discard the tree and restart identities
    Clear,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert(v) => write!(f, "insert {}", v),
            Operation::Search(v) => write!(f, "search {}", v),
            Operation::Delete(v) => write!(f, "delete {}", v),
            Operation::Traverse(order) => write!(f, "{}", order),
            Operation::Clear => f.write_str("clear"),
        }
    }
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseOperationError::Empty);
        }

        // Accept both `insert 5` and the compact `i5`
        let split_at = s
            .find(|c: char| c.is_whitespace() || c == '-' || c.is_ascii_digit())
            .unwrap_or(s.len());
        let verb = s[..split_at].to_ascii_lowercase();
        let rest = s[split_at..].trim();

        let value = |verb: &str| -> Result<i64, ParseOperationError> {
            if rest.is_empty() {
                return Err(ParseOperationError::MissingValue(verb.to_string()));
            }
            rest.parse().map_err(|_| ParseOperationError::InvalidValue {
                verb: verb.to_string(),
                value: rest.to_string(),
            })
        };
        let no_value = |op: Operation| {
            if rest.is_empty() {
                Ok(op)
            } else {
                Err(ParseOperationError::UnexpectedValue(verb.clone()))
            }
        };

        match verb.as_str() {
            "insert" | "i" | "add" => value("insert").map(Operation::Insert),
            "search" | "s" | "find" => value("search").map(Operation::Search),
            "delete" | "d" | "remove" | "rm" => value("delete").map(Operation::Delete),
            "clear" => no_value(Operation::Clear),
            other => match other.parse::<TraversalOrder>() {
                Ok(order) => no_value(Operation::Traverse(order)),
                Err(_) => Err(ParseOperationError::UnknownVerb(other.to_string())),
            },
        }
    }
}
