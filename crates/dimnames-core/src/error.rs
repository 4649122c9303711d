//! Error types for dimnames-core

use crate::name::Name;
use thiserror::Error;

/// Errors raised by name validation and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The trailing name of the left operand conflicts with the leading
    /// name of the right operand.
    #[error(
        "Dimension mismatch: cannot contract {} with {}",
        fmt_tuple(.left),
        fmt_tuple(.right)
    )]
    DimensionMismatch { left: Vec<Name>, right: Vec<Name> },

    /// A name was looked up in a tuple that does not contain it.
    #[error("Name {name} not found in {}", fmt_tuple(.names))]
    NameNotFound { name: Name, names: Vec<Name> },

    /// Label longer than the inline capacity.
    #[error("Axis label has {actual} characters, at most {max} are allowed")]
    TooLong { actual: usize, max: usize },
}

pub(crate) fn fmt_tuple(names: &[Name]) -> String {
    let inner: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    if inner.len() == 1 {
        format!("({},)", inner[0])
    } else {
        format!("({})", inner.join(", "))
    }
}

/// Result type for name operations
pub type Result<T> = std::result::Result<T, NameError>;
