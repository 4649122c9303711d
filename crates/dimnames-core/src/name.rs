//! A single axis name.

use crate::error::NameError;
use crate::smallstring::{SmallString, SmallStringError};
use std::fmt;
use std::str::FromStr;

/// Maximum number of characters in an axis label.
pub const MAX_NAME_LEN: usize = 16;

/// Text that parses to [`Name::Wildcard`].
pub const WILDCARD_STR: &str = "_";

/// Storage for a concrete axis label.
pub type Label = SmallString<MAX_NAME_LEN>;

/// The name of one array axis.
///
/// A name is either a concrete label or the wildcard, which stands for an
/// unconstrained axis. The wildcard is compatible with every name during
/// validation, but it is never *equal* to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Name {
    #[default]
    Wildcard,
    Label(Label),
}

impl Name {
    /// Parse a name. `"_"` is the wildcard.
    ///
    /// # Errors
    /// Returns [`NameError::TooLong`] if the label exceeds [`MAX_NAME_LEN`].
    pub fn new(s: &str) -> Result<Self, NameError> {
        if s == WILDCARD_STR {
            return Ok(Name::Wildcard);
        }
        let label = Label::from_str(s).map_err(|e| match e {
            SmallStringError::TooLong { actual, max } => NameError::TooLong { actual, max },
        })?;
        Ok(Name::Label(label))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Name::Wildcard)
    }

    /// The label, or `None` for the wildcard.
    pub fn label(&self) -> Option<&Label> {
        match self {
            Name::Label(label) => Some(label),
            Name::Wildcard => None,
        }
    }

    /// Whether the two names may refer to the same axis.
    ///
    /// True if they are equal or either one is the wildcard.
    pub fn matches(&self, other: &Name) -> bool {
        self.is_wildcard() || other.is_wildcard() || self == other
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::new(s)
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Name::new(s)
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Name::Wildcard => *other == WILDCARD_STR,
            Name::Label(label) => label.eq_str(other),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Name::Wildcard => f.write_str(WILDCARD_STR),
            Name::Label(label) => write!(f, "{label}"),
        }
    }
}
