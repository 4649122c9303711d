//! Name tuples: one name per array axis.

use crate::error::{fmt_tuple, NameError, Result};
use crate::name::Name;
use std::fmt;
use std::ops::Index;

/// Common interface of the name tuples attached to arrays.
pub trait NameTuple: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Number of axes.
    const RANK: usize;

    /// The all-wildcard tuple of this rank.
    fn wildcard() -> Self;

    /// Names in axis order.
    fn as_slice(&self) -> &[Name];

    /// Leading name (used as the right operand of a contraction). A rank-0
    /// tuple has no axes and reports the wildcard.
    fn leading(&self) -> Name {
        self.as_slice().first().copied().unwrap_or(Name::Wildcard)
    }

    /// Trailing name (used as the left operand of a contraction).
    fn trailing(&self) -> Name {
        self.as_slice().last().copied().unwrap_or(Name::Wildcard)
    }

    fn to_vec(&self) -> Vec<Name> {
        self.as_slice().to_vec()
    }
}

/// Ordered axis names of an `N`-dimensional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Names<const N: usize>([Name; N]);

impl<const N: usize> Names<N> {
    pub const fn new(names: [Name; N]) -> Self {
        Self(names)
    }

    /// Parse every label. `"_"` becomes the wildcard.
    ///
    /// # Errors
    /// Returns [`NameError::TooLong`] for an over-long label.
    pub fn parse(labels: [&str; N]) -> Result<Self> {
        let mut names = [Name::Wildcard; N];
        for (slot, label) in names.iter_mut().zip(labels) {
            *slot = Name::new(label)?;
        }
        Ok(Self(names))
    }

    pub fn as_array(&self) -> &[Name; N] {
        &self.0
    }

    pub fn into_array(self) -> [Name; N] {
        self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Name> {
        self.0.iter()
    }

    /// Axis index of `name`.
    ///
    /// Lookup is by equality, so the wildcard only finds a wildcard axis.
    ///
    /// # Errors
    /// Returns [`NameError::NameNotFound`] if no axis carries `name`.
    pub fn dim(&self, name: &Name) -> Result<usize> {
        self.0
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| NameError::NameNotFound {
                name: *name,
                names: self.0.to_vec(),
            })
    }

    /// Whether every axis is the wildcard.
    pub fn is_unnamed(&self) -> bool {
        self.0.iter().all(Name::is_wildcard)
    }
}

impl Names<2> {
    /// The tuple with both axes swapped.
    pub fn swapped(&self) -> Self {
        let [n1, n2] = self.0;
        Self([n2, n1])
    }
}

impl<const N: usize> NameTuple for Names<N> {
    const RANK: usize = N;

    fn wildcard() -> Self {
        Self([Name::Wildcard; N])
    }

    fn as_slice(&self) -> &[Name] {
        &self.0
    }
}

impl<const N: usize> Index<usize> for Names<N> {
    type Output = Name;

    fn index(&self, axis: usize) -> &Name {
        &self.0[axis]
    }
}

impl<const N: usize> From<[Name; N]> for Names<N> {
    fn from(names: [Name; N]) -> Self {
        Self(names)
    }
}

impl<const N: usize> TryFrom<[&str; N]> for Names<N> {
    type Error = NameError;

    fn try_from(labels: [&str; N]) -> Result<Self> {
        Self::parse(labels)
    }
}

impl<'a, const N: usize> IntoIterator for &'a Names<N> {
    type Item = &'a Name;
    type IntoIter = std::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize> fmt::Display for Names<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_tuple(&self.0))
    }
}

/// Name of a row vector (a transposed vector).
///
/// A row vector has one axis, like a vector, but it contracts from the left:
/// its only name is compared against the leading name of the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoNames(Names<1>);

impl CoNames {
    pub const fn new(name: Name) -> Self {
        Self(Names::new([name]))
    }

    /// The name of the vector this row vector transposes.
    pub fn names(&self) -> Names<1> {
        self.0
    }

    pub fn name(&self) -> Name {
        self.0[0]
    }
}

impl From<Names<1>> for CoNames {
    fn from(names: Names<1>) -> Self {
        Self(names)
    }
}

impl NameTuple for CoNames {
    const RANK: usize = 1;

    fn wildcard() -> Self {
        Self(Names::wildcard())
    }

    fn as_slice(&self) -> &[Name] {
        self.0.as_slice()
    }
}

impl fmt::Display for CoNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'", self.0)
    }
}
