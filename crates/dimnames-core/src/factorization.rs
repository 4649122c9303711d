//! Names of factorization components.
//!
//! A factorization of a matrix named `(n1, n2)` produces factors whose axes
//! only partially correspond to the original ones. Each table below derives
//! the names of every named field from the original pair; axes without a
//! counterpart (the internal "bond" axis) become the wildcard.
//!
//! | kind | field | names      |
//! |------|-------|------------|
//! | LU   | L     | `(n1, _)`  |
//! | LU   | U     | `(_, n2)`  |
//! | LU   | P     | `(n1, n1)` |
//! | LU   | p     | `(n1,)`    |
//! | LQ   | L     | `(n1, _)`  |
//! | LQ   | Q     | `(_, n2)`  |
//! | SVD  | U     | `(n1, _)`  |
//! | SVD  | V     | `(_, n2)`  |
//! | SVD  | Vt    | `(n2, _)`  |
//!
//! Singular values of an SVD are never named.

use crate::name::Name;
use crate::names::Names;

const W: Name = Name::Wildcard;

/// Derived names of an LU factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuNames {
    pub l: Names<2>,
    pub u: Names<2>,
    pub p: Names<2>,
    pub perm: Names<1>,
}

impl LuNames {
    pub fn derive(original: &Names<2>) -> Self {
        let [n1, n2] = *original.as_array();
        Self {
            l: Names::new([n1, W]),
            u: Names::new([W, n2]),
            p: Names::new([n1, n1]),
            perm: Names::new([n1]),
        }
    }
}

/// Derived names of an LQ factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LqNames {
    pub l: Names<2>,
    pub q: Names<2>,
}

impl LqNames {
    pub fn derive(original: &Names<2>) -> Self {
        let [n1, n2] = *original.as_array();
        Self {
            l: Names::new([n1, W]),
            q: Names::new([W, n2]),
        }
    }
}

/// Derived names of a singular value decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvdNames {
    pub u: Names<2>,
    pub v: Names<2>,
    pub vt: Names<2>,
}

impl SvdNames {
    pub fn derive(original: &Names<2>) -> Self {
        let [n1, n2] = *original.as_array();
        Self {
            u: Names::new([n1, W]),
            v: Names::new([W, n2]),
            vt: Names::new([n2, W]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_originals_stay_wildcard() {
        let original = Names::<2>::new([W, W]);
        let lu = LuNames::derive(&original);
        assert!(lu.l.is_unnamed());
        assert!(lu.u.is_unnamed());
        assert!(lu.p.is_unnamed());
        assert!(lu.perm.is_unnamed());
    }
}
