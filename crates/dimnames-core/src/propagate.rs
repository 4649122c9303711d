//! Output names of linear-algebra operations.
//!
//! Every function here is pure: it maps input name tuples to the names of
//! the result and never looks at numeric data.

use crate::error::Result;
use crate::name::Name;
use crate::names::{CoNames, NameTuple, Names};
use crate::validate::check_contraction;

/// Names of a matrix product `self * rhs`.
///
/// Implemented only for rank combinations that have a product:
///
/// | left     | right | result          |
/// |----------|-------|-----------------|
/// | matrix   | vector | `(a₁,)`        |
/// | matrix   | matrix | `(a₁, b₂)`     |
/// | vector   | matrix | `(a₁, b₂)`     |
/// | covector | vector | none (scalar)  |
/// | covector | matrix | `(b₂,)` as a covector |
///
/// A vector times a vector has no implementation and does not compile.
pub trait ContractNames<Rhs: NameTuple>: NameTuple {
    /// Names of the product. `()` for a scalar result.
    type Output: Copy + std::fmt::Debug;

    /// Validate the contracted names and compute the result names.
    ///
    /// # Errors
    /// Returns [`crate::NameError::DimensionMismatch`] if the trailing name of
    /// `self` conflicts with the leading name of `rhs`.
    fn contract_names(&self, rhs: &Rhs) -> Result<Self::Output> {
        check_contraction(self, rhs)?;
        let out = self.contracted_names(rhs);
        log::trace!("{:?} * {:?} -> {:?}", self.as_slice(), rhs.as_slice(), out);
        Ok(out)
    }

    /// Result names without validation.
    fn contracted_names(&self, rhs: &Rhs) -> Self::Output;
}

impl ContractNames<Names<1>> for Names<2> {
    type Output = Names<1>;

    fn contracted_names(&self, _rhs: &Names<1>) -> Names<1> {
        Names::new([self[0]])
    }
}

impl ContractNames<Names<2>> for Names<2> {
    type Output = Names<2>;

    fn contracted_names(&self, rhs: &Names<2>) -> Names<2> {
        Names::new([self[0], rhs[1]])
    }
}

impl ContractNames<Names<2>> for Names<1> {
    type Output = Names<2>;

    fn contracted_names(&self, rhs: &Names<2>) -> Names<2> {
        Names::new([self[0], rhs[1]])
    }
}

impl ContractNames<Names<1>> for CoNames {
    type Output = ();

    fn contracted_names(&self, _rhs: &Names<1>) {}
}

impl ContractNames<Names<2>> for CoNames {
    type Output = CoNames;

    fn contracted_names(&self, rhs: &Names<2>) -> CoNames {
        CoNames::new(rhs[1])
    }
}

/// Names of the inverse of a matrix named `(n1, n2)`: `(n2, n1)`.
///
/// Inversion swaps the roles of the input and output space. Squareness is
/// not checked here.
pub fn inverse_names(names: &Names<2>) -> Names<2> {
    names.swapped()
}

/// Names of a covariance/correlation-style reduction along `dim`.
///
/// The result is square and indexed by the surviving axis on both sides:
/// reducing axis 0 of `(n1, n2)` gives `(n2, n2)`, reducing axis 1 gives
/// `(n1, n1)`. Any other axis gives `(_, _)`.
pub fn symmetric_names(names: &Names<2>, dim: usize) -> Names<2> {
    match dim {
        0 => Names::new([names[1], names[1]]),
        1 => Names::new([names[0], names[0]]),
        _ => Names::new([Name::Wildcard, Name::Wildcard]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameError;

    fn names<const N: usize>(labels: [&str; N]) -> Names<N> {
        Names::parse(labels).unwrap()
    }

    #[test]
    fn test_matrix_times_matrix() {
        let out = names(["i", "j"]).contract_names(&names(["j", "k"])).unwrap();
        assert_eq!(out, names(["i", "k"]));
    }

    #[test]
    fn test_matrix_times_vector() {
        let out = names(["i", "j"]).contract_names(&names(["j"])).unwrap();
        assert_eq!(out, names(["i"]));
    }

    #[test]
    fn test_vector_times_matrix() {
        let out = names(["i"]).contract_names(&names(["_", "k"])).unwrap();
        assert_eq!(out, names(["i", "k"]));
    }

    #[test]
    fn test_covector_times_vector() {
        let co = CoNames::from(names(["k"]));
        assert!(co.contract_names(&names(["k"])).is_ok());
        assert!(matches!(
            co.contract_names(&names(["m"])),
            Err(NameError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_covector_times_matrix() {
        let co = CoNames::from(names(["sensor"]));
        let out = co.contract_names(&names(["sensor", "feature"])).unwrap();
        assert_eq!(out, CoNames::from(names(["feature"])));

        assert!(co.contract_names(&names(["time", "feature"])).is_err());
        let out = co.contract_names(&names(["_", "_"])).unwrap();
        assert_eq!(out.name(), Name::Wildcard);
    }

    #[test]
    fn test_wildcard_result_names_are_kept() {
        let out = names(["_", "j"]).contract_names(&names(["j", "_"])).unwrap();
        assert_eq!(out, Names::<2>::wildcard());
    }

    #[test]
    fn test_mismatch() {
        let err = names(["i", "j"])
            .contract_names(&names(["k", "l"]))
            .unwrap_err();
        assert!(matches!(err, NameError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_inverse_names() {
        let n = names(["r", "c"]);
        assert_eq!(inverse_names(&n), names(["c", "r"]));
        assert_eq!(inverse_names(&inverse_names(&n)), n);
    }

    #[test]
    fn test_symmetric_names() {
        let n = names(["x", "y"]);
        assert_eq!(symmetric_names(&n, 0), names(["y", "y"]));
        assert_eq!(symmetric_names(&n, 1), names(["x", "x"]));
        assert_eq!(symmetric_names(&n, 2), Names::<2>::wildcard());
    }
}
