//! Inverse and linear solves on named matrices.

use crate::array::{Named, NamedMatrix};
use crate::dispatch::{Operand, Rewrap};
use crate::error::Result;
use crate::lu;
use crate::scalar::LinalgScalar;
use dimnames_core::{inverse_names, ContractNames, Names};

impl<T: LinalgScalar> NamedMatrix<T> {
    /// Inverse, named with the two axis names swapped.
    ///
    /// # Errors
    /// `NotSquare` for a non-square matrix, `Singular` for a singular one.
    pub fn inv(&self) -> Result<NamedMatrix<T>> {
        let data = lu::inverse(self.data())?;
        Ok(Named::new(inverse_names(&self.names()), data))
    }

    /// Solve `A·X = B`.
    ///
    /// `X` is named as `inv(A) * B` would be: the inverse names of `A`
    /// contracted with the names of `B`. Names are checked before the
    /// factorization runs.
    pub fn solve<B>(
        &self,
        rhs: &B,
    ) -> Result<<<Names<2> as ContractNames<B::Names>>::Output as Rewrap<T>>::Output>
    where
        B: Operand<Elem = T>,
        Names<2>: ContractNames<B::Names>,
        <Names<2> as ContractNames<B::Names>>::Output: Rewrap<T>,
    {
        let names = inverse_names(&self.names()).contract_names(&rhs.operand_names())?;
        let x = lu::solve(self.data(), &rhs.operand_dense())?;
        Ok(names.rewrap(x))
    }
}
