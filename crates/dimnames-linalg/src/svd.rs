//! Thin singular value decomposition A = U·diag(S)·Vᴴ.

use crate::error::Result;
use crate::matrix;
use crate::scalar::LinalgScalar;
use mdarray::{DSlice, DTensor};

/// Thin SVD of an m×n matrix with k = min(m, n).
#[derive(Debug, Clone)]
pub struct Svd<T: LinalgScalar> {
    u: DTensor<T, 2>,
    s: Vec<T::Real>,
    vt: DTensor<T, 2>,
}

impl<T: LinalgScalar> Svd<T> {
    pub fn from_parts(u: DTensor<T, 2>, s: Vec<T::Real>, vt: DTensor<T, 2>) -> Self {
        Self { u, s, vt }
    }

    pub fn into_parts(self) -> (DTensor<T, 2>, Vec<T::Real>, DTensor<T, 2>) {
        (self.u, self.s, self.vt)
    }

    /// Left singular vectors (m×k).
    pub fn u(&self) -> &DTensor<T, 2> {
        &self.u
    }

    /// Singular values in descending order.
    pub fn s(&self) -> &[T::Real] {
        &self.s
    }

    /// Right singular vectors (n×k).
    pub fn v(&self) -> DTensor<T, 2> {
        matrix::adjoint(&self.vt)
    }

    /// Conjugate-transposed right singular vectors (k×n).
    pub fn vt(&self) -> &DTensor<T, 2> {
        &self.vt
    }
}

/// Decompose `a`. The input is consumed.
pub fn svd_inplace<T: LinalgScalar>(mut a: DTensor<T, 2>) -> Result<Svd<T>> {
    let (m, n) = (a.dim(0), a.dim(1));
    let k = m.min(n);

    let a_slice: &mut DSlice<T, 2> = &mut a;
    let decomp = T::svd(a_slice)?;

    // Backend returns full U (m×m) and Vt (n×n); keep the thin part.
    // Singular values sit in the first row.
    let u = matrix::leading_block(&decomp.u, m, k);
    let vt = matrix::leading_block(&decomp.vt, k, n);
    let s: Vec<T::Real> = (0..k).map(|i| decomp.s[[0, i]].re()).collect();

    Ok(Svd::from_parts(u, s, vt))
}

/// Decompose a copy of `a`.
pub fn svd<T: LinalgScalar>(a: &DTensor<T, 2>) -> Result<Svd<T>> {
    svd_inplace(a.clone())
}
