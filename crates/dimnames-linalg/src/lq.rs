//! LQ decomposition: A = L·Q with L lower trapezoidal and Q having
//! orthonormal rows.
//!
//! Computed from the QR of Aᴴ: if Aᴴ = Q̃·R̃ then A = R̃ᴴ·Q̃ᴴ.

use crate::error::Result;
use crate::matrix;
use crate::scalar::LinalgScalar;
use mdarray::{DSlice, DTensor};

/// Full LQ factors of an m×n matrix.
///
/// `factors` is the m×n lower trapezoidal L, `q` the n×n unitary Q. The
/// accessors return the thin factors with k = min(m, n).
#[derive(Debug, Clone)]
pub struct Lq<T> {
    factors: DTensor<T, 2>,
    q: DTensor<T, 2>,
}

impl<T: LinalgScalar> Lq<T> {
    pub fn from_parts(factors: DTensor<T, 2>, q: DTensor<T, 2>) -> Self {
        Self { factors, q }
    }

    pub fn into_parts(self) -> (DTensor<T, 2>, DTensor<T, 2>) {
        (self.factors, self.q)
    }

    pub fn factors(&self) -> &DTensor<T, 2> {
        &self.factors
    }

    pub fn full_q(&self) -> &DTensor<T, 2> {
        &self.q
    }

    /// Lower trapezoidal factor (m×k).
    pub fn l(&self) -> DTensor<T, 2> {
        thin_l(&self.factors)
    }

    /// Factor with orthonormal rows (k×n).
    pub fn q(&self) -> DTensor<T, 2> {
        thin_q(&self.factors, &self.q)
    }
}

/// Factorize `a`. The input is consumed.
pub fn lq_inplace<T: LinalgScalar>(a: DTensor<T, 2>) -> Result<Lq<T>> {
    let mut at = matrix::adjoint(&a);
    let at_slice: &mut DSlice<T, 2> = &mut at;
    let (q, r) = T::qr(at_slice);
    Ok(Lq::from_parts(matrix::adjoint(&r), matrix::adjoint(&q)))
}

/// Factorize a copy of `a`.
pub fn lq<T: LinalgScalar>(a: &DTensor<T, 2>) -> Result<Lq<T>> {
    lq_inplace(a.clone())
}

/// First k columns of the stored L.
pub fn thin_l<T: LinalgScalar>(factors: &DTensor<T, 2>) -> DTensor<T, 2> {
    let m = factors.dim(0);
    let k = m.min(factors.dim(1));
    matrix::leading_block(factors, m, k)
}

/// First k rows of the stored Q, with k taken from the stored L.
pub fn thin_q<T: LinalgScalar>(factors: &DTensor<T, 2>, q: &DTensor<T, 2>) -> DTensor<T, 2> {
    let k = factors.dim(0).min(factors.dim(1));
    matrix::leading_block(q, k, q.dim(1))
}
