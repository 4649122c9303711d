//! LU decomposition, inversion and linear solves.
//!
//! For an m×n matrix A with k = min(m, n), [`lu`] computes P·A = L·U with
//! L m×k unit lower trapezoidal, U k×n upper trapezoidal and P an m×m row
//! permutation. The factorization, the inverse and the solve all run on the
//! backend; this module only checks shapes and reports singular input.

use crate::backend::LuResult;
use crate::error::{LinalgError, Result};
use crate::scalar::LinalgScalar;
use mdarray::{DSlice, DTensor};

/// LU factorization with partial pivoting.
#[derive(Debug, Clone)]
pub struct Lu<T> {
    l: DTensor<T, 2>,
    u: DTensor<T, 2>,
    p: DTensor<T, 2>,
}

impl<T: LinalgScalar> Lu<T> {
    pub fn from_parts(l: DTensor<T, 2>, u: DTensor<T, 2>, p: DTensor<T, 2>) -> Self {
        Self { l, u, p }
    }

    pub fn into_parts(self) -> (DTensor<T, 2>, DTensor<T, 2>, DTensor<T, 2>) {
        (self.l, self.u, self.p)
    }

    /// Unit lower trapezoidal factor (m×k).
    pub fn l(&self) -> &DTensor<T, 2> {
        &self.l
    }

    /// Upper trapezoidal factor (k×n).
    pub fn u(&self) -> &DTensor<T, 2> {
        &self.u
    }

    /// Row permutation matrix (m×m) with P·A = L·U.
    pub fn p(&self) -> &DTensor<T, 2> {
        &self.p
    }

    /// Row permutation as a vector: row `i` of P·A is row `perm[i]` of A.
    pub fn perm(&self) -> Vec<usize> {
        permutation_vector(&self.p)
    }
}

impl<T> From<LuResult<T>> for Lu<T> {
    fn from(result: LuResult<T>) -> Self {
        Self {
            l: result.l,
            u: result.u,
            p: result.p,
        }
    }
}

/// Factorize `a`, handing its storage to the backend.
///
/// # Errors
/// `Singular` when a diagonal entry of U is zero or not finite.
pub fn lu_inplace<T: LinalgScalar>(mut a: DTensor<T, 2>) -> Result<Lu<T>> {
    let a_slice: &mut DSlice<T, 2> = &mut a;
    let factors = Lu::from(T::lu(a_slice));

    let u = factors.u();
    let k = u.dim(0).min(u.dim(1));
    if let Some(pivot) = (0..k).find(|&i| u[[i, i]] == T::zero() || !u[[i, i]].is_finite()) {
        log::debug!("LU: zero pivot at step {pivot} of {k}");
        return Err(LinalgError::Singular);
    }
    Ok(factors)
}

/// Factorize a copy of `a`.
pub fn lu<T: LinalgScalar>(a: &DTensor<T, 2>) -> Result<Lu<T>> {
    lu_inplace(a.clone())
}

/// Inverse of a square matrix.
///
/// # Errors
/// `NotSquare` for a non-square matrix, `Singular` if the inverse has
/// non-finite entries.
pub fn inverse<T: LinalgScalar>(a: &DTensor<T, 2>) -> Result<DTensor<T, 2>> {
    check_square(a)?;
    let mut work = a.clone();
    let work_slice: &mut DSlice<T, 2> = &mut work;
    let inv = T::inv(work_slice)?;
    ensure_finite(inv)
}

/// Solve `a * X = b` for square `a`.
///
/// # Errors
/// `NotSquare` for a non-square `a`, `ShapeMismatch` when `b` has a
/// different number of rows, `Singular` if the solution has non-finite
/// entries.
pub fn solve<T: LinalgScalar>(a: &DTensor<T, 2>, b: &DTensor<T, 2>) -> Result<DTensor<T, 2>> {
    let n = check_square(a)?;
    if b.dim(0) != n {
        return Err(LinalgError::ShapeMismatch {
            left: vec![n, n],
            right: vec![b.dim(0), b.dim(1)],
        });
    }
    let mut work = a.clone();
    let work_slice: &mut DSlice<T, 2> = &mut work;
    let x = T::solve(work_slice, b)?;
    ensure_finite(x)
}

fn check_square<T>(a: &DTensor<T, 2>) -> Result<usize> {
    let (m, n) = (a.dim(0), a.dim(1));
    if m != n {
        return Err(LinalgError::NotSquare { rows: m, cols: n });
    }
    Ok(n)
}

// The backend divides by exact zero pivots instead of reporting them.
fn ensure_finite<T: LinalgScalar>(x: DTensor<T, 2>) -> Result<DTensor<T, 2>> {
    let (m, n) = (x.dim(0), x.dim(1));
    let finite = (0..m).all(|i| (0..n).all(|j| x[[i, j]].is_finite()));
    if finite {
        Ok(x)
    } else {
        log::debug!("backend returned non-finite entries for a {m}x{n} result");
        Err(LinalgError::Singular)
    }
}

/// Read the permutation off a permutation matrix: `perm[i]` is the column
/// holding the one in row `i`.
pub fn permutation_vector<T: LinalgScalar>(p: &DTensor<T, 2>) -> Vec<usize> {
    (0..p.dim(0))
        .map(|i| (0..p.dim(1)).find(|&j| p[[i, j]] == T::one()).unwrap_or(i))
        .collect()
}
