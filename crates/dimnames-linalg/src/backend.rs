//! Backend dispatch for the numeric kernels.
//!
//! Matrix products, SVD, QR, LU, inversion and linear solves are delegated
//! to mdarray-linalg. The
//! mdarray-linalg types are converted to plain `DTensor`s here so that the
//! rest of the crate never depends on the upstream result types.

use anyhow::Result;
use mdarray::{DSlice, DTensor};
use mdarray_linalg::lu::LU;
use mdarray_linalg::matmul::{MatMul, MatMulBuilder};
use mdarray_linalg::qr::QR;
use mdarray_linalg::solve::Solve;
use mdarray_linalg::svd::SVD;

#[cfg(feature = "backend-faer")]
use mdarray_linalg_faer::Faer;

#[cfg(not(feature = "backend-faer"))]
compile_error!("A linear algebra backend feature must be enabled (backend-faer)");

/// Result of an SVD as returned by the backend.
///
/// For an m×n matrix A:
/// - `u`: m×m unitary matrix (left singular vectors)
/// - `s`: singular values stored in the first row as `s[[0, i]]` (LAPACK convention)
/// - `vt`: n×n unitary matrix (right singular vectors, conjugate-transposed)
#[derive(Debug, Clone)]
pub struct SvdResult<T> {
    pub u: DTensor<T, 2>,
    pub s: DTensor<T, 2>,
    pub vt: DTensor<T, 2>,
}

/// Result of an LU decomposition with partial pivoting, P·A = L·U.
///
/// For an m×n matrix A with k = min(m, n):
/// - `l`: m×k unit lower trapezoidal
/// - `u`: k×n upper trapezoidal
/// - `p`: m×m row permutation with `p[[i, j]] = 1` when row `i` of P·A is row `j` of A
#[derive(Debug, Clone)]
pub struct LuResult<T> {
    pub l: DTensor<T, 2>,
    pub u: DTensor<T, 2>,
    pub p: DTensor<T, 2>,
}

/// Matrix product `a * b`. Shapes must already agree.
pub fn matmul_backend<T>(a: &DSlice<T, 2>, b: &DSlice<T, 2>) -> DTensor<T, 2>
where
    T: num_complex::ComplexFloat
        + faer_traits::ComplexField
        + Default
        + From<<T as num_complex::ComplexFloat>::Real>
        + 'static,
    <T as num_complex::ComplexFloat>::Real: Into<f64>,
{
    Faer.matmul(a, b).eval()
}

/// SVD of `a`. The backend may overwrite `a`.
pub fn svd_backend<T>(a: &mut DSlice<T, 2>) -> Result<SvdResult<T>>
where
    T: num_complex::ComplexFloat
        + faer_traits::ComplexField
        + Default
        + From<<T as num_complex::ComplexFloat>::Real>
        + 'static,
    <T as num_complex::ComplexFloat>::Real: Into<f64>,
{
    let decomp = Faer
        .svd(a)
        .map_err(|e| anyhow::anyhow!("SVD computation failed: {}", e))?;

    // Copy out of mdarray-linalg's tensor type.
    let u = DTensor::<T, 2>::from_fn([decomp.u.dim(0), decomp.u.dim(1)], |idx| {
        decomp.u[[idx[0], idx[1]]]
    });
    let s = DTensor::<T, 2>::from_fn([decomp.s.dim(0), decomp.s.dim(1)], |idx| {
        decomp.s[[idx[0], idx[1]]]
    });
    let vt = DTensor::<T, 2>::from_fn([decomp.vt.dim(0), decomp.vt.dim(1)], |idx| {
        decomp.vt[[idx[0], idx[1]]]
    });

    Ok(SvdResult { u, s, vt })
}

/// Full QR of `a` (m×n): returns `(Q, R)` with Q m×m and R m×n.
pub fn qr_backend<T>(a: &mut DSlice<T, 2>) -> (DTensor<T, 2>, DTensor<T, 2>)
where
    T: num_complex::ComplexFloat
        + faer_traits::ComplexField
        + Default
        + From<<T as num_complex::ComplexFloat>::Real>
        + 'static,
    <T as num_complex::ComplexFloat>::Real: Into<f64>,
{
    Faer.qr(a)
}

/// LU of `a` with partial pivoting. The backend overwrites `a`.
pub fn lu_backend<T>(a: &mut DSlice<T, 2>) -> LuResult<T>
where
    T: num_complex::ComplexFloat
        + faer_traits::ComplexField
        + Default
        + From<<T as num_complex::ComplexFloat>::Real>
        + 'static,
    <T as num_complex::ComplexFloat>::Real: Into<f64>,
{
    let (l, u, p) = Faer.lu(a);
    LuResult { l, u, p }
}

/// Inverse of the square matrix `a`. The backend may overwrite `a`.
pub fn inv_backend<T>(a: &mut DSlice<T, 2>) -> Result<DTensor<T, 2>>
where
    T: num_complex::ComplexFloat
        + faer_traits::ComplexField
        + Default
        + From<<T as num_complex::ComplexFloat>::Real>
        + 'static,
    <T as num_complex::ComplexFloat>::Real: Into<f64>,
{
    Faer
        .inv(a)
        .map_err(|e| anyhow::anyhow!("Matrix inversion failed: {}", e))
}

/// Solution X of `a * X = b` for square `a`. The backend overwrites `a`
/// with its factors.
pub fn solve_backend<T>(a: &mut DSlice<T, 2>, b: &DSlice<T, 2>) -> Result<DTensor<T, 2>>
where
    T: num_complex::ComplexFloat
        + faer_traits::ComplexField
        + Default
        + From<<T as num_complex::ComplexFloat>::Real>
        + 'static,
    <T as num_complex::ComplexFloat>::Real: Into<f64>,
{
    let solution = Faer
        .solve(a, b)
        .map_err(|e| anyhow::anyhow!("Linear solve failed: {}", e))?;
    Ok(solution.x)
}
