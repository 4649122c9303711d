//! Covariance and correlation of named matrices.
//!
//! Reducing over one axis leaves a square matrix indexed twice by the other
//! axis, so `cov` of a matrix named `(n1, n2)` over axis 0 is named
//! `(n2, n2)`.

use crate::array::{Named, NamedMatrix};
use crate::error::{LinalgError, Result};
use crate::matrix;
use crate::scalar::LinalgScalar;
use dimnames_core::{symmetric_names, Name, NameError, Names};
use mdarray::DTensor;

/// Reduction axis, by position or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dim {
    Index(usize),
    Name(Name),
}

impl Dim {
    /// Axis position within `names`.
    pub fn resolve(&self, names: &Names<2>) -> std::result::Result<usize, NameError> {
        match self {
            Dim::Index(axis) => Ok(*axis),
            Dim::Name(name) => names.dim(name),
        }
    }
}

impl From<usize> for Dim {
    fn from(axis: usize) -> Self {
        Dim::Index(axis)
    }
}

impl From<Name> for Dim {
    fn from(name: Name) -> Self {
        Dim::Name(name)
    }
}

/// Options for [`covariance`].
#[derive(Debug, Clone, Copy)]
pub struct CovOptions {
    /// Divide by `n - 1` instead of `n`.
    pub corrected: bool,
}

impl Default for CovOptions {
    fn default() -> Self {
        Self { corrected: true }
    }
}

/// Covariance of `x` with observations along `axis`.
///
/// Axis 0: rows are observations, the result is indexed by columns.
/// Axis 1: columns are observations, the result is indexed by rows.
pub fn covariance<T: LinalgScalar>(
    x: &DTensor<T, 2>,
    axis: usize,
    options: &CovOptions,
) -> Result<DTensor<T, 2>> {
    let obs = match axis {
        0 => x.clone(),
        1 => matrix::transpose(x),
        _ => return Err(LinalgError::InvalidAxis { axis }),
    };
    let (n, p) = (obs.dim(0), obs.dim(1));

    let means: Vec<T> = (0..p)
        .map(|j| {
            let mut sum = T::zero();
            for i in 0..n {
                sum = sum + obs[[i, j]];
            }
            sum / T::from_f64(n as f64)
        })
        .collect();
    let centered = DTensor::<T, 2>::from_fn([n, p], |idx| obs[[idx[0], idx[1]]] - means[idx[1]]);

    let denom = if options.corrected {
        n as f64 - 1.0
    } else {
        n as f64
    };
    let scale = T::from_f64(1.0 / denom);

    let gram = T::matmul(&matrix::adjoint(&centered), &centered);
    Ok(DTensor::<T, 2>::from_fn([p, p], |idx| gram[[idx[0], idx[1]]] * scale))
}

/// Pearson correlation of `x` with observations along `axis`.
pub fn correlation<T: LinalgScalar>(x: &DTensor<T, 2>, axis: usize) -> Result<DTensor<T, 2>> {
    let c = covariance(x, axis, &CovOptions::default())?;
    let p = c.dim(0);
    let sd: Vec<f64> = (0..p).map(|i| c[[i, i]].re_f64().sqrt()).collect();
    Ok(DTensor::<T, 2>::from_fn([p, p], |idx| {
        let (i, j) = (idx[0], idx[1]);
        if i == j {
            T::one()
        } else {
            c[[i, j]] / T::from_f64(sd[i] * sd[j])
        }
    }))
}

impl<T: LinalgScalar> NamedMatrix<T> {
    /// Corrected covariance over `dim`.
    ///
    /// # Errors
    /// `NameNotFound` if `dim` names no axis, `InvalidAxis` if it is an
    /// index other than 0 or 1.
    pub fn cov(&self, dim: impl Into<Dim>) -> Result<NamedMatrix<T>> {
        self.cov_with(dim, &CovOptions::default())
    }

    pub fn cov_with(&self, dim: impl Into<Dim>, options: &CovOptions) -> Result<NamedMatrix<T>> {
        let axis = dim.into().resolve(&self.names())?;
        let data = covariance(self.data(), axis, options)?;
        Ok(Named::new(symmetric_names(&self.names(), axis), data))
    }

    /// Correlation over `dim`.
    pub fn cor(&self, dim: impl Into<Dim>) -> Result<NamedMatrix<T>> {
        let axis = dim.into().resolve(&self.names())?;
        let data = correlation(self.data(), axis)?;
        Ok(Named::new(symmetric_names(&self.names(), axis), data))
    }
}
