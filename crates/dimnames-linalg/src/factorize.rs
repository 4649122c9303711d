//! Named factorizations.
//!
//! A named factorization wraps the plain factorization of a named matrix.
//! The fields that are stored are kept as named arrays labelled with the
//! original names; every accessor derives its own names from those through
//! the tables in [`dimnames_core::factorization`] and computes its payload
//! from the plain factorization. Nothing is cached.
//!
//! | field | names   |
//! |-------|---------|
//! | LU L  | (r, _)  |
//! | LU U  | (_, c)  |
//! | LU P  | (r, r)  |
//! | LU p  | (r,)    |
//! | LQ L  | (r, _)  |
//! | LQ Q  | (_, c)  |
//! | SVD U | (r, _)  |
//! | SVD V | (_, c)  |
//! | SVD Vᴴ| (c, _)  |
//!
//! for an original matrix named (r, c).

use crate::array::{Named, NamedMatrix, NamedVector};
use crate::error::Result;
use crate::lq::{self, Lq};
use crate::lu::{self, Lu};
use crate::matrix;
use crate::scalar::{eigencopy, EigType, LinalgScalar};
use crate::svd::{self, Svd};
use dimnames_core::{LqNames, LuNames, Names, SvdNames};
use mdarray::DTensor;

/// A factorization object that carries the names of the matrix it was
/// computed from.
pub trait NamedFactorization: Sized {
    /// The plain factorization.
    type Parent;

    /// Wrap a plain factorization of a matrix named `names`.
    fn from_parent(names: Names<2>, parent: Self::Parent) -> Self;

    /// Names of the original matrix.
    fn names(&self) -> Names<2>;

    /// Plain factorization, copied out.
    fn parent(&self) -> Self::Parent;

    fn into_parent(self) -> Self::Parent;
}

/// Strip the names, factorize the payload, wrap the result.
fn factorize_with<T, F, K>(a: NamedMatrix<T>, kernel: K) -> Result<F>
where
    T: LinalgScalar,
    F: NamedFactorization,
    K: FnOnce(DTensor<T, 2>) -> Result<F::Parent>,
{
    let (names, data) = a.into_parts();
    let parent = kernel(data)?;
    log::debug!(
        "wrapped {} of a matrix named {}",
        std::any::type_name::<F>(),
        names
    );
    Ok(F::from_parent(names, parent))
}

// ============================================================================
// LU
// ============================================================================

/// LU factorization of a named matrix.
#[derive(Debug, Clone)]
pub struct NamedLu<T: Copy> {
    l: NamedMatrix<T>,
    u: NamedMatrix<T>,
    p: NamedMatrix<T>,
}

impl<T: LinalgScalar> NamedFactorization for NamedLu<T> {
    type Parent = Lu<T>;

    fn from_parent(names: Names<2>, parent: Lu<T>) -> Self {
        let (l, u, p) = parent.into_parts();
        Self {
            l: Named::new(names, l),
            u: Named::new(names, u),
            p: Named::new(names, p),
        }
    }

    fn names(&self) -> Names<2> {
        self.l.names()
    }

    fn parent(&self) -> Lu<T> {
        Lu::from_parts(
            self.l.data().clone(),
            self.u.data().clone(),
            self.p.data().clone(),
        )
    }

    fn into_parent(self) -> Lu<T> {
        Lu::from_parts(self.l.into_data(), self.u.into_data(), self.p.into_data())
    }
}

impl<T: LinalgScalar> NamedLu<T> {
    /// L, named (r, _).
    pub fn l(&self) -> NamedMatrix<T> {
        let names = LuNames::derive(&self.names());
        Named::new(names.l, self.l.data().clone())
    }

    /// U, named (_, c).
    pub fn u(&self) -> NamedMatrix<T> {
        let names = LuNames::derive(&self.names());
        Named::new(names.u, self.u.data().clone())
    }

    /// P, named (r, r).
    pub fn p(&self) -> NamedMatrix<T> {
        let names = LuNames::derive(&self.names());
        Named::new(names.p, self.p.data().clone())
    }

    /// Row permutation vector, named (r,).
    pub fn perm(&self) -> NamedVector<usize> {
        let names = LuNames::derive(&self.names());
        Named::new(names.perm, matrix::vector(&lu::permutation_vector(self.p.data())))
    }
}

// ============================================================================
// LQ
// ============================================================================

/// LQ factorization of a named matrix.
#[derive(Debug, Clone)]
pub struct NamedLq<T: Copy> {
    factors: NamedMatrix<T>,
    q: NamedMatrix<T>,
}

impl<T: LinalgScalar> NamedFactorization for NamedLq<T> {
    type Parent = Lq<T>;

    fn from_parent(names: Names<2>, parent: Lq<T>) -> Self {
        let (factors, q) = parent.into_parts();
        Self {
            factors: Named::new(names, factors),
            q: Named::new(names, q),
        }
    }

    fn names(&self) -> Names<2> {
        self.factors.names()
    }

    fn parent(&self) -> Lq<T> {
        Lq::from_parts(self.factors.data().clone(), self.q.data().clone())
    }

    fn into_parent(self) -> Lq<T> {
        Lq::from_parts(self.factors.into_data(), self.q.into_data())
    }
}

impl<T: LinalgScalar> NamedLq<T> {
    /// L, named (r, _).
    pub fn l(&self) -> NamedMatrix<T> {
        let names = LqNames::derive(&self.names());
        Named::new(names.l, lq::thin_l(self.factors.data()))
    }

    /// Q, named (_, c).
    pub fn q(&self) -> NamedMatrix<T> {
        let names = LqNames::derive(&self.names());
        Named::new(names.q, lq::thin_q(self.factors.data(), self.q.data()))
    }
}

// ============================================================================
// SVD
// ============================================================================

/// Thin SVD of a named matrix.
#[derive(Debug, Clone)]
pub struct NamedSvd<T: LinalgScalar> {
    u: NamedMatrix<T>,
    s: Vec<T::Real>,
    vt: NamedMatrix<T>,
}

impl<T: LinalgScalar> NamedFactorization for NamedSvd<T> {
    type Parent = Svd<T>;

    fn from_parent(names: Names<2>, parent: Svd<T>) -> Self {
        let (u, s, vt) = parent.into_parts();
        Self {
            u: Named::new(names, u),
            s,
            vt: Named::new(names, vt),
        }
    }

    fn names(&self) -> Names<2> {
        self.u.names()
    }

    fn parent(&self) -> Svd<T> {
        Svd::from_parts(self.u.data().clone(), self.s.clone(), self.vt.data().clone())
    }

    fn into_parent(self) -> Svd<T> {
        Svd::from_parts(self.u.into_data(), self.s, self.vt.into_data())
    }
}

impl<T: LinalgScalar> NamedSvd<T> {
    /// U, named (r, _).
    pub fn u(&self) -> NamedMatrix<T> {
        let names = SvdNames::derive(&self.names());
        Named::new(names.u, self.u.data().clone())
    }

    /// Singular values, unnamed, in the real type of `T`.
    pub fn s(&self) -> &[T::Real] {
        &self.s
    }

    /// V, named (_, c).
    pub fn v(&self) -> NamedMatrix<T> {
        let names = SvdNames::derive(&self.names());
        Named::new(names.v, matrix::adjoint(self.vt.data()))
    }

    /// Vᴴ, named (c, _).
    pub fn vt(&self) -> NamedMatrix<T> {
        let names = SvdNames::derive(&self.names());
        Named::new(names.vt, self.vt.data().clone())
    }
}

// ============================================================================
// Entry points
// ============================================================================

impl<T: LinalgScalar> NamedMatrix<T> {
    /// LU with partial pivoting, on a copy.
    pub fn lu(&self) -> Result<NamedLu<T>> {
        self.clone().lu_into()
    }

    /// LU handing this matrix's storage to the backend.
    pub fn lu_into(self) -> Result<NamedLu<T>> {
        factorize_with(self, lu::lu_inplace)
    }

    /// LQ, on a copy.
    pub fn lq(&self) -> Result<NamedLq<T>> {
        self.clone().lq_into()
    }

    pub fn lq_into(self) -> Result<NamedLq<T>> {
        factorize_with(self, lq::lq_inplace)
    }

    /// SVD consuming this matrix.
    pub fn svd_into(self) -> Result<NamedSvd<T>> {
        factorize_with(self, svd::svd_inplace)
    }
}

impl<T: EigType> NamedMatrix<T> {
    /// SVD on a copy converted to the decomposition element type
    /// (integers become `f64`).
    pub fn svd(&self) -> Result<NamedSvd<T::Eig>> {
        Named::new(self.names(), eigencopy(self.data())).svd_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lu_accessor_names() {
        let a = Named::new(
            Names::parse(["r", "c"]).unwrap(),
            matrix::from_vec2d(vec![vec![2.0, 1.0], vec![1.0, 3.0]]),
        );
        let f = a.lu().unwrap();
        assert_eq!(f.names(), a.names());
        assert_eq!(f.l().names(), Names::parse(["r", "_"]).unwrap());
        assert_eq!(f.u().names(), Names::parse(["_", "c"]).unwrap());
        assert_eq!(f.p().names(), Names::parse(["r", "r"]).unwrap());
        assert_eq!(f.perm().names(), Names::parse(["r"]).unwrap());
    }

    #[test]
    fn test_parent_round_trip_keeps_permutation() {
        let a = Named::new(
            Names::parse(["r", "c"]).unwrap(),
            matrix::from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
        );
        let f = a.lu().unwrap();
        let parent = f.parent();
        assert_eq!(parent.perm(), vec![1, 0]);
        let g = NamedLu::from_parent(f.names(), parent);
        assert_eq!(g.perm().data()[[0]], 1);
        assert_eq!(g.names(), f.names());
    }

    #[test]
    fn test_single_precision_svd_keeps_real_type() {
        let a = Named::new(
            Names::parse(["r", "c"]).unwrap(),
            matrix::from_vec2d(vec![vec![3.0_f32, 0.0], vec![0.0, 2.0]]),
        );
        let f: NamedSvd<f32> = a.svd().unwrap();
        let s: &[f32] = f.s();
        assert!((s[0] - 3.0).abs() < 1e-5);
        assert!((s[1] - 2.0).abs() < 1e-5);
    }
}
