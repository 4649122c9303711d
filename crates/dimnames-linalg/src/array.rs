//! Named arrays: a dense payload together with one name per axis.

use crate::matrix;
use crate::scalar::LinalgScalar;
use dimnames_core::{CoNames, NameTuple, Names};
use mdarray::{DTensor, Dyn, Tensor};
use num_traits::Zero;

// `DTensor<T, N>` names its shape through an associated type, so impls on
// `DTensor<T, 1>` and `DTensor<T, 2>` overlap for coherence. The payload
// impls are written on the shapes those aliases resolve to.
pub(crate) type DenseVector<T> = Tensor<T, (Dyn,)>;
pub(crate) type DenseMatrix<T> = Tensor<T, (Dyn, Dyn)>;

/// Array data that can carry axis names.
///
/// `Names` fixes the name tuple a payload is labelled with, `to_dense`
/// gives the matrix the numeric kernels see (vectors as columns, covectors
/// as rows).
pub trait Payload {
    type Elem: Copy;
    type Names: NameTuple;

    fn to_dense(&self) -> DTensor<Self::Elem, 2>;
}

/// Square diagonal matrix stored by its diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagonal<T> {
    diag: Vec<T>,
}

impl<T> Diagonal<T> {
    pub fn new(diag: Vec<T>) -> Self {
        Self { diag }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.diag
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }
}

/// A transposed (or adjoint) vector, i.e. a 1×n row.
#[derive(Debug, Clone)]
pub struct Covector<T> {
    data: DTensor<T, 1>,
}

impl<T> Covector<T> {
    pub fn new(data: DTensor<T, 1>) -> Self {
        Self { data }
    }

    /// The entries as a plain vector.
    pub fn as_vector(&self) -> &DTensor<T, 1> {
        &self.data
    }

    pub fn into_vector(self) -> DTensor<T, 1> {
        self.data
    }
}

impl<T: Copy> Payload for DenseVector<T> {
    type Elem = T;
    type Names = Names<1>;

    fn to_dense(&self) -> DTensor<T, 2> {
        matrix::column(self)
    }
}

impl<T: Copy> Payload for DenseMatrix<T> {
    type Elem = T;
    type Names = Names<2>;

    fn to_dense(&self) -> DTensor<T, 2> {
        self.clone()
    }
}

impl<T: Copy + Zero> Payload for Diagonal<T> {
    type Elem = T;
    type Names = Names<2>;

    fn to_dense(&self) -> DTensor<T, 2> {
        let n = self.diag.len();
        DTensor::<T, 2>::from_fn([n, n], |idx| {
            if idx[0] == idx[1] {
                self.diag[idx[0]]
            } else {
                T::zero()
            }
        })
    }
}

impl<T: Copy> Payload for Covector<T> {
    type Elem = T;
    type Names = CoNames;

    fn to_dense(&self) -> DTensor<T, 2> {
        matrix::row(&self.data)
    }
}

/// An array payload labelled with one name per axis.
///
/// The names are fixed at construction; there is no setter. Operations
/// that produce a new array compute its names from the operands' names.
#[derive(Debug, Clone)]
pub struct Named<P: Payload> {
    names: P::Names,
    data: P,
}

/// Named 2-D array.
pub type NamedMatrix<T> = Named<DTensor<T, 2>>;
/// Named 1-D array.
pub type NamedVector<T> = Named<DTensor<T, 1>>;
/// Named transposed vector.
pub type NamedCovector<T> = Named<Covector<T>>;
/// Named diagonal matrix.
pub type NamedDiagonal<T> = Named<Diagonal<T>>;

impl<P: Payload> Named<P> {
    /// Attach `names` to `data`.
    pub fn new(names: P::Names, data: P) -> Self {
        Self { names, data }
    }

    /// Label every axis of `data` with the wildcard.
    pub fn unnamed(data: P) -> Self {
        Self::new(P::Names::wildcard(), data)
    }

    pub fn names(&self) -> P::Names {
        self.names
    }

    /// The underlying plain array.
    pub fn data(&self) -> &P {
        &self.data
    }

    pub fn into_data(self) -> P {
        self.data
    }

    pub fn into_parts(self) -> (P::Names, P) {
        (self.names, self.data)
    }
}

impl<T: Copy> NamedVector<T> {
    /// Transpose into a row vector with the same axis name.
    pub fn transpose(&self) -> NamedCovector<T> {
        Named::new(CoNames::from(self.names), Covector::new(self.data.clone()))
    }
}

impl<T: LinalgScalar> NamedVector<T> {
    /// Conjugate transpose into a row vector with the same axis name.
    pub fn adjoint(&self) -> NamedCovector<T> {
        let conj = DTensor::<T, 1>::from_fn([self.data.dim(0)], |idx| self.data[[idx[0]]].conj());
        Named::new(CoNames::from(self.names), Covector::new(conj))
    }
}

impl<T: Copy> NamedCovector<T> {
    /// Transpose back into a column vector.
    pub fn transpose(&self) -> NamedVector<T> {
        Named::new(self.names.names(), self.data.as_vector().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimnames_core::Name;
    use num_complex::Complex64;

    #[test]
    fn test_named_matrix_accessors() {
        let names = Names::parse(["r", "c"]).unwrap();
        let a = Named::new(names, matrix::from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
        assert_eq!(a.names(), names);
        assert_eq!(a.data()[[1, 0]], 3.0);

        let (n2, data) = a.into_parts();
        assert_eq!(n2, names);
        assert_eq!(data[[0, 1]], 2.0);
    }

    #[test]
    fn test_unnamed_uses_wildcards() {
        let v = Named::unnamed(matrix::vector(&[1.0, 2.0]));
        assert_eq!(v.names(), Names::new([Name::Wildcard]));
    }

    #[test]
    fn test_vector_dense_is_column() {
        let v = matrix::vector(&[1, 2, 3]);
        let d = v.to_dense();
        assert_eq!((d.dim(0), d.dim(1)), (3, 1));
    }

    #[test]
    fn test_vector_and_matrix_payloads_coexist() {
        fn rank<P: Payload>(_: &P) -> usize {
            <P::Names as NameTuple>::RANK
        }
        assert_eq!(rank(&matrix::vector(&[1.0, 2.0])), 1);
        assert_eq!(rank(&matrix::zeros::<f64>(2, 2)), 2);
        assert_eq!(rank(&Covector::new(matrix::vector(&[1.0]))), 1);
    }

    #[test]
    fn test_diagonal_dense() {
        let d = Diagonal::new(vec![2.0, 3.0]).to_dense();
        assert_eq!(d[[0, 0]], 2.0);
        assert_eq!(d[[1, 1]], 3.0);
        assert_eq!(d[[0, 1]], 0.0);
        assert_eq!(d[[1, 0]], 0.0);
    }

    #[test]
    fn test_transpose_keeps_name() {
        let v = Named::new(Names::parse(["t"]).unwrap(), matrix::vector(&[1.0, 2.0]));
        let row = v.transpose();
        assert_eq!(row.names().names(), v.names());
        let d = row.data().to_dense();
        assert_eq!((d.dim(0), d.dim(1)), (1, 2));

        let back = row.transpose();
        assert_eq!(back.names(), v.names());
        assert_eq!(back.data()[[1]], 2.0);
    }

    #[test]
    fn test_adjoint_conjugates_entries() {
        let v = Named::new(
            Names::parse(["t"]).unwrap(),
            matrix::vector(&[Complex64::new(1.0, 1.0)]),
        );
        let h = v.adjoint();
        assert_eq!(h.data().as_vector()[[0]], Complex64::new(1.0, -1.0));
        assert_eq!(v.data()[[0]], Complex64::new(1.0, 1.0));
    }
}
