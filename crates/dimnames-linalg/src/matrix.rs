//! Small constructors and reshuffles on dense `DTensor`s.

use crate::scalar::LinalgScalar;
use mdarray::DTensor;
use num_traits::{One, Zero};

/// Create a zeros matrix with given dimensions
pub fn zeros<T: Copy + Zero>(nrows: usize, ncols: usize) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([nrows, ncols], |_| T::zero())
}

/// Create an identity matrix
pub fn eye<T: Copy + Zero + One>(n: usize) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([n, n], |idx| {
        if idx[0] == idx[1] {
            T::one()
        } else {
            T::zero()
        }
    })
}

/// Create a matrix from a 2D vector (row-major)
///
/// Every row must have the length of the first one.
pub fn from_vec2d<T: Copy>(data: Vec<Vec<T>>) -> DTensor<T, 2> {
    let nrows = data.len();
    let ncols = if nrows > 0 { data[0].len() } else { 0 };
    DTensor::<T, 2>::from_fn([nrows, ncols], |idx| data[idx[0]][idx[1]])
}

/// Create a vector from a slice.
pub fn vector<T: Copy>(data: &[T]) -> DTensor<T, 1> {
    DTensor::<T, 1>::from_fn([data.len()], |idx| data[idx[0]])
}

/// Transpose the matrix
pub fn transpose<T: Copy>(m: &DTensor<T, 2>) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([m.dim(1), m.dim(0)], |idx| m[[idx[1], idx[0]]])
}

/// Conjugate transpose.
pub fn adjoint<T: LinalgScalar>(m: &DTensor<T, 2>) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([m.dim(1), m.dim(0)], |idx| m[[idx[1], idx[0]]].conj())
}

/// A vector as an n×1 matrix.
pub fn column<T: Copy>(v: &DTensor<T, 1>) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([v.dim(0), 1], |idx| v[[idx[0]]])
}

/// A vector as a 1×n matrix.
pub fn row<T: Copy>(v: &DTensor<T, 1>) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([1, v.dim(0)], |idx| v[[idx[1]]])
}

/// First column of a matrix as a vector.
pub fn first_column<T: Copy>(m: &DTensor<T, 2>) -> DTensor<T, 1> {
    DTensor::<T, 1>::from_fn([m.dim(0)], |idx| m[[idx[0], 0]])
}

pub fn first_row<T: Copy>(m: &DTensor<T, 2>) -> DTensor<T, 1> {
    DTensor::<T, 1>::from_fn([m.dim(1)], |idx| m[[0, idx[0]]])
}

/// Submatrix `m[rows, cols]` from the top-left corner.
pub fn leading_block<T: Copy>(m: &DTensor<T, 2>, rows: usize, cols: usize) -> DTensor<T, 2> {
    DTensor::<T, 2>::from_fn([rows, cols], |idx| m[[idx[0], idx[1]]])
}
