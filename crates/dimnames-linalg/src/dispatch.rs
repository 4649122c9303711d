//! Products between named and plain operands.
//!
//! Any operand is seen through [`Operand`]: a name tuple and a dense matrix.
//! A named array reports its own names, a plain array reports all
//! wildcards, so `named * plain` and `plain * named` follow the same name
//! rules as a product of two named arrays.
//!
//! `plain * plain` has no [`NamedMatMul`] implementation; plain products
//! stay with the array library.

use crate::array::{Covector, DenseMatrix, DenseVector, Diagonal, Named, Payload};
use crate::error::{LinalgError, Result};
use crate::matrix;
use crate::scalar::LinalgScalar;
use dimnames_core::{CoNames, ContractNames, NameTuple, Names};
use mdarray::DTensor;

/// A product operand, named or plain.
pub trait Operand {
    type Elem: LinalgScalar;
    type Names: NameTuple;

    /// Axis names used for validation and propagation.
    fn operand_names(&self) -> Self::Names;

    /// The operand as a dense matrix.
    fn operand_dense(&self) -> DTensor<Self::Elem, 2>;
}

impl<P> Operand for Named<P>
where
    P: Payload,
    P::Elem: LinalgScalar,
{
    type Elem = P::Elem;
    type Names = P::Names;

    fn operand_names(&self) -> P::Names {
        self.names()
    }

    fn operand_dense(&self) -> DTensor<P::Elem, 2> {
        self.data().to_dense()
    }
}

/// A plain payload used directly as a product operand.
///
/// Plain operands are seen through all-wildcard names. Register a type with
/// [`declare_plain_operand!`].
pub trait PlainOperand: Payload {}

impl<P> Operand for P
where
    P: PlainOperand,
    P::Elem: LinalgScalar,
{
    type Elem = P::Elem;
    type Names = P::Names;

    fn operand_names(&self) -> P::Names {
        P::Names::wildcard()
    }

    fn operand_dense(&self) -> DTensor<P::Elem, 2> {
        self.to_dense()
    }
}

/// Turns a product's output names and dense result into the result value.
pub trait Rewrap<T> {
    type Output;

    fn rewrap(self, data: DTensor<T, 2>) -> Self::Output;
}

impl<T: Copy> Rewrap<T> for Names<2> {
    type Output = Named<DTensor<T, 2>>;

    fn rewrap(self, data: DTensor<T, 2>) -> Self::Output {
        Named::new(self, data)
    }
}

impl<T: Copy> Rewrap<T> for Names<1> {
    type Output = Named<DTensor<T, 1>>;

    fn rewrap(self, data: DTensor<T, 2>) -> Self::Output {
        Named::new(self, matrix::first_column(&data))
    }
}

/// Row times matrix: a row vector.
impl<T: Copy> Rewrap<T> for CoNames {
    type Output = Named<Covector<T>>;

    fn rewrap(self, data: DTensor<T, 2>) -> Self::Output {
        Named::new(self, Covector::new(matrix::first_row(&data)))
    }
}

/// Row times column: a plain scalar.
impl<T: Copy> Rewrap<T> for () {
    type Output = T;

    fn rewrap(self, data: DTensor<T, 2>) -> T {
        data[[0, 0]]
    }
}

/// Result type of `A * B`.
pub type Product<A, B> = <<<A as Operand>::Names as ContractNames<<B as Operand>::Names>>::Output as Rewrap<
    <A as Operand>::Elem,
>>::Output;

/// Multiply two operands, checking names first.
///
/// Names are validated before any arithmetic; on a name mismatch no
/// product is computed.
pub fn contract<A, B>(a: &A, b: &B) -> Result<Product<A, B>>
where
    A: Operand,
    B: Operand<Elem = A::Elem>,
    A::Names: ContractNames<B::Names>,
    <A::Names as ContractNames<B::Names>>::Output: Rewrap<A::Elem>,
{
    let names = a.operand_names().contract_names(&b.operand_names())?;
    let lhs = a.operand_dense();
    let rhs = b.operand_dense();
    let data = product(&lhs, &rhs)?;
    log::debug!(
        "contracted {} x {} into {:?}",
        lhs.dim(0),
        rhs.dim(1),
        names
    );
    Ok(names.rewrap(data))
}

/// Dense `a * b` with an inner dimension check.
pub(crate) fn product<T: LinalgScalar>(a: &DTensor<T, 2>, b: &DTensor<T, 2>) -> Result<DTensor<T, 2>> {
    let (m, k1) = (a.dim(0), a.dim(1));
    let (k2, n) = (b.dim(0), b.dim(1));
    if k1 != k2 {
        return Err(LinalgError::ShapeMismatch {
            left: vec![m, k1],
            right: vec![k2, n],
        });
    }
    Ok(T::matmul(a, b))
}

/// Name-aware matrix product.
///
/// Implemented for every named array against any operand, and for every
/// plain type registered with [`declare_plain_operand!`] against named
/// arrays.
///
/// # Example
///
/// ```
/// use dimnames_linalg::{matrix, Named, NamedMatMul, Names};
///
/// let a = Named::new(
///     Names::parse(["time", "sensor"]).unwrap(),
///     matrix::from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
/// );
/// let w = matrix::from_vec2d(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
///
/// let c = a.matmul(&w).unwrap();
/// assert_eq!(c.names(), Names::parse(["time", "_"]).unwrap());
/// ```
pub trait NamedMatMul<Rhs> {
    type Output;

    fn matmul(&self, rhs: &Rhs) -> Result<Self::Output>;
}

impl<P, B> NamedMatMul<B> for Named<P>
where
    P: Payload,
    P::Elem: LinalgScalar,
    B: Operand<Elem = P::Elem>,
    P::Names: ContractNames<B::Names>,
    <P::Names as ContractNames<B::Names>>::Output: Rewrap<P::Elem>,
{
    type Output = <<P::Names as ContractNames<B::Names>>::Output as Rewrap<P::Elem>>::Output;

    fn matmul(&self, rhs: &B) -> Result<Self::Output> {
        contract(self, rhs)
    }
}

impl<A, Q> NamedMatMul<Named<Q>> for A
where
    A: PlainOperand,
    A::Elem: LinalgScalar,
    Q: Payload<Elem = A::Elem>,
    A::Names: ContractNames<Q::Names>,
    <A::Names as ContractNames<Q::Names>>::Output: Rewrap<A::Elem>,
{
    type Output = <<A::Names as ContractNames<Q::Names>>::Output as Rewrap<A::Elem>>::Output;

    fn matmul(&self, rhs: &Named<Q>) -> Result<Self::Output> {
        contract(self, rhs)
    }
}

/// Register a plain array type as a product operand.
///
/// The type must implement [`Payload`](crate::Payload). The macro makes it
/// a [`PlainOperand`](crate::PlainOperand), which gives `plain * named`;
/// `named * plain` is covered by the implementation on
/// [`Named`](crate::Named).
///
/// ```ignore
/// declare_plain_operand!(impl<T> for MyBanded<T>);
/// ```
#[macro_export]
macro_rules! declare_plain_operand {
    (impl<$($g:ident),*> for $ty:ty) => {
        impl<$($g),*> $crate::PlainOperand for $ty where $ty: $crate::Payload {}
    };
}

declare_plain_operand!(impl<T> for DenseVector<T>);
declare_plain_operand!(impl<T> for DenseMatrix<T>);
declare_plain_operand!(impl<T> for Diagonal<T>);
declare_plain_operand!(impl<T> for Covector<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use dimnames_core::{Name, NameError};

    fn names2(a: &str, b: &str) -> Names<2> {
        Names::parse([a, b]).unwrap()
    }

    #[test]
    fn test_product_checks_inner_dimension() {
        let a = matrix::zeros::<f64>(2, 3);
        let b = matrix::zeros::<f64>(2, 2);
        match product(&a, &b) {
            Err(LinalgError::ShapeMismatch { left, right }) => {
                assert_eq!(left, vec![2, 3]);
                assert_eq!(right, vec![2, 2]);
            }
            other => panic!("expected shape mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_operand_reports_wildcards() {
        let m = matrix::zeros::<f64>(2, 2);
        assert_eq!(m.operand_names(), Names::new([Name::Wildcard, Name::Wildcard]));

        let v = matrix::vector(&[1.0_f64, 2.0]);
        assert_eq!(v.operand_names(), Names::new([Name::Wildcard]));
        let d = v.operand_dense();
        assert_eq!((d.dim(0), d.dim(1)), (2, 1));
    }

    #[test]
    fn test_name_mismatch_is_reported_before_shape() {
        // Shapes disagree too, the name error wins.
        let a = Named::new(names2("r", "c"), matrix::zeros::<f64>(2, 3));
        let b = Named::new(names2("x", "y"), matrix::zeros::<f64>(4, 2));
        let err = a.matmul(&b).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::Names(NameError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_rewrap_covector_takes_first_row() {
        let data = matrix::from_vec2d(vec![vec![1.0_f64, 2.0, 3.0]]);
        let row = CoNames::new(Name::new("f").unwrap()).rewrap(data);
        assert_eq!(row.names().name(), Name::new("f").unwrap());
        assert_eq!(row.data().as_vector().dim(0), 3);
        assert_eq!(row.data().as_vector()[[2]], 3.0);
    }

    #[test]
    fn test_rewrap_scalar() {
        let data = matrix::from_vec2d(vec![vec![7.5_f64]]);
        assert_eq!(().rewrap(data), 7.5);
    }
}
