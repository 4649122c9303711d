//! Dense linear algebra on arrays with named axes.
//!
//! A [`Named`] array is a dense payload (matrix, vector, diagonal or
//! covector) with one [`Name`] per axis. Products check that the contracted
//! axes agree and name the result after the outer axes; inverses swap the
//! names; covariance-style reductions repeat the surviving name; LU, LQ and
//! SVD factorizations derive the names of each factor from the original
//! matrix.
//!
//! Names are checked before any numeric work. Plain arrays mix freely with
//! named ones and behave as if every axis carried the wildcard `_`.
//!
//! # Example
//!
//! ```
//! use dimnames_linalg::{matrix, Named, NamedMatMul, Names};
//!
//! let x = Named::new(
//!     Names::parse(["sample", "feature"]).unwrap(),
//!     matrix::from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 5.0], vec![4.0, 4.0]]),
//! );
//! let w = Named::new(
//!     Names::parse(["feature", "component"]).unwrap(),
//!     matrix::from_vec2d(vec![vec![1.0, 0.0], vec![0.0, 1.0]]),
//! );
//!
//! let y = x.matmul(&w).unwrap();
//! assert_eq!(y.names(), Names::parse(["sample", "component"]).unwrap());
//!
//! // "component" does not contract with "sample".
//! assert!(y.matmul(&x).is_err());
//! ```

pub mod array;
pub mod backend;
pub mod dispatch;
pub mod error;
pub mod factorize;
pub mod inverse;
pub mod lq;
pub mod lu;
pub mod matrix;
pub mod scalar;
pub mod stats;
pub mod svd;

// Re-export the name layer and mdarray so downstream code and
// `declare_plain_operand!` expansions need no extra dependencies.
pub use dimnames_core as names;
pub use mdarray;

pub use dimnames_core::{CoNames, ContractNames, Name, NameError, NameTuple, Names};

pub use array::{
    Covector, Diagonal, Named, NamedCovector, NamedDiagonal, NamedMatrix, NamedVector, Payload,
};
pub use dispatch::{contract, NamedMatMul, Operand, PlainOperand, Product, Rewrap};
pub use error::{LinalgError, Result};
pub use factorize::{NamedFactorization, NamedLq, NamedLu, NamedSvd};
pub use lq::Lq;
pub use lu::Lu;
pub use scalar::{EigType, LinalgScalar};
pub use stats::{CovOptions, Dim};
pub use svd::Svd;
