//! Axis names for dense arrays and the algebra that propagates them.
//!
//! This crate provides:
//! - [`Name`]: one axis label, or the wildcard `_`
//! - [`Names`] / [`CoNames`]: the name tuple of an array / of a row vector
//! - [`compatible`] / [`check_contraction`]: contraction validation
//! - [`ContractNames`], [`inverse_names`], [`symmetric_names`]: output names
//!   of products, inverses and covariance-style reductions
//! - [`LuNames`], [`LqNames`], [`SvdNames`]: names of factorization fields
//!
//! Nothing here touches numeric data; see `dimnames-linalg` for arrays.
//!
//! # Example
//!
//! ```
//! use dimnames_core::{ContractNames, Names};
//!
//! let a = Names::parse(["time", "sensor"]).unwrap();
//! let b = Names::parse(["sensor", "feature"]).unwrap();
//! let c = a.contract_names(&b).unwrap();
//! assert_eq!(c, Names::parse(["time", "feature"]).unwrap());
//! ```

pub mod error;
pub mod factorization;
pub mod name;
pub mod names;
pub mod propagate;
pub mod smallstring;
pub mod validate;

pub use error::{NameError, Result};
pub use factorization::{LqNames, LuNames, SvdNames};
pub use name::{Label, Name, MAX_NAME_LEN, WILDCARD_STR};
pub use names::{CoNames, NameTuple, Names};
pub use propagate::{inverse_names, symmetric_names, ContractNames};
pub use smallstring::{SmallString, SmallStringError};
pub use validate::{check_contraction, compatible};
