//! Compatibility checks for contractions.

use crate::error::{NameError, Result};
use crate::names::NameTuple;

/// Whether `a` and `b` may be contracted (`a` on the left).
///
/// The trailing name of `a` must equal the leading name of `b`, unless
/// either of them is the wildcard.
pub fn compatible<A: NameTuple, B: NameTuple>(a: &A, b: &B) -> bool {
    a.trailing().matches(&b.leading())
}

/// Like [`compatible`], but reports a mismatch as an error.
///
/// # Errors
/// Returns [`NameError::DimensionMismatch`] carrying both tuples.
pub fn check_contraction<A: NameTuple, B: NameTuple>(a: &A, b: &B) -> Result<()> {
    if compatible(a, b) {
        Ok(())
    } else {
        log::debug!(
            "rejecting contraction of {:?} with {:?}",
            a.as_slice(),
            b.as_slice()
        );
        Err(NameError::DimensionMismatch {
            left: a.to_vec(),
            right: b.to_vec(),
        })
    }
}
