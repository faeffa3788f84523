//! Dissimilarity score between two edge signatures

use crate::analysis::signature::EdgeSignature;
use crate::io::error::{Result, UnshredError};

/// Sum over all rows of the absolute R, G and B differences
///
/// Lower is a better fit and `0.0` is a perfect match. Callers pass the right
/// edge of the left neighbour and the left edge of the right neighbour; the
/// orientation is not checked here.
///
/// # Errors
///
/// Returns `SignatureMismatch` if the signatures differ in length
pub fn score(a: &EdgeSignature, b: &EdgeSignature) -> Result<f64> {
    if a.len() != b.len() {
        return Err(UnshredError::SignatureMismatch {
            left_len: a.len(),
            right_len: b.len(),
        });
    }

    let difference = &a.rgb() - &b.rgb();
    Ok(difference.mapv(f64::abs).sum())
}
