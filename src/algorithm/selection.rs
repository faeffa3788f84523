use crate::{
    analysis::scoring::score,
    analysis::signature::{EdgeSignature, Side},
    io::error::Result,
    spatial::shred::Shred,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One way of extending the sequence: attach shred `origin` at `side`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Origin key of the remaining shred
    pub origin: u32,
    /// End of the sequence the shred would attach to
    pub side: Side,
    /// Seam score of the attachment
    pub score: f64,
}

impl Candidate {
    /// Total order used for selection: score, then origin key, then `Left` before `Right`
    pub fn rank(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.origin.cmp(&other.origin))
            .then(self.side.cmp(&other.side))
    }
}

/// Score every remaining shred against both ends of the sequence
///
/// Attaching at the left tests the shred's right edge against `leftmost`;
/// attaching at the right tests its left edge against `rightmost`. The
/// result holds `2 * remaining.len()` candidates in key order.
///
/// # Errors
///
/// Returns `SignatureMismatch` if any shred height differs from the sequence's
pub fn score_candidates(
    leftmost: &EdgeSignature,
    rightmost: &EdgeSignature,
    remaining: &BTreeMap<u32, Shred>,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::with_capacity(remaining.len() * 2);

    for (&origin, shred) in remaining {
        for side in [Side::Left, Side::Right] {
            let end = match side {
                Side::Left => leftmost,
                Side::Right => rightmost,
            };
            candidates.push(Candidate {
                origin,
                side,
                score: score(end, shred.edge(side.opposite()))?,
            });
        }
    }

    Ok(candidates)
}

/// Flat minimum over all candidates, both sides considered together
pub fn select_best(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().copied().min_by(Candidate::rank)
}
