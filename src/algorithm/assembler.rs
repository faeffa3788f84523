use crate::{
    algorithm::selection::{Candidate, score_candidates, select_best},
    analysis::signature::Side,
    io::configuration::ShredConfig,
    io::error::{Result, invalid_source},
    spatial::compositor::composite,
    spatial::shred::Shred,
    spatial::splitter::split_into_shreds,
};
use image::RgbaImage;
use log::debug;
use std::collections::{BTreeMap, VecDeque};

/// Where the assembler is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssemblyPhase {
    /// Only the seed shred has been placed
    Seeded,
    /// At least one shred attached, some remain
    Growing,
    /// Every shred has been placed
    Complete,
}

/// One shred moved from the remaining set onto an end of the sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Origin key of the placed shred
    pub origin: u32,
    /// End of the sequence it was attached to
    pub side: Side,
    /// Seam score against its new neighbour
    pub score: f64,
}

impl From<Candidate> for Placement {
    fn from(candidate: Candidate) -> Self {
        Self {
            origin: candidate.origin,
            side: candidate.side,
            score: candidate.score,
        }
    }
}

/// Greedy nearest-neighbour ordering of shreds
///
/// The sequence is seeded with the shred of lowest origin key. Each step
/// moves the single best-scoring remaining shred onto whichever end it fits
/// best. Placed shreds are never moved again, so an early mistake is kept.
pub struct GreedyAssembler {
    remaining: BTreeMap<u32, Shred>,
    sequence: VecDeque<Shred>,
    /// Seam scores between neighbours in `sequence`, left to right
    seam_scores: VecDeque<f64>,
    total_shreds: usize,
}

impl GreedyAssembler {
    /// Seed a new assembly from a set of shreds
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if:
    /// - `shreds` is empty
    /// - two shreds share an origin key
    /// - the shreds differ in height, or have no rows
    pub fn new(shreds: Vec<Shred>) -> Result<Self> {
        let total_shreds = shreds.len();
        let mut remaining = BTreeMap::new();
        let mut height = None;

        for shred in shreds {
            if shred.left_edge().is_empty() {
                return Err(invalid_source(&format!(
                    "shred at x={} has no rows",
                    shred.origin()
                )));
            }
            let expected = *height.get_or_insert(shred.height());
            if shred.height() != expected {
                return Err(invalid_source(&format!(
                    "shred at x={} is {} pixels tall, expected {expected}",
                    shred.origin(),
                    shred.height()
                )));
            }
            let origin = shred.origin();
            if remaining.insert(origin, shred).is_some() {
                return Err(invalid_source(&format!(
                    "more than one shred has origin x={origin}"
                )));
            }
        }

        let Some((_, seed)) = remaining.pop_first() else {
            return Err(invalid_source(&"no shreds to assemble"));
        };

        Ok(Self {
            remaining,
            sequence: VecDeque::from([seed]),
            seam_scores: VecDeque::with_capacity(total_shreds.saturating_sub(1)),
            total_shreds,
        })
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> AssemblyPhase {
        if self.remaining.is_empty() {
            AssemblyPhase::Complete
        } else if self.sequence.len() == 1 {
            AssemblyPhase::Seeded
        } else {
            AssemblyPhase::Growing
        }
    }

    /// Number of shreds not yet placed
    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }

    /// Number of shreds placed so far, seed included
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    /// Steps needed to place every shred: one fewer than the shred count
    pub const fn total_steps(&self) -> usize {
        self.total_shreds.saturating_sub(1)
    }

    /// Apply one best-match step
    ///
    /// Returns the placement made, or `None` once every shred is placed.
    ///
    /// # Errors
    ///
    /// Returns `SignatureMismatch` if a remaining shred's signature cannot be
    /// compared with the sequence ends, and `InvalidSourceData` if shreds
    /// remain but none can be placed
    pub fn step(&mut self) -> Result<Option<Placement>> {
        if self.phase() == AssemblyPhase::Complete {
            return Ok(None);
        }

        let (Some(leftmost), Some(rightmost)) = (self.sequence.front(), self.sequence.back())
        else {
            return Err(invalid_source(&"assembly has no seed shred"));
        };

        let candidates = score_candidates(
            leftmost.edge(Side::Left),
            rightmost.edge(Side::Right),
            &self.remaining,
        )?;
        let best = select_best(&candidates)
            .ok_or_else(|| invalid_source(&"no candidate for the remaining shreds"))?;
        let shred = self.remaining.remove(&best.origin).ok_or_else(|| {
            invalid_source(&format!("selected shred x={} is not remaining", best.origin))
        })?;

        match best.side {
            Side::Left => {
                self.sequence.push_front(shred);
                self.seam_scores.push_front(best.score);
            }
            Side::Right => {
                self.sequence.push_back(shred);
                self.seam_scores.push_back(best.score);
            }
        }

        debug!(
            "placed shred x={} on the {:?} (score {:.1}, {} remaining)",
            best.origin,
            best.side,
            best.score,
            self.remaining_len()
        );

        Ok(Some(best.into()))
    }

    /// Run every remaining step and hand back the finished ordering
    ///
    /// # Errors
    ///
    /// Propagates any error from [`GreedyAssembler::step`]
    pub fn run(mut self) -> Result<Reconstruction> {
        while self.step()?.is_some() {}
        Ok(self.into_reconstruction())
    }

    fn into_reconstruction(self) -> Reconstruction {
        Reconstruction {
            shreds: self.sequence.into(),
            seam_scores: self.seam_scores.into(),
        }
    }
}

/// Final left-to-right ordering with the score of every seam
#[derive(Debug)]
pub struct Reconstruction {
    shreds: Vec<Shred>,
    seam_scores: Vec<f64>,
}

impl Reconstruction {
    /// Ordered shreds
    pub fn shreds(&self) -> &[Shred] {
        &self.shreds
    }

    /// Origin keys, left to right
    pub fn order(&self) -> Vec<u32> {
        self.shreds.iter().map(Shred::origin).collect()
    }

    /// Score of each seam between neighbours, left to right
    pub fn seam_scores(&self) -> &[f64] {
        &self.seam_scores
    }

    /// Sum of all seam scores
    pub fn total_score(&self) -> f64 {
        self.seam_scores.iter().sum()
    }

    /// Render the ordering into one image
    ///
    /// # Errors
    ///
    /// Propagates compositor errors
    pub fn composite(&self) -> Result<RgbaImage> {
        composite(&self.shreds)
    }
}

/// Split, order and composite in one call
///
/// # Errors
///
/// Returns an error if the image cannot be split or the shreds cannot be assembled
pub fn reconstruct_image(image: &RgbaImage, config: &ShredConfig) -> Result<RgbaImage> {
    let shreds = split_into_shreds(image, config)?;
    GreedyAssembler::new(shreds)?.run()?.composite()
}
