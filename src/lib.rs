//! Reconstruction of images cut into vertical shreds
//!
//! The image is split into fixed-width strips, each strip is summarised by
//! averaged colour signatures of its two edges, and a greedy assembler grows
//! one sequence by repeatedly attaching the best-matching remaining strip to
//! whichever end it fits best.

#![forbid(unsafe_code)]

/// Greedy ordering of shreds by edge similarity
pub mod algorithm;
/// Edge signatures and the dissimilarity score between them
pub mod analysis;
/// Input/output, configuration and error handling
pub mod io;
/// Splitting images into shreds and compositing them back together
pub mod spatial;

pub use algorithm::assembler::{GreedyAssembler, Reconstruction, reconstruct_image};
pub use io::configuration::ShredConfig;
pub use io::error::{Result, UnshredError};
