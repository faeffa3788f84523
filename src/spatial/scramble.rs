//! Produces shredded inputs by shuffling the shreds of an intact image

use crate::io::configuration::ShredConfig;
use crate::io::error::Result;
use crate::spatial::compositor::composite;
use crate::spatial::splitter::split_into_shreds;
use image::RgbaImage;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// A shuffled image together with the permutation that produced it
#[derive(Debug)]
pub struct Scrambled {
    /// The shuffled image
    pub image: RgbaImage,
    /// Origin keys of the intact image, in the order they now appear
    pub order: Vec<u32>,
}

/// Shuffle the shreds of `image` with a seeded generator
///
/// A narrower final shred stays last so the output splits back into exactly
/// the same shreds at the same width.
///
/// # Errors
///
/// Returns an error if the image cannot be split
pub fn scramble(image: &RgbaImage, config: &ShredConfig, seed: u64) -> Result<Scrambled> {
    let mut shreds = split_into_shreds(image, config)?;
    let full_width = shreds
        .iter()
        .take_while(|shred| shred.width() == config.shred_width())
        .count();

    let mut rng = StdRng::seed_from_u64(seed);
    if let Some(full) = shreds.get_mut(..full_width) {
        full.shuffle(&mut rng);
    }

    let order = shreds.iter().map(|shred| shred.origin()).collect();
    let image = composite(&shreds)?;

    Ok(Scrambled { image, order })
}
