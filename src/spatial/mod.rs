//! Shreds and the operations that cut and glue images
//!
//! This module contains spatial-related functionality including:
//! - Splitting an image into vertical shreds
//! - Compositing ordered shreds into one image
//! - Shuffling shreds to produce shredded inputs

/// Ordered shreds pasted into one image
pub mod compositor;
/// Seeded shuffling of an intact image's shreds
pub mod scramble;
/// A single vertical strip and its edge signatures
pub mod shred;
/// Cutting an image into shreds
pub mod splitter;

pub use shred::Shred;
