//! A single vertical strip of the shredded image

use crate::analysis::signature::{EdgeSignature, Side, StripeAverager};
use crate::io::error::Result;
use image::RgbaImage;

/// One vertical strip with its edge signatures computed once at construction
#[derive(Clone, Debug)]
pub struct Shred {
    origin: u32,
    image: RgbaImage,
    left_edge: EdgeSignature,
    right_edge: EdgeSignature,
}

impl Shred {
    /// Wrap a strip cut at x-coordinate `origin` of the shredded image
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the strip is narrower than the
    /// averager's column count
    pub fn new(origin: u32, image: RgbaImage, averager: &StripeAverager) -> Result<Self> {
        let left_edge = averager.average(&image, Side::Left)?;
        let right_edge = averager.average(&image, Side::Right)?;
        Ok(Self {
            origin,
            image,
            left_edge,
            right_edge,
        })
    }

    /// Wrap the final, possibly narrower, strip of an unevenly divided image
    ///
    /// A strip narrower than the column count averages all of its columns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the strip has zero width
    pub fn trailing(origin: u32, image: RgbaImage, averager: &StripeAverager) -> Result<Self> {
        let clamped = averager.clamped_to(image.width());
        Self::new(origin, image, &clamped)
    }

    /// Left x-coordinate in the shredded image; identifies the shred
    pub const fn origin(&self) -> u32 {
        self.origin
    }

    /// Pixels of the strip
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Strip width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Strip height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Signature of the leftmost columns
    pub const fn left_edge(&self) -> &EdgeSignature {
        &self.left_edge
    }

    /// Signature of the rightmost columns
    pub const fn right_edge(&self) -> &EdgeSignature {
        &self.right_edge
    }

    /// Signature of the requested side
    pub const fn edge(&self, side: Side) -> &EdgeSignature {
        match side {
            Side::Left => self.left_edge(),
            Side::Right => self.right_edge(),
        }
    }
}
