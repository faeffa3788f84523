//! Cuts an image into contiguous vertical shreds

use crate::analysis::signature::StripeAverager;
use crate::io::configuration::ShredConfig;
use crate::io::error::{Result, invalid_source};
use crate::spatial::shred::Shred;
use image::RgbaImage;
use image::imageops::crop_imm;
use std::ops::Range;

/// X-ranges `[0, W), [W, 2W), ...` tiling `[0, total_width)` exactly
///
/// The last range is narrower when `total_width` is not a multiple of
/// `shred_width`. A zero `shred_width` yields no ranges.
pub fn shred_spans(total_width: u32, shred_width: u32) -> Vec<Range<u32>> {
    if shred_width == 0 {
        return Vec::new();
    }

    (0..total_width)
        .step_by(shred_width as usize)
        .map(|start| start..start.saturating_add(shred_width).min(total_width))
        .collect()
}

/// Split `image` into shreds keyed by their left x-coordinate, in x order
///
/// # Errors
///
/// Returns `InvalidSourceData` if the image has zero width or zero height,
/// and `InvalidParameter` if a shred other than the last is narrower than
/// the configured column count
pub fn split_into_shreds(image: &RgbaImage, config: &ShredConfig) -> Result<Vec<Shred>> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_source(&format!(
            "cannot shred a {width}x{height} image"
        )));
    }

    let averager = StripeAverager::new(config.stripe_columns())?;
    shred_spans(width, config.shred_width())
        .into_iter()
        .map(|span| {
            let span_width = span.end - span.start;
            let strip = crop_imm(image, span.start, 0, span_width, height).to_image();
            if span.end == width && span_width < averager.columns() {
                Shred::trailing(span.start, strip, &averager)
            } else {
                Shred::new(span.start, strip, &averager)
            }
        })
        .collect()
}
