//! Glues an ordered run of shreds back into one image

use crate::io::error::{Result, invalid_source};
use crate::spatial::shred::Shred;
use image::RgbaImage;
use image::imageops::replace;

/// Paste `shreds` left to right at cumulative x-offsets
///
/// Pixels are copied verbatim; seams are neither blended nor scaled.
///
/// # Errors
///
/// Returns `InvalidSourceData` if `shreds` is empty or the heights differ
pub fn composite(shreds: &[Shred]) -> Result<RgbaImage> {
    let Some(first) = shreds.first() else {
        return Err(invalid_source(&"no shreds to composite"));
    };

    let height = first.height();
    if let Some(odd) = shreds.iter().find(|shred| shred.height() != height) {
        return Err(invalid_source(&format!(
            "shred at x={} is {} pixels tall, expected {height}",
            odd.origin(),
            odd.height()
        )));
    }

    let width: u32 = shreds.iter().map(Shred::width).sum();
    let mut canvas = RgbaImage::new(width, height);

    let mut x_dest = 0_i64;
    for shred in shreds {
        replace(&mut canvas, shred.image(), x_dest, 0);
        x_dest += i64::from(shred.width());
    }

    Ok(canvas)
}
