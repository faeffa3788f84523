//! Decoding shredded inputs and encoding reconstructed outputs

use crate::io::error::{Result, UnshredError};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Raster formats the reconstructed image can be written as
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Lossless PNG with alpha
    Png,
    /// JPEG; alpha is dropped
    Jpeg,
    /// Uncompressed BMP
    Bmp,
}

impl OutputFormat {
    /// Codec format handed to the encoder
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
        }
    }

    /// Conventional file extension
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match ImageFormat::from_path(path).ok()? {
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Bmp => Some(Self::Bmp),
            _ => None,
        }
    }

    const fn keeps_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

/// Decode the image at `path` into RGBA pixels
///
/// # Errors
///
/// Returns `ImageLoad` carrying the codec error unchanged if the file cannot
/// be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| UnshredError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Encode `img` to `path` in `format`, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The encoder rejects the image or the file cannot be written
pub fn save_image(img: &RgbaImage, format: OutputFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| UnshredError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let saved = if format.keeps_alpha() {
        img.save_with_format(path, format.image_format())
    } else {
        DynamicImage::ImageRgba8(img.clone())
            .to_rgb8()
            .save_with_format(path, format.image_format())
    };

    saved.map_err(|e| UnshredError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
