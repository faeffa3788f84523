//! Edge signatures: per-row averaged colour of the columns nearest one side of a shred

use crate::io::configuration::OPAQUE_ALPHA;
use crate::io::error::{Result, invalid_parameter};
use image::RgbaImage;
use ndarray::{Array2, ArrayView2, Axis, Slice};

/// Number of colour channels stored per signature row (RGBA)
pub const SIGNATURE_CHANNELS: usize = 4;

/// Number of channels that take part in matching (RGB)
pub const MATCHED_CHANNELS: usize = 3;

/// Side of a shred, and the end of a growing sequence a shred attaches to
///
/// Ordered `Left` before `Right`, which the assembler relies on to break ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    /// Leftmost columns / front of the sequence
    Left,
    /// Rightmost columns / back of the sequence
    Right,
}

impl Side {
    /// The facing side: a shred attached on the left meets the sequence with its right edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Averaged colour of one shred edge, one RGBA row per pixel row
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSignature {
    rows: Array2<f64>,
}

impl EdgeSignature {
    /// Wrap a `(height, 4)` array of RGBA values
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the array does not have four channel columns
    pub fn from_rows(rows: Array2<f64>) -> Result<Self> {
        let channels = rows.ncols();
        if channels != SIGNATURE_CHANNELS {
            return Err(invalid_parameter(
                "signature_channels",
                &channels,
                &format!("edge signatures hold {SIGNATURE_CHANNELS} channels per row"),
            ));
        }
        Ok(Self { rows })
    }

    /// Number of rows, equal to the shred height
    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    /// Whether the signature has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.nrows() == 0
    }

    /// Colour channels used for matching, alpha excluded
    pub fn rgb(&self) -> ArrayView2<'_, f64> {
        self.rows.slice_axis(Axis(1), Slice::from(..MATCHED_CHANNELS))
    }
}

/// Averages a fixed number of columns next to a shred edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripeAverager {
    columns: u32,
}

impl StripeAverager {
    /// Create an averager over `columns` columns
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `columns` is zero
    pub fn new(columns: u32) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter(
                "stripe_columns",
                &columns,
                &"must average at least one column",
            ));
        }
        Ok(Self { columns })
    }

    /// Requested column count
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// An averager that fits a strip `width` pixels wide
    ///
    /// Used for the final shred of an unevenly divided image, which averages
    /// all of its columns when narrower than the configured count.
    pub fn clamped_to(self, width: u32) -> Self {
        Self {
            columns: self.columns.min(width).max(1),
        }
    }

    /// Compute the signature of one side of `image`
    ///
    /// Left uses columns `0..k`, right uses `width - k..width`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `image` is narrower than the column count
    pub fn average(&self, image: &RgbaImage, side: Side) -> Result<EdgeSignature> {
        let (width, height) = image.dimensions();
        if self.columns > width {
            return Err(invalid_parameter(
                "stripe_columns",
                &self.columns,
                &format!("cannot exceed the strip width of {width}"),
            ));
        }

        let start = match side {
            Side::Left => 0,
            Side::Right => width - self.columns,
        };
        let count = f64::from(self.columns);

        let mut rows = Array2::zeros((height as usize, SIGNATURE_CHANNELS));
        for y in 0..height {
            let mut sums = [0.0_f64; MATCHED_CHANNELS];
            for x in start..start + self.columns {
                let pixel = image.get_pixel(x, y).0;
                for (sum, &channel) in sums.iter_mut().zip(pixel.iter()) {
                    *sum += f64::from(channel);
                }
            }

            let row = y as usize;
            for (c, sum) in sums.iter().enumerate() {
                rows[(row, c)] = sum / count;
            }
            rows[(row, MATCHED_CHANNELS)] = OPAQUE_ALPHA;
        }

        EdgeSignature::from_rows(rows)
    }
}
