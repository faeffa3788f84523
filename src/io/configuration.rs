//! Reconstruction constants and validated runtime configuration

use crate::io::error::{Result, invalid_parameter};

/// Default width of every shred in pixels
pub const DEFAULT_SHRED_WIDTH: u32 = 32;

/// Default number of columns averaged into an edge signature
pub const DEFAULT_STRIPE_COLUMNS: u32 = 4;

/// Alpha written into every signature row; alpha never takes part in matching
pub const OPAQUE_ALPHA: f64 = 255.0;

/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix added to reconstructed output filenames
pub const OUTPUT_SUFFIX: &str = "_unshredded";
/// Suffix added to scrambled output filenames
pub const SCRAMBLED_SUFFIX: &str = "_scrambled";
/// File extensions picked up from a directory target
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Shred geometry shared by the splitter and the stripe averager
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShredConfig {
    shred_width: u32,
    stripe_columns: u32,
}

impl ShredConfig {
    /// Validate and build a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either value is zero or if
    /// `stripe_columns` exceeds `shred_width`
    pub fn new(shred_width: u32, stripe_columns: u32) -> Result<Self> {
        if shred_width == 0 {
            return Err(invalid_parameter(
                "shred_width",
                &shred_width,
                &"must be a positive number of pixels",
            ));
        }
        if stripe_columns == 0 {
            return Err(invalid_parameter(
                "stripe_columns",
                &stripe_columns,
                &"must average at least one column",
            ));
        }
        if stripe_columns > shred_width {
            return Err(invalid_parameter(
                "stripe_columns",
                &stripe_columns,
                &format!("cannot exceed the shred width of {shred_width}"),
            ));
        }

        Ok(Self {
            shred_width,
            stripe_columns,
        })
    }

    /// Width of every shred except possibly the last
    pub const fn shred_width(&self) -> u32 {
        self.shred_width
    }

    /// Columns averaged at each edge
    pub const fn stripe_columns(&self) -> u32 {
        self.stripe_columns
    }
}

impl Default for ShredConfig {
    fn default() -> Self {
        Self {
            shred_width: DEFAULT_SHRED_WIDTH,
            stripe_columns: DEFAULT_STRIPE_COLUMNS,
        }
    }
}
