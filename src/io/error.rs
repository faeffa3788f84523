//! Error types for shred splitting, matching and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum UnshredError {
    /// Failed to decode the shredded image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying codec error
        source: image::ImageError,
    },

    /// Failed to encode the reconstructed image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying codec error
        source: image::ImageError,
    },

    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input image or shred set cannot be reconstructed
    ///
    /// Raised for zero-area images, empty shred sets, shreds of differing
    /// heights and duplicate origin keys.
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Two edge signatures of different lengths were compared
    SignatureMismatch {
        /// Row count of the first signature
        left_len: usize,
        /// Row count of the second signature
        right_len: usize,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line target is neither a supported image nor a directory
    UnsupportedTarget {
        /// The rejected path
        path: PathBuf,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl UnshredError {
    /// Whether this error stems from invalid configuration or malformed input
    /// rather than from the codec or the file system
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. }
                | Self::InvalidSourceData { .. }
                | Self::SignatureMismatch { .. }
        )
    }
}

impl fmt::Display for UnshredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::SignatureMismatch {
                left_len,
                right_len,
            } => {
                write!(
                    f,
                    "Cannot compare edge signatures of {left_len} and {right_len} rows"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::UnsupportedTarget { path, reason } => {
                write!(f, "Unsupported target '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for UnshredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, UnshredError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> UnshredError {
    UnshredError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> UnshredError {
    UnshredError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
