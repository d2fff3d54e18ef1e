//! Error types for the pixel pipeline.

use thiserror::Error;

/// Errors surfaced by pipeline, transform and resize operations.
///
/// Every variant is raised before any pixel is touched, so a failed call
/// leaves the caller's buffer exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// Buffer length does not match `width * height * 4`, or a dimension is zero.
    #[error("Invalid dimensions: {width}x{height} with {len} bytes (expected width * height * 4)")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    /// A parameter is outside its accepted range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A color string is not of the form `#RRGGBB`.
    #[error("Malformed color: {0:?} (expected #RRGGBB)")]
    MalformedColor(String),

    /// Export format name not recognised.
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// The image crate could not wrap the pixel buffer.
    #[error("Resample error: {0}")]
    Resample(String),
}

impl ProcessError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl Into<f64>,
        reason: &'static str,
    ) -> Self {
        ProcessError::InvalidParameter {
            name,
            value: value.into(),
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ProcessError>;
