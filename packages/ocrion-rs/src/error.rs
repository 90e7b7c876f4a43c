use thiserror::Error;

/// Failures raised by the layout stages.
///
/// Only `InvalidImageDimensions` ever reaches callers of the reading-order pipeline; the
/// other variants are absorbed into degraded output.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid image dimensions {width}x{height}: both must be positive")]
    InvalidImageDimensions { width: u32, height: u32 },
    #[error("malformed region at index {index}: {reason}")]
    MalformedRegion { index: usize, reason: String },
    #[error("malformed block at index {index}: {reason}")]
    MalformedBlock { index: usize, reason: String },
}
