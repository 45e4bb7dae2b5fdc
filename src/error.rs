use thiserror::Error;

/// Errors raised by the host side of the viewer: calibration input and image loading.
///
/// The annotation core never returns these; invalid geometry is reported
/// through [`crate::command::CommandStatus::Fail`] instead.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Invalid {field} on {axis} axis: {value}")]
    InvalidCalibration {
        field: &'static str,
        axis: &'static str,
        value: f64,
    },

    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dropped file has no readable content: {0}")]
    EmptyFile(String),
}

/// Result type for viewer operations
pub type ViewerResult<T> = Result<T, ViewerError>;
