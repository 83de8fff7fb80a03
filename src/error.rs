use thiserror::Error;

/// The primary error type for the image-inspector crate.
///
/// Only file-level failures surface here; sparse or malformed tag data
/// degrades to absent fields instead of erroring.
#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("Exiftool failed to start or execute")]
    Exiftool(#[from] exiftool::ExifToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
