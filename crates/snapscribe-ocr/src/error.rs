//! Error taxonomy for a single OCR attempt.

use thiserror::Error;

/// Why OCR failed for one image.
///
/// These errors are recoverable at the batch level: the caller records the
/// message for the affected image and moves on.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The input image could not be decoded, or the staged copy could not
    /// be encoded.
    #[error("unreadable image: {0}")]
    Image(#[from] image::ImageError),

    /// The temporary file handed to the engine could not be created.
    #[error("could not stage image for OCR: {0}")]
    Stage(#[from] std::io::Error),

    /// The engine process could not be spawned (typically: not installed).
    #[error("could not launch OCR engine: {0}")]
    Launch(#[source] std::io::Error),

    /// The engine ran but exited with a failure status.
    #[error("OCR engine failed: {detail}")]
    Engine { detail: String },

    /// The engine produced output that is not valid UTF-8.
    #[error("OCR engine produced non-UTF-8 output")]
    Output(#[from] std::string::FromUtf8Error),
}
