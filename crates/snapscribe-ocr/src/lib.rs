//! OCR engine integration for snapscribe.
//!
//! This crate locates an externally installed Tesseract executable and
//! invokes it once per image, capturing the extracted text.

mod engine;
mod error;

pub use engine::OcrEngine;
pub use error::OcrError;
