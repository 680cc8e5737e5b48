//! Screenshot enumeration and the per-image OCR loop.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use snapscribe_ocr::OcrEngine;
use tracing::{debug, warn};

/// What happened to one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Extracted text, trailing whitespace already stripped. May be empty.
    Text(String),
    /// Description of why OCR failed for this image.
    Failed(String),
}

/// Per-image result record, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub file_name: String,
    pub outcome: Outcome,
}

/// List the PNG files directly inside the screenshots directory, sorted
/// ascending by filename.
///
/// A missing directory is a structural failure and aborts the run; an empty
/// directory is a valid zero-image batch.
pub fn enumerate_screenshots(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("screenshots directory not found: {}", dir.display());
    }

    let pattern = dir.join("*.png");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("screenshots path is not valid UTF-8: {}", dir.display()))?;

    let mut images: Vec<PathBuf> = glob::glob(pattern)
        .context("invalid screenshot glob pattern")?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    images.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

    debug!("Enumerated {} screenshot(s) in {:?}", images.len(), dir);
    Ok(images)
}

/// Run OCR on each image in order.
///
/// Failures are recovered per image: the error message is recorded in that
/// image's result and the loop moves on. One record is produced for every
/// input path, success or not.
pub fn process_images(engine: &OcrEngine, images: &[PathBuf]) -> Vec<ImageResult> {
    images
        .iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            debug!("Running OCR on {}", file_name);

            let outcome = match engine.recognize_file(path) {
                Ok(text) => Outcome::Text(text),
                Err(err) => {
                    warn!("OCR failed for {}: {}", file_name, err);
                    Outcome::Failed(err.to_string())
                }
            };

            ImageResult { file_name, outcome }
        })
        .collect()
}
