//! Report rendering and the final single-write persistence step.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::{ImageResult, Outcome};

/// Marker framing each section header.
const HEADER_MARKER: &str = "=====";

/// Prefix of a section body for an image whose OCR failed.
const ERROR_PREFIX: &str = "[OCR ERROR]";

/// Render all result records into the report text.
///
/// One section per record, in input order: a header line carrying the
/// filename, the body, then a blank separator line. Zero records render to
/// the empty string. Rendering is pure so it can be tested without running
/// any OCR.
pub fn render_report(results: &[ImageResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() * 3);
    for result in results {
        lines.push(format!(
            "{HEADER_MARKER} {} {HEADER_MARKER}",
            result.file_name
        ));
        lines.push(match &result.outcome {
            Outcome::Text(text) => text.clone(),
            Outcome::Failed(message) => format!("{ERROR_PREFIX} {message}"),
        });
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Write the report in one shot, replacing any previous report at the path.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("failed to write report to {}", path.display()))
}
