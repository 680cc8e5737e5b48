//! Batch OCR transcript generation for a folder of screenshots.
//!
//! The pipeline is a straight line run once per invocation: locate the OCR
//! engine, enumerate the screenshot files, run OCR on each in order, then
//! render and write one labeled report file.

pub mod config;
pub mod pipeline;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use snapscribe_ocr::OcrEngine;
use tracing::info;

use config::ReportConfig;

/// Outcome summary of a completed run.
pub struct ReportSummary {
    /// Where the report was written.
    pub path: PathBuf,
    /// Number of sections, one per enumerated image.
    pub sections: usize,
}

/// Run the whole pipeline: enumerate, process, render, write.
///
/// Per-image OCR failures are recorded inside the report; only structural
/// failures (missing screenshots directory, unwritable report path) abort
/// the run, in which case no report is written.
pub fn run(config: &ReportConfig, engine: &OcrEngine) -> Result<ReportSummary> {
    let screenshots_dir = config.screenshots_dir();
    let images = pipeline::enumerate_screenshots(&screenshots_dir)?;
    info!(
        "Processing {} screenshot(s) from {:?}",
        images.len(),
        screenshots_dir
    );

    let results = pipeline::process_images(engine, &images);
    let contents = report::render_report(&results);

    let path = config.report_path();
    report::write_report(&path, &contents)?;

    Ok(ReportSummary {
        path,
        sections: results.len(),
    })
}
