//! snapscribe: batch OCR transcripts for a folder of screenshots.

use snapscribe::config::ReportConfig;
use snapscribe_ocr::OcrEngine;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = ReportConfig::default();
    let engine = OcrEngine::locate();

    let summary = snapscribe::run(&config, &engine)?;
    println!(
        "OCR complete. Wrote {} with {} sections.",
        summary.path.display(),
        summary.sections
    );
    Ok(())
}
