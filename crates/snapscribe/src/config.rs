//! Fixed path layout for a report run.

use std::path::{Path, PathBuf};

/// Subdirectory of the root holding the input images.
pub const SCREENSHOTS_DIR: &str = "Screenshots";

/// Report file written at the root.
pub const REPORT_FILE: &str = "ocr_results.txt";

/// Path layout for one run.
///
/// Built once at startup and passed through the pipeline; the tool takes no
/// flags or environment configuration, so everything below the root is a
/// fixed constant.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    root: PathBuf,
}

impl ReportConfig {
    /// Layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the run.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned for screenshots.
    pub fn screenshots_dir(&self) -> PathBuf {
        self.root.join(SCREENSHOTS_DIR)
    }

    /// Output path of the report file.
    pub fn report_path(&self) -> PathBuf {
        self.root.join(REPORT_FILE)
    }
}

impl Default for ReportConfig {
    /// Layout rooted at the process working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_hangs_off_the_root() {
        let config = ReportConfig::new("/data/report");
        assert_eq!(config.root(), Path::new("/data/report"));
        assert_eq!(
            config.screenshots_dir(),
            Path::new("/data/report/Screenshots")
        );
        assert_eq!(
            config.report_path(),
            Path::new("/data/report/ocr_results.txt")
        );
    }
}
