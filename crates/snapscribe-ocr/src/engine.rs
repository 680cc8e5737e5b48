//! OCR engine location and invocation.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use crate::error::OcrError;

/// Conventional name of the engine binary.
#[cfg(windows)]
const ENGINE_EXE: &str = "tesseract.exe";
#[cfg(not(windows))]
const ENGINE_EXE: &str = "tesseract";

/// Default install location checked when the search path has no engine.
#[cfg(windows)]
const FALLBACK_PATH: &str = r"C:\Program Files\Tesseract-OCR\tesseract.exe";
#[cfg(not(windows))]
const FALLBACK_PATH: &str = "/usr/local/bin/tesseract";

/// Handle to an external OCR engine executable.
///
/// Resolution happens once at construction; each [`recognize_file`] call
/// spawns one engine process.
///
/// [`recognize_file`]: OcrEngine::recognize_file
pub struct OcrEngine {
    program: PathBuf,
}

impl OcrEngine {
    /// Resolve the engine executable.
    ///
    /// Checks the process search path first, then the default install
    /// location for the target OS. If neither resolves, the bare program
    /// name is kept and lookup is deferred to spawn time, where it fails
    /// per image rather than up front.
    pub fn locate() -> Self {
        if let Some(path) = env::var_os("PATH").and_then(|var| search_path(&var, ENGINE_EXE)) {
            debug!("Found OCR engine on PATH at {:?}", path);
            return Self { program: path };
        }

        let fallback = Path::new(FALLBACK_PATH);
        if fallback.exists() {
            debug!("Using OCR engine at fallback location {:?}", fallback);
            return Self {
                program: fallback.to_path_buf(),
            };
        }

        debug!("OCR engine not resolved, deferring to spawn-time lookup");
        Self {
            program: PathBuf::from(ENGINE_EXE),
        }
    }

    /// Create an engine around an explicit program path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program this engine invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Extract text from one image file.
    ///
    /// The image is decoded, staged as a temporary PNG, and handed to the
    /// engine with stdout capture. Trailing whitespace is stripped from the
    /// result; an empty recognition result stays an empty string.
    pub fn recognize_file(&self, image_path: &Path) -> Result<String, OcrError> {
        let img = image::open(image_path)?;
        trace!("Decoded {:?}: {}x{}", image_path, img.width(), img.height());

        let staged = tempfile::Builder::new()
            .prefix("snapscribe-")
            .suffix(".png")
            .tempfile()?;
        img.save(staged.path())?;

        let output = Command::new(&self.program)
            .arg(staged.path())
            .arg("stdout")
            .output()
            .map_err(OcrError::Launch)?;

        if !output.status.success() {
            return Err(OcrError::Engine {
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout)?;
        Ok(text.trim_end().to_string())
    }
}

/// Resolve an executable name against a search-path variable value.
fn search_path(path_var: &OsStr, exe: &str) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(exe))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn search_path_finds_engine_in_listed_directory() {
        let empty = tempfile::tempdir().unwrap();
        let with_engine = tempfile::tempdir().unwrap();
        let engine_path = with_engine.path().join(ENGINE_EXE);
        fs::write(&engine_path, b"").unwrap();

        let var = env::join_paths([empty.path(), with_engine.path()]).unwrap();
        assert_eq!(search_path(&var, ENGINE_EXE), Some(engine_path));
    }

    #[test]
    fn search_path_misses_when_no_directory_has_engine() {
        let empty = tempfile::tempdir().unwrap();
        let var = env::join_paths([empty.path()]).unwrap();
        assert_eq!(search_path(&var, ENGINE_EXE), None);
    }

    #[test]
    fn search_path_ignores_directory_named_like_engine() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(ENGINE_EXE)).unwrap();

        let var = env::join_paths([dir.path()]).unwrap();
        assert_eq!(search_path(&var, ENGINE_EXE), None);
    }

    #[test]
    fn with_program_keeps_explicit_path() {
        let engine = OcrEngine::with_program("/opt/ocr/tesseract");
        assert_eq!(engine.program(), Path::new("/opt/ocr/tesseract"));
    }

    #[test]
    fn recognize_rejects_undecodable_image() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.png");
        fs::write(&bogus, b"not a png at all").unwrap();

        let engine = OcrEngine::with_program("irrelevant");
        let err = engine.recognize_file(&bogus).unwrap_err();
        assert!(matches!(err, OcrError::Image(_)));
    }

    #[test]
    fn recognize_reports_missing_engine_as_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("blank.png");
        image::RgbImage::new(4, 4).save(&png).unwrap();

        let engine = OcrEngine::with_program(dir.path().join("no-such-engine"));
        let err = engine.recognize_file(&png).unwrap_err();
        assert!(matches!(err, OcrError::Launch(_)));
    }

    #[cfg(unix)]
    fn fake_engine(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-tesseract");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn recognize_strips_trailing_whitespace_from_engine_output() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("blank.png");
        image::RgbImage::new(4, 4).save(&png).unwrap();

        let program = fake_engine(dir.path(), "#!/bin/sh\nprintf 'Hello\\n\\n'\n");
        let engine = OcrEngine::with_program(program);
        assert_eq!(engine.recognize_file(&png).unwrap(), "Hello");
    }

    #[cfg(unix)]
    #[test]
    fn recognize_preserves_empty_engine_output() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("blank.png");
        image::RgbImage::new(4, 4).save(&png).unwrap();

        let program = fake_engine(dir.path(), "#!/bin/sh\nexit 0\n");
        let engine = OcrEngine::with_program(program);
        assert_eq!(engine.recognize_file(&png).unwrap(), "");
    }

    #[cfg(unix)]
    #[test]
    fn recognize_surfaces_engine_stderr_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("blank.png");
        image::RgbImage::new(4, 4).save(&png).unwrap();

        let program = fake_engine(dir.path(), "#!/bin/sh\necho 'boom' >&2\nexit 1\n");
        let engine = OcrEngine::with_program(program);
        let err = engine.recognize_file(&png).unwrap_err();
        assert_eq!(err.to_string(), "OCR engine failed: boom");
    }
}
