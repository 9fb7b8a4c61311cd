use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The note used throughout the tutorial, on one line.
#[allow(dead_code)]
pub const BOB_NOTE: &str =
    "<note><author>Bob</author><date>18-08-2019</date><content>Call Bill</content></note>";

#[allow(dead_code)]
pub const BOB_LINE: &str = "Note from Bob (18-08-2019)  -->  Call Bill";

/// Temporary directory holding note files written by a test
#[allow(dead_code)]
pub struct TestNotes {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestNotes {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    /// Write `content` to `name` inside the temporary directory
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write note fixture {}", path.display()))?;
        Ok(path)
    }

    /// Path inside the temporary directory that is never created
    pub fn missing(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Path to the checked-in sample note
#[allow(dead_code)]
pub fn fixture_note_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/note.xml")
}
