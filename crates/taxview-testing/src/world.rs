//! Temp-dir test environment for CLI integration tests.

use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

use crate::fixtures;

/// A throwaway directory holding a data file, plus a command builder that
/// points the binary at it.
pub struct TestFixture {
    _temp_dir: TempDir,
    data_file: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Environment seeded with the well-formed sample CSV.
    pub fn new() -> Self {
        Self::with_csv(fixtures::SAMPLE_CSV)
    }

    /// Environment seeded with arbitrary CSV content.
    pub fn with_csv(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("tax_parameters.csv");
        fixtures::write_csv(&data_file, content).expect("Failed to write data file");

        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Path inside the temp dir that does not exist on disk.
    pub fn missing_file(&self) -> PathBuf {
        self._temp_dir.path().join("no_such_file.csv")
    }

    /// Write another file next to the seeded one and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self._temp_dir.path().join(name);
        fixtures::write_csv(&path, content)?;
        Ok(path)
    }

    /// A `taxview` command pre-pointed at the fixture's data file.
    pub fn command(&self) -> Command {
        let mut cmd = self.raw_command();
        cmd.arg("--data-file").arg(&self.data_file);
        cmd
    }

    /// A `taxview` command with no preset arguments.
    ///
    /// Runtime lookup: the compile-time `cargo_bin_cmd!` macro only
    /// resolves inside the crate that defines the binary.
    #[allow(deprecated)]
    pub fn raw_command(&self) -> Command {
        Command::cargo_bin("taxview").expect("taxview binary not built")
    }
}
