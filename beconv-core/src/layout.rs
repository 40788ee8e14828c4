//! Where converted files land relative to their input.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};

use crate::Naming;

/// Subdirectory, relative to the input file's directory, that receives output.
pub const DEFAULT_OUTPUT_DIR: &str = "frontend/generated";

/// Output location rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    subdir: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl OutputLayout {
    pub fn new(subdir: impl Into<PathBuf>) -> Self {
        Self {
            subdir: subdir.into(),
        }
    }

    /// Directory that receives the output for `input`.
    pub fn output_dir(&self, input: &Path) -> PathBuf {
        let parent = input.parent().unwrap_or_else(|| Path::new(""));
        parent.join(&self.subdir)
    }

    /// Full output path for `input`: `<input dir>/<subdir>/<output file name>`.
    pub fn output_path(&self, input: &Path, naming: &Naming) -> Result<PathBuf> {
        let base_name = input
            .file_name()
            .ok_or_else(|| eyre!("'{}' does not name a file", input.display()))?
            .to_string_lossy();
        Ok(self
            .output_dir(input)
            .join(naming.output_file_name(&base_name)))
    }
}
