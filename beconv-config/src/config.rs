use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use beconv_core::{
    DEFAULT_MARKER, DEFAULT_OUTPUT_DIR, DEFAULT_SUFFIX, Naming, OutputLayout, is_identifier,
};
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{CONFIG_FILE_NAME, Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    convert: RawConvert,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConvert {
    marker: Option<Spanned<String>>,
    suffix: Option<Spanned<String>>,
    output_dir: Option<Spanned<String>>,
}

/// Resolved converter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix identifying backend type names.
    pub marker: String,
    /// Suffix appended to bare names.
    pub suffix: String,
    /// Output directory, relative to the input file's directory.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub marker: Option<String>,
    pub suffix: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse a beconv.toml from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        let mut config = Config::default();

        let invalid = |key: &str, value: &Spanned<String>, reason: &str| {
            Error::validation(
                key,
                value.get_ref(),
                reason,
                content,
                filename,
                Some(SourceSpan::from(value.span())),
            )
        };

        if let Some(marker) = raw.convert.marker {
            if let Some(reason) = identifier_error(marker.get_ref()) {
                return Err(invalid("marker", &marker, reason));
            }
            config.marker = marker.into_inner();
        }
        if let Some(suffix) = raw.convert.suffix {
            if let Some(reason) = identifier_error(suffix.get_ref()) {
                return Err(invalid("suffix", &suffix, reason));
            }
            config.suffix = suffix.into_inner();
        }
        if let Some(output_dir) = raw.convert.output_dir {
            if let Some(reason) = output_dir_error(Path::new(output_dir.get_ref())) {
                return Err(invalid("output_dir", &output_dir, reason));
            }
            config.output_dir = PathBuf::from(output_dir.into_inner());
        }

        Ok(config)
    }

    /// Apply command-line overrides, validating each value.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(marker) = overrides.marker {
            if let Some(reason) = identifier_error(&marker) {
                return Err(Error::invalid_override("marker", marker, reason));
            }
            self.marker = marker;
        }
        if let Some(suffix) = overrides.suffix {
            if let Some(reason) = identifier_error(&suffix) {
                return Err(Error::invalid_override("suffix", suffix, reason));
            }
            self.suffix = suffix;
        }
        if let Some(output_dir) = overrides.output_dir {
            if let Some(reason) = output_dir_error(&output_dir) {
                return Err(Error::invalid_override(
                    "out-dir",
                    output_dir.display().to_string(),
                    reason,
                ));
            }
            self.output_dir = output_dir;
        }
        Ok(self)
    }

    pub fn naming(&self) -> Naming {
        Naming::new(&self.marker, &self.suffix)
    }

    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_dir)
    }
}

fn identifier_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("value cannot be empty")
    } else if !is_identifier(value) {
        Some("use only ASCII letters, numbers, and underscores")
    } else {
        None
    }
}

fn output_dir_error(path: &Path) -> Option<&'static str> {
    if path.as_os_str().is_empty() {
        Some("output directory cannot be empty")
    } else if !path.is_relative() {
        Some("output directory must be relative to the input file's directory")
    } else {
        None
    }
}
