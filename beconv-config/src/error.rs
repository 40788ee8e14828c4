use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(beconv::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(beconv::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {key} '{value}'")]
    #[diagnostic(code(beconv::invalid_value), help("{reason}"))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid {key}")]
        span: Option<SourceSpan>,
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid value '{value}' for --{flag}")]
    #[diagnostic(code(beconv::invalid_override), help("{reason}"))]
    InvalidOverride {
        flag: String,
        value: String,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error pointing at a value in the source
    pub fn validation(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    /// Create an error for an invalid command-line override
    pub fn invalid_override(
        flag: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidOverride {
            flag: flag.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
