//! Convert operation - backend declarations to frontend types.

use std::path::Path;

use beconv_config::Config;
use beconv_core::{File, read_file};
use beconv_rewrite::{Diagnostic, DiagnosticCode};
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::{ConvertReport, ConvertResult};

/// What to do with the converted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write the output file.
    Write,
    /// Show the output file without writing it.
    DryRun,
    /// Print only the converted text.
    Stdout,
}

/// Options for the convert operation.
pub struct ConvertOptions<'a> {
    /// Explicit output file; derived from the input path when `None`.
    pub output: Option<&'a Path>,
    pub mode: Mode,
    /// Treat near-miss declarations as errors.
    pub strict: bool,
}

/// Execute the convert operation.
///
/// Reads `input`, rewrites it with the configured naming and, unless
/// diagnostics were raised to errors, writes or previews the result.
pub fn convert(input: &Path, config: &Config, opts: ConvertOptions) -> Result<ConvertReport> {
    let naming = config.naming();
    let output_path = match opts.output {
        Some(path) => path.to_path_buf(),
        None => config.layout().output_path(input, &naming)?,
    };
    debug!(input = %input.display(), output = %output_path.display(), "converting");

    let text = read_file(input)?;
    let conversion = beconv_rewrite::convert(&text, &naming)
        .wrap_err_with(|| format!("failed to convert '{}'", input.display()))?;

    let diagnostics: Vec<Diagnostic> = conversion
        .diagnostics
        .into_iter()
        .map(|diag| {
            if opts.strict && diag.code == DiagnosticCode::NearMissDeclaration {
                diag.into_error()
            } else {
                diag
            }
        })
        .collect();

    let result = if diagnostics.iter().any(|d| d.severity.is_error()) {
        ConvertResult::Rejected
    } else {
        match opts.mode {
            Mode::Write => {
                File::new(&output_path, conversion.output).write()?;
                ConvertResult::Written { path: output_path }
            }
            Mode::DryRun => ConvertResult::Preview {
                path: output_path,
                content: conversion.output,
            },
            Mode::Stdout => ConvertResult::Stdout {
                content: conversion.output,
            },
        }
    };

    Ok(ConvertReport {
        input: input.to_path_buf(),
        renames: conversion.renames,
        stats: conversion.stats,
        diagnostics,
        result,
    })
}
