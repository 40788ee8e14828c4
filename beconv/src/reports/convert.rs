//! Convert command report data structures.

use std::{io, path::PathBuf};

use beconv_rewrite::{Diagnostic, Rename, Severity, Stats};

use super::output::{Output, Report};

/// Report data from a conversion.
#[derive(Debug)]
pub struct ConvertReport {
    /// Input file.
    pub input: PathBuf,

    /// Type renames, in declaration order.
    pub renames: Vec<Rename>,

    /// Line classification counts.
    pub stats: Stats,

    /// Warnings and errors about the input.
    pub diagnostics: Vec<Diagnostic>,

    /// What happened to the converted text.
    pub result: ConvertResult,
}

/// Outcome of a conversion.
#[derive(Debug)]
pub enum ConvertResult {
    /// Output file was written.
    Written { path: PathBuf },
    /// Dry-run preview.
    Preview { path: PathBuf, content: String },
    /// Converted text goes to stdout only.
    Stdout { content: String },
    /// Diagnostics were raised to errors; nothing was written.
    Rejected,
}

impl ConvertReport {
    /// Whether the run should exit successfully.
    pub fn is_success(&self) -> bool {
        !matches!(self.result, ConvertResult::Rejected)
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) -> io::Result<()> {
        self.render_diagnostics(out);

        match &self.result {
            ConvertResult::Written { path } => {
                self.render_summary(out);
                out.preformatted(&format!(
                    "Conversion complete. Output saved to {}",
                    path.display()
                ));
            }
            ConvertResult::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.raw(content)?;
                if !content.ends_with('\n') {
                    out.newline();
                }
                out.divider("Summary");
                self.render_summary(out);
                out.preformatted(&format!("Would write {}", path.display()));
            }
            ConvertResult::Stdout { content } => out.raw(content)?,
            ConvertResult::Rejected => out.error(&format!(
                "{} was not converted: fix the lines above or run without --strict",
                self.input.display()
            )),
        }
        Ok(())
    }
}

impl ConvertReport {
    fn render_diagnostics(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            let msg = format!("{}:{}: {}", self.input.display(), diag.line, diag.message);
            match diag.severity {
                Severity::Error => out.error(&msg),
                Severity::Warning => out.warning(&msg),
            }
        }
    }

    fn render_summary(&self, out: &mut dyn Output) {
        if self.renames.is_empty() {
            out.preformatted("No marked declarations found, only field keys were converted");
        } else {
            out.section(&format!("Types ({})", self.renames.len()));
            for rename in &self.renames {
                out.list_item(&format!("{} -> {}", rename.from, rename.to));
            }
        }
        out.newline();

        out.key_value(
            "Lines",
            &format!(
                "{} ({} declaration{}, {} reference{}, {} plain)",
                self.stats.lines(),
                self.stats.declarations,
                plural(self.stats.declarations),
                self.stats.references,
                plural(self.stats.references),
                self.stats.plain
            ),
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use beconv_rewrite::DiagnosticCode;

    use super::*;
    use crate::reports::{
        TerminalOutput,
        output::{BufferOutput, FullWriter},
    };

    fn report(result: ConvertResult) -> ConvertReport {
        ConvertReport {
            input: PathBuf::from("src/types/BEUser.ts"),
            renames: vec![Rename {
                from: "BEUser".to_string(),
                to: "UserData".to_string(),
            }],
            stats: Stats {
                declarations: 1,
                references: 0,
                plain: 2,
            },
            diagnostics: Vec::new(),
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = BufferOutput::default();
        report(ConvertResult::Written {
            path: PathBuf::from("src/types/frontend/generated/UserData.ts"),
        })
        .render(&mut out)
        .unwrap();

        assert_eq!(
            out.stdout,
            vec![
                "Types (1):",
                "  - BEUser -> UserData",
                "",
                "Lines: 3 (1 declaration, 0 references, 2 plain)",
                "Conversion complete. Output saved to src/types/frontend/generated/UserData.ts",
            ]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_render_stdout_only_prints_content() {
        let mut out = BufferOutput::default();
        let mut report = report(ConvertResult::Stdout {
            content: "export interface UserData {\n}\n".to_string(),
        });
        report.diagnostics.push(Diagnostic::warning(
            DiagnosticCode::NearMissDeclaration,
            3,
            "looks odd",
        ));
        report.render(&mut out).unwrap();

        assert_eq!(out.stdout, vec!["export interface UserData {\n}\n"]);
        assert_eq!(out.stderr, vec!["warning: src/types/BEUser.ts:3: looks odd"]);
    }

    #[test]
    fn test_render_rejected() {
        let mut out = BufferOutput::default();
        let mut report = report(ConvertResult::Rejected);
        report.diagnostics.push(
            Diagnostic::warning(DiagnosticCode::NearMissDeclaration, 1, "looks odd").into_error(),
        );
        report.render(&mut out).unwrap();

        assert!(!report.is_success());
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr.len(), 2);
        assert_eq!(out.stderr[0], "error: src/types/BEUser.ts:1: looks odd");
    }

    #[test]
    fn test_render_preview_without_declarations() {
        let mut out = BufferOutput::default();
        let mut report = report(ConvertResult::Preview {
            path: PathBuf::from("out/UserData.ts"),
            content: "type A = string;".to_string(),
        });
        report.renames.clear();
        report.render(&mut out).unwrap();

        assert_eq!(out.stdout[0], "── out/UserData.ts ──");
        assert_eq!(out.stdout[1], "type A = string;");
        assert_eq!(out.stdout[2], "");
        assert_eq!(out.stdout[3], "── Summary ──");
        assert_eq!(
            out.stdout[4],
            "No marked declarations found, only field keys were converted"
        );
        assert_eq!(out.stdout.last().unwrap(), "Would write out/UserData.ts");
    }

    #[test]
    fn test_render_stdout_fails_when_output_is_unwritable() {
        let report = report(ConvertResult::Stdout {
            content: "export interface UserData {\n}\n".to_string(),
        });

        let result = report.render(&mut TerminalOutput::with_writer(FullWriter));

        assert!(result.is_err());
    }
}
