//! Whole-file conversion: scan, then rewrite.

use beconv_core::Naming;
use tracing::debug;

use crate::{Diagnostic, DiagnosticCode, LineKind, NameSet, Result, Rewriter, Scanner};

/// A type rename applied by the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// Marked backend name, e.g. `BEUser`.
    pub from: String,
    /// Frontend name, e.g. `UserData`.
    pub to: String,
}

/// How many lines took each rewrite branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub declarations: usize,
    pub references: usize,
    pub plain: usize,
}

impl Stats {
    fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Declaration => self.declarations += 1,
            LineKind::Reference => self.references += 1,
            LineKind::Plain => self.plain += 1,
        }
    }

    pub fn lines(&self) -> usize {
        self.declarations + self.references + self.plain
    }
}

/// Result of converting one file.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rewritten text.
    pub output: String,
    /// Declared names, in declaration order.
    pub names: NameSet,
    /// One entry per declared name, in declaration order.
    pub renames: Vec<Rename>,
    pub stats: Stats,
    /// Warnings about lines the rewrite could not classify with confidence.
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert backend declarations in `text` to their frontend form.
///
/// The text is split on `\n` only; any `\r` stays part of its line.
/// An input without declarations still has its field keys converted.
pub fn convert(text: &str, naming: &Naming) -> Result<Conversion> {
    let scanner = Scanner::new(naming)?;

    let mut names = NameSet::new();
    let mut diagnostics = Vec::new();
    for decl in scanner.declarations(text) {
        if !names.insert(decl.name) {
            diagnostics.push(Diagnostic::warning(
                DiagnosticCode::DuplicateDeclaration,
                decl.line,
                format!("interface `{}` is declared more than once", naming.marked(decl.name)),
            ));
        }
    }
    for (line, content) in scanner.near_misses(text) {
        diagnostics.push(Diagnostic::warning(
            DiagnosticCode::NearMissDeclaration,
            line,
            format!(
                "`{}` is not in the form `interface {}Name {{`, not treated as a declaration",
                content.trim(),
                naming.marker()
            ),
        ));
    }
    diagnostics.sort_by_key(|diag| diag.line);
    debug!(names = names.len(), diagnostics = diagnostics.len(), "scanned declarations");

    let rewriter = Rewriter::new(naming, &names)?;
    let mut stats = Stats::default();
    let mut lines = Vec::new();
    for line in text.split('\n') {
        let (kind, rewritten) = rewriter.rewrite_line(line);
        stats.record(kind);
        lines.push(rewritten);
    }
    debug!(
        declarations = stats.declarations,
        references = stats.references,
        plain = stats.plain,
        "rewrote lines"
    );

    let renames = names
        .iter()
        .map(|name| Rename {
            from: naming.marked(name),
            to: naming.frontend_name(name),
        })
        .collect();

    Ok(Conversion {
        output: lines.join("\n"),
        names,
        renames,
        stats,
        diagnostics,
    })
}
