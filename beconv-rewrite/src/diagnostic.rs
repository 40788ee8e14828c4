//! Diagnostics collected during a conversion.
//!
//! None of these stop a conversion: the rewrite falls back to plain-line
//! handling. Callers decide whether a warning should fail the run.

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Fails the run.
    Error,
    /// Reported, conversion still written.
    Warning,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    /// Looks like a marker declaration but is not in the anchored form.
    NearMissDeclaration,
    /// The same name is declared more than once.
    DuplicateDeclaration,
}

/// A diagnostic message tied to a line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub message: String,
    /// 1-based line number.
    pub line: usize,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(code: DiagnosticCode, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            line,
        }
    }

    /// Raise this diagnostic to an error.
    pub fn into_error(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {})", self.message, self.line)
    }
}
