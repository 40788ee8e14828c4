//! Rewrite engine for backend-generated TypeScript declarations.
//!
//! The input grammar is constrained and machine-generated, so the engine is
//! line-oriented rather than a parser. A conversion runs in two passes:
//!
//! 1. [`Scanner`] collects every marker-prefixed interface name into a [`NameSet`].
//! 2. [`Rewriter`] walks the lines again, renaming declarations and references
//!    and folding `snake_case:` field keys into `camelCase:`.
//!
//! ```
//! use beconv_core::Naming;
//! use beconv_rewrite::convert;
//!
//! let input = "export interface BEUser {\n    user_id: number;\n}";
//! let conversion = convert(input, &Naming::default()).unwrap();
//! assert_eq!(conversion.output, "export interface UserData {\n    userId: number;\n}");
//! ```
//!
//! Lines that almost match a declaration are left to the plain-line path and
//! reported as [`Diagnostic`]s; they never fail the conversion.

mod convert;
mod diagnostic;
mod error;
mod names;
mod patterns;
mod rewriter;
mod scanner;

pub use convert::{Conversion, Rename, Stats, convert};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use error::{Error, Result};
pub use names::NameSet;
pub use rewriter::{LineKind, Rewriter};
pub use scanner::{Declaration, Scanner};
