//! Core utilities and types for the beconv converter.
//!
//! This crate provides the naming rules, output path layout and file
//! helpers shared by the rewrite engine and the CLI.

mod file;
mod layout;
mod naming;
mod utils;

// File operations
pub use file::{File, read_file};
// Output layout
pub use layout::{DEFAULT_OUTPUT_DIR, OutputLayout};
// Naming rules
pub use naming::{DEFAULT_MARKER, DEFAULT_SUFFIX, Naming};
// String utilities
pub use utils::{is_identifier, snake_to_camel_case};
