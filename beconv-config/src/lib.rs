// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for the beconv converter.
//!
//! Settings come from an optional `beconv.toml`:
//!
//! ```toml
//! [convert]
//! marker = "BE"
//! suffix = "Data"
//! output_dir = "frontend/generated"
//! ```
//!
//! Every key is optional and falls back to the defaults shown above.
//! Command-line [`Overrides`] are applied on top.

mod config;
mod error;
mod file;

pub use config::{Config, Overrides};
pub use error::{Error, Result};
pub use file::{BeconvToml, CONFIG_FILE_NAME};
