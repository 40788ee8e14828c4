//! Core operations.
//!
//! This module contains the business logic for beconv,
//! separated from CLI argument parsing and output rendering.

pub mod convert;

pub use convert::{ConvertOptions, Mode, convert};
