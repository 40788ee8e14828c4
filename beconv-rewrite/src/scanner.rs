//! Declaration scanning.

use beconv_core::Naming;

use crate::{Result, patterns::Patterns};

/// A marker-prefixed interface declaration found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// 1-based line number.
    pub line: usize,
    /// Bare name, without the marker.
    pub name: &'a str,
}

/// Finds every marker-prefixed interface declared in a file.
#[derive(Debug, Clone)]
pub struct Scanner {
    patterns: Patterns,
}

impl Scanner {
    pub fn new(naming: &Naming) -> Result<Self> {
        Ok(Self {
            patterns: Patterns::new(naming)?,
        })
    }

    /// Every declaration line in `text`, in file order. Duplicates included.
    pub fn declarations<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Declaration<'a>> + 'a {
        text.split('\n').enumerate().filter_map(|(idx, line)| {
            self.patterns.declaration(line).map(|decl| Declaration {
                line: idx + 1,
                name: decl.name,
            })
        })
    }

    /// Lines that start like a declaration but are not in the anchored form,
    /// as `(line number, line)`.
    ///
    /// These lines are rewritten as plain or reference lines.
    pub fn near_misses<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        text.split('\n')
            .enumerate()
            .filter(|(_, line)| self.patterns.is_near_miss(line))
            .map(|(idx, line)| (idx + 1, line))
    }
}
