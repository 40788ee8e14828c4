use thiserror::Error;

/// Result type for rewrite operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A pattern built from the naming rules or the discovered names failed to compile.
    #[error("failed to build pattern for marker '{marker}'")]
    Pattern {
        marker: String,
        #[source]
        source: regex::Error,
    },
}
