use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A configured pattern string is not valid strftime syntax. The catalog
    /// builder skips such patterns with a warning; the error surfaces only
    /// when compiling a [`FormatSpec`](crate::catalog::FormatSpec) directly.
    #[error("invalid configured datetime pattern '{pattern}'")]
    InvalidPattern { pattern: String },
}
