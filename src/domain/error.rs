//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Errors raised by the catalog itself.
///
/// Absence is never an error: lookups return `Ok(None)`, removal returns
/// `Ok(false)` and filters return empty collections when nothing matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("a book by '{0}' is already in the catalog")]
    DuplicateAuthor(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
