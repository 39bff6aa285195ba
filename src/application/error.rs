//! Application-level errors (wraps domain errors)

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::CatalogError;

/// Application errors wrap catalog errors and add lending-rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("no book by '{0}' in the catalog")]
    UnknownAuthor(String),

    #[error("the book by '{author}' is already on loan to '{borrower}' since {since}")]
    AlreadyOnLoan {
        author: String,
        borrower: String,
        since: NaiveDate,
    },

    #[error("the book by '{0}' is not on loan")]
    NotOnLoan(String),

    #[error("cannot remove the book by '{author}' while it is on loan to '{borrower}'")]
    OnLoanRemoval { author: String, borrower: String },

    #[error("borrower name must not be empty")]
    BlankBorrower,
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
