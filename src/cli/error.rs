//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::CatalogError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(ApplicationError::Catalog(e)) => match e {
                CatalogError::EmptyField(_) => crate::exitcode::USAGE,
                CatalogError::DuplicateAuthor(_) => crate::exitcode::DATAERR,
            },
            CliError::Application(_) => crate::exitcode::SOFTWARE,
        }
    }
}
