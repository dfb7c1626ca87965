//! Generation error types.

use proxen_core::CoreError;
use proxen_parser::ParserError;

/// Errors that can occur while generating or writing a proxy artifact.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error(transparent)]
    Conventions(#[from] CoreError),

    #[error("Source path has no file name: {path}")]
    InvalidSource { path: String },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
