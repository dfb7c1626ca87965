//! Parser error types for proxen-parser.

/// Errors that can occur while reading or parsing a source module.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {path} at line {line}: {message}")]
    ParseFailed {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ParserError {
    /// Identity of the source the error belongs to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::ParseFailed { path, .. } | Self::Io { path, .. } => path,
        }
    }
}
