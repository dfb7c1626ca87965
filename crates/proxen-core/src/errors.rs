//! Cross-cutting error types for proxen.

use thiserror::Error;

/// Errors that can be raised by any proxen crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A convention value is unusable for generation.
    #[error("Invalid convention '{field}': {reason}")]
    InvalidConvention { field: String, reason: String },
}
