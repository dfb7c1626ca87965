//! # proxen-parser
//!
//! ast-grep-based C# parsing for proxen.
//!
//! Turns C# source text into a [`ModuleUnit`]: imports, namespace groups and
//! type declarations, with interface members reduced to what proxy generation
//! reads (modifiers, attribute sections, method signatures).
//!
//! A source whose tree contains an `ERROR` node is rejected as a whole; there
//! is no partial recovery.

mod csharp;
pub mod error;
pub mod parser;

use std::path::Path;

use proxen_core::syntax::ModuleUnit;

pub use error::ParserError;
pub use parser::{is_csharp_path, parse_source};

/// Parse C# source text into a [`ModuleUnit`].
///
/// `origin` identifies the source in errors and logs (usually its path).
///
/// # Errors
/// Returns [`ParserError::ParseFailed`] if the syntax tree contains an error.
pub fn parse_module(source: &str, origin: &str) -> Result<ModuleUnit, ParserError> {
    let tree = parser::parse_source(source);
    let root = tree.root();

    if let Some(error) = parser::find_error_node(&root) {
        let message = if error.is_missing() {
            format!("missing `{}`", error.kind())
        } else {
            format!("unexpected `{}`", parser::snippet(&error.text(), 40))
        };
        return Err(ParserError::ParseFailed {
            path: origin.to_string(),
            line: error.start_pos().line() + 1,
            message,
        });
    }

    let module = csharp::build_module(&root);
    tracing::debug!(
        origin,
        imports = module.imports.len(),
        members = module.members.len(),
        "parsed module"
    );
    Ok(module)
}

/// Read and parse a C# source file.
///
/// # Errors
/// Returns [`ParserError::Io`] if the file cannot be read, or
/// [`ParserError::ParseFailed`] if it does not parse.
pub fn parse_file(path: &Path) -> Result<ModuleUnit, ParserError> {
    let origin = path.display().to_string();
    let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: origin.clone(),
        source,
    })?;
    parse_module(&source, &origin)
}
