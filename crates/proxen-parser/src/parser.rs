//! ast-grep wrapper and C# source detection.

use std::path::Path;

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Whether a path names a C# source file (`.cs`, case-insensitive).
#[must_use]
pub fn is_csharp_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("cs"))
}

/// Parse C# source into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::CSharp.ast_grep(source)
}

/// First `ERROR` or zero-width `MISSING` node in pre-order, if any.
pub(crate) fn find_error_node<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "ERROR" || node.is_missing() {
        return Some(node.clone());
    }
    node.children().find_map(|child| find_error_node(&child))
}

/// First line of `text`, cut to at most `max_chars` characters.
pub(crate) fn snippet(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or_default().trim();
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_csharp() {
        assert!(is_csharp_path(Path::new("Services/IFoo.cs")));
        assert!(is_csharp_path(Path::new("Legacy.CS")));
    }

    #[test]
    fn detect_non_csharp() {
        assert!(!is_csharp_path(Path::new("main.rs")));
        assert!(!is_csharp_path(Path::new("README")));
        assert!(!is_csharp_path(Path::new("view.cshtml")));
    }

    #[test]
    fn parse_source_produces_compilation_unit() {
        let tree = parse_source("namespace App.Services { public interface IFoo { } }");
        assert_eq!(tree.root().kind().as_ref(), "compilation_unit");
        assert!(find_error_node(&tree.root()).is_none());
    }

    #[test]
    fn unbalanced_source_has_error_node() {
        let tree = parse_source("public interface IFoo { Task Ping(); } }");
        assert!(find_error_node(&tree.root()).is_some());
    }

    #[test]
    fn missing_token_counts_as_error() {
        let tree = parse_source("public interface IFoo { Task Ping() }");
        let node = find_error_node(&tree.root()).expect("missing `;` should be reported");
        assert!(node.is_missing() || node.kind().as_ref() == "ERROR");
    }

    #[test]
    fn snippet_truncates_long_lines() {
        assert_eq!(snippet("short", 10), "short");
        assert_eq!(snippet("abcdefghij-klm", 10), "abcdefghij...");
        assert_eq!(snippet("first\nsecond", 10), "first");
    }
}
