use ast_grep_core::Node;
use proxen_core::syntax::{ImportDecl, NamespaceGroup, NamespaceName};

use super::super::helpers;
use super::process_declarations;

pub(super) fn process_using_directive<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ImportDecl> {
    let text = node.text();
    let body = text.trim().trim_end_matches(';').trim();

    let (is_global, body) = match strip_keyword(body, "global") {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let body = strip_keyword(body, "using")?;
    let (is_static, body) = match strip_keyword(body, "static") {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let (alias, path) = match body.split_once('=') {
        Some((alias, path)) => (Some(normalize(alias)), normalize(path)),
        None => (None, normalize(body)),
    };
    if path.is_empty() {
        return None;
    }

    Some(ImportDecl {
        path,
        alias,
        is_static,
        is_global,
    })
}

pub(super) fn process_namespace<D: ast_grep_core::Doc>(
    node: &Node<D>,
    file_scoped: bool,
) -> Option<NamespaceGroup> {
    let name = node.field("name").map(|n| NamespaceName::parse(&n.text()))?;

    let members = if file_scoped {
        process_declarations(node)
    } else {
        helpers::field_or_child(node, "body", "declaration_list")
            .map(|body| process_declarations(&body))
            .unwrap_or_default()
    };

    Some(NamespaceGroup {
        name,
        file_scoped,
        members,
    })
}

/// Strip a leading keyword that is followed by whitespace.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    rest.starts_with(char::is_whitespace).then(|| rest.trim_start())
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_keyword_requires_word_boundary() {
        assert_eq!(strip_keyword("using System", "using"), Some("System"));
        assert_eq!(strip_keyword("global::System", "global"), None);
        assert_eq!(strip_keyword("staticky", "static"), None);
    }

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize("  System.\n  Linq "), "System. Linq");
    }
}
