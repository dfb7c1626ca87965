use ast_grep_core::Node;
use proxen_core::syntax::TypeRef;

pub(super) fn extract_modifiers<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|child| child.kind().as_ref() == "modifier")
        .map(|child| child.text().trim().to_string())
        .collect()
}

/// Attribute section text between the brackets, minus any `target:` prefix.
pub(super) fn attribute_section_text<D: ast_grep_core::Doc>(list: &Node<D>) -> String {
    let text = list.text();
    let trimmed = text.trim();
    let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let mut inner = inner.strip_suffix(']').unwrap_or(inner).trim();

    if let Some(target) = list
        .children()
        .find(|child| child.kind().as_ref() == "attribute_target_specifier")
    {
        let target_text = target.text();
        inner = inner
            .strip_prefix(target_text.trim())
            .unwrap_or(inner)
            .trim();
    }

    inner.to_string()
}

pub(super) fn attribute_sections<D: ast_grep_core::Doc>(node: &Node<D>) -> Vec<String> {
    node.children()
        .filter(|child| child.kind().as_ref() == "attribute_list")
        .map(|list| attribute_section_text(&list))
        .collect()
}

/// Field lookup with a fallback to the first child of the given kind.
pub(super) fn field_or_child<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    field: &str,
    kind: &str,
) -> Option<Node<'r, D>> {
    node.field(field)
        .or_else(|| node.children().find(|child| child.kind().as_ref() == kind))
}

pub(super) fn type_ref<D: ast_grep_core::Doc>(node: &Node<D>) -> TypeRef {
    match node.kind().as_ref() {
        "identifier" | "type_identifier" => TypeRef::Name(node.text().trim().to_string()),
        "generic_name" => {
            let name = node
                .field("name")
                .or_else(|| {
                    node.children()
                        .find(|child| child.kind().as_ref() == "identifier")
                })
                .map(|ident| ident.text().trim().to_string());
            let Some(name) = name else {
                return TypeRef::Other(node.text().to_string());
            };
            let arguments = node
                .children()
                .find(|child| child.kind().as_ref() == "type_argument_list")
                .map(|list| type_arguments(&list))
                .unwrap_or_default();
            TypeRef::Generic { name, arguments }
        }
        _ => TypeRef::Other(node.text().to_string()),
    }
}

fn type_arguments<D: ast_grep_core::Doc>(list: &Node<D>) -> Vec<String> {
    list.children()
        .filter(|child| !matches!(child.kind().as_ref(), "<" | ">" | "," | "comment"))
        .map(|child| child.text().trim().to_string())
        .collect()
}

pub(super) fn one_based_line<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    u32::try_from(node.start_pos().line() + 1).unwrap_or(u32::MAX)
}
