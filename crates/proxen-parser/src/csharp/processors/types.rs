use ast_grep_core::Node;
use proxen_core::syntax::{Declaration, InterfaceDecl};

use super::super::helpers;
use super::process_interface_member;

pub(super) fn process_type_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Declaration {
    let name = node.field("name").map(|n| n.text().trim().to_string());

    match (node.kind().as_ref(), name) {
        ("interface_declaration", Some(name)) => Declaration::Interface(process_interface(node, name)),
        (kind, name) => Declaration::Other {
            kind: kind.to_string(),
            name,
        },
    }
}

fn process_interface<D: ast_grep_core::Doc>(node: &Node<D>, name: String) -> InterfaceDecl {
    let members = helpers::field_or_child(node, "body", "declaration_list")
        .map(|body| {
            body.children()
                .filter_map(|child| process_interface_member(&child))
                .collect()
        })
        .unwrap_or_default();

    InterfaceDecl {
        name,
        modifiers: helpers::extract_modifiers(node),
        attribute_lists: helpers::attribute_sections(node),
        members,
        line: helpers::one_based_line(node),
    }
}
