mod members;
mod namespaces;
mod types;

use ast_grep_core::Node;
use proxen_core::syntax::{Declaration, ImportDecl, InterfaceMember, NamespaceGroup};

const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "record_declaration",
    "record_struct_declaration",
    "struct_declaration",
    "interface_declaration",
    "enum_declaration",
    "delegate_declaration",
];

/// Kinds that become a [`Declaration`] at module or namespace scope.
pub(super) fn is_declaration_kind(kind: &str) -> bool {
    kind == "namespace_declaration" || TYPE_DECLARATION_KINDS.contains(&kind)
}

pub(super) fn process_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<Declaration> {
    if node.kind().as_ref() == "namespace_declaration" {
        return namespaces::process_namespace(node, false).map(Declaration::Namespace);
    }
    Some(types::process_type_declaration(node))
}

/// Declarations directly inside `container`, in source order.
pub(super) fn process_declarations<D: ast_grep_core::Doc>(container: &Node<D>) -> Vec<Declaration> {
    container
        .children()
        .filter(|child| is_declaration_kind(child.kind().as_ref()))
        .filter_map(|child| process_declaration(&child))
        .collect()
}

pub(super) fn process_namespace<D: ast_grep_core::Doc>(
    node: &Node<D>,
    file_scoped: bool,
) -> Option<NamespaceGroup> {
    namespaces::process_namespace(node, file_scoped)
}

pub(super) fn process_using_directive<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<ImportDecl> {
    namespaces::process_using_directive(node)
}

pub(super) fn process_interface_member<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Option<InterfaceMember> {
    members::process_interface_member(node)
}
