use ast_grep_core::Node;
use proxen_core::syntax::{InterfaceMember, MethodDecl, TypeRef};

use super::super::helpers;

pub(super) fn process_interface_member<D: ast_grep_core::Doc>(
    node: &Node<D>,
) -> Option<InterfaceMember> {
    let kind = node.kind();
    match kind.as_ref() {
        "method_declaration" => Some(
            process_method(node).map_or_else(
                || InterfaceMember::Other {
                    kind: kind.to_string(),
                },
                InterfaceMember::Method,
            ),
        ),
        k if k.ends_with("_declaration") => Some(InterfaceMember::Other {
            kind: k.to_string(),
        }),
        _ => None,
    }
}

fn process_method<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<MethodDecl> {
    let name = node.field("name").map(|n| n.text().trim().to_string())?;

    let return_type = node
        .field("returns")
        .or_else(|| node.field("type"))
        .map_or_else(|| TypeRef::Other(String::new()), |rtype| helpers::type_ref(&rtype));

    let type_parameters = helpers::field_or_child(node, "type_parameters", "type_parameter_list")
        .map(|list| {
            list.children()
                .filter(|child| child.kind().as_ref() == "type_parameter")
                .map(|param| param.text().trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let parameter_names = helpers::field_or_child(node, "parameters", "parameter_list")
        .map(|list| {
            list.children()
                .filter(|child| matches!(child.kind().as_ref(), "parameter" | "parameter_array"))
                .filter_map(|param| parameter_name(&param))
                .collect()
        })
        .unwrap_or_default();

    Some(MethodDecl {
        name,
        declaration: node.text().trim().to_string(),
        return_type,
        type_parameters,
        parameter_names,
        line: helpers::one_based_line(node),
    })
}

fn parameter_name<D: ast_grep_core::Doc>(param: &Node<D>) -> Option<String> {
    param
        .field("name")
        .or_else(|| {
            param
                .children()
                .filter(|child| child.kind().as_ref() == "identifier")
                .last()
        })
        .map(|name| name.text().trim().to_string())
}
