//! C# adapter: ast-grep `compilation_unit` → [`ModuleUnit`].

mod helpers;
mod processors;

use ast_grep_core::Node;
use proxen_core::syntax::{Declaration, ModuleUnit};

/// Build the module model from a `compilation_unit` node.
///
/// Declarations following a file-scoped namespace belong to it, whether the
/// grammar nests them under the namespace node or leaves them as siblings.
pub(crate) fn build_module<D: ast_grep_core::Doc>(root: &Node<D>) -> ModuleUnit {
    let mut module = ModuleUnit::default();
    let mut file_scope: Option<usize> = None;

    for child in root.children() {
        match child.kind().as_ref() {
            "using_directive" => {
                if let Some(import) = processors::process_using_directive(&child) {
                    module.imports.push(import);
                }
            }
            "file_scoped_namespace_declaration" => {
                if let Some(group) = processors::process_namespace(&child, true) {
                    module.members.push(Declaration::Namespace(group));
                    file_scope = Some(module.members.len() - 1);
                }
            }
            kind if processors::is_declaration_kind(kind) => {
                let Some(declaration) = processors::process_declaration(&child) else {
                    continue;
                };
                match file_scope.and_then(|index| module.members.get_mut(index)) {
                    Some(Declaration::Namespace(group)) => group.members.push(declaration),
                    _ => module.members.push(declaration),
                }
            }
            _ => {}
        }
    }

    module
}

#[cfg(test)]
mod tests;
