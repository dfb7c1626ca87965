use proxen_core::syntax::{
    Declaration, InterfaceDecl, InterfaceMember, MethodDecl, ModuleUnit, NamespaceGroup, TypeRef,
};

use crate::parse_module;

mod interfaces;

fn parse(source: &str) -> ModuleUnit {
    parse_module(source, "test.cs").expect("source should parse")
}

fn fixture_module() -> ModuleUnit {
    parse(include_str!("../../../tests/fixtures/services.cs"))
}

fn namespace<'a>(members: &'a [Declaration], name: &str) -> &'a NamespaceGroup {
    members
        .iter()
        .find_map(|member| match member {
            Declaration::Namespace(group) if group.name.as_str() == name => Some(group),
            _ => None,
        })
        .unwrap_or_else(|| panic!("should find namespace '{name}'"))
}

fn interface<'a>(members: &'a [Declaration], name: &str) -> &'a InterfaceDecl {
    members
        .iter()
        .find_map(|member| match member {
            Declaration::Interface(decl) if decl.name == name => Some(decl),
            _ => None,
        })
        .unwrap_or_else(|| panic!("should find interface '{name}'"))
}

fn method<'a>(decl: &'a InterfaceDecl, name: &str) -> &'a MethodDecl {
    decl.methods()
        .find(|m| m.name == name)
        .unwrap_or_else(|| panic!("should find method '{name}'"))
}
