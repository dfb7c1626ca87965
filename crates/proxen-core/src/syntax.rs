//! Syntax model for one parsed source module.
//!
//! This is the tree shape the generator depends on: modules hold imports and
//! top-level declarations, namespaces and interfaces hold nested declarations,
//! and declarations carry their modifiers, attributes, identifiers, parameter
//! lists and type references. Anything discovery and emission never read is
//! reduced to an `Other` variant that only keeps its kind.

/// Parsed form of a single source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleUnit {
    /// `using` directives in source order.
    pub imports: Vec<ImportDecl>,
    /// Top-level declarations in source order.
    pub members: Vec<Declaration>,
}

impl ModuleUnit {
    /// Imported paths in source order.
    pub fn import_paths(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|import| import.path.as_str())
    }
}

/// One `using` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Namespace or type path, e.g. `System.Threading.Tasks`.
    pub path: String,
    /// Alias name for `using Alias = Path;`.
    pub alias: Option<String>,
    /// `using static Path;`
    pub is_static: bool,
    /// `global using Path;`
    pub is_global: bool,
}

impl ImportDecl {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
            is_static: false,
            is_global: false,
        }
    }

    /// Directive body as it is written back after `using`.
    ///
    /// The `global` keyword is dropped: the directive is re-declared locally in
    /// the generated file.
    #[must_use]
    pub fn directive(&self) -> String {
        let mut body = String::new();
        if self.is_static {
            body.push_str("static ");
        }
        if let Some(alias) = &self.alias {
            body.push_str(alias);
            body.push_str(" = ");
        }
        body.push_str(&self.path);
        body
    }
}

/// A declaration at module or namespace scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Namespace(NamespaceGroup),
    Interface(InterfaceDecl),
    /// Class, struct, enum, record, delegate, ...
    Other { kind: String, name: Option<String> },
}

/// A named container of nested declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceGroup {
    pub name: NamespaceName,
    /// `namespace A.B;` rather than `namespace A.B { ... }`.
    pub file_scoped: bool,
    pub members: Vec<Declaration>,
}

/// Namespace name, split by whether it is a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceName {
    /// Single segment, e.g. `App`.
    Simple(String),
    /// Dotted path, e.g. `App.Services`.
    Qualified(String),
}

impl NamespaceName {
    /// Classify a namespace name from its source text. Whitespace between
    /// segments is dropped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let name: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if name.contains('.') {
            Self::Qualified(name)
        } else {
            Self::Simple(name)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Simple(name) | Self::Qualified(name) => name,
        }
    }

    #[must_use]
    pub const fn is_qualified(&self) -> bool {
        matches!(self, Self::Qualified(_))
    }
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    /// Modifier keywords in source order (`public`, `partial`, ...).
    pub modifiers: Vec<String>,
    /// Text of each attribute section, without the brackets and without an
    /// attribute target specifier: `[ProxyInterface]` becomes `ProxyInterface`,
    /// `[A, B(1)]` becomes `A, B(1)`.
    pub attribute_lists: Vec<String>,
    pub members: Vec<InterfaceMember>,
    /// One-based source line of the declaration.
    pub line: u32,
}

impl InterfaceDecl {
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.modifiers.iter().any(|m| m == "public")
    }

    /// Method members in source order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            InterfaceMember::Method(method) => Some(method),
            InterfaceMember::Other { .. } => None,
        })
    }
}

/// A member of an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceMember {
    Method(MethodDecl),
    /// Property, event, indexer, nested type, ...
    Other { kind: String },
}

/// A method signature declared in an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    /// The declaration exactly as written, attributes included, trailing `;`
    /// included.
    pub declaration: String,
    pub return_type: TypeRef,
    /// The method's own generic parameters, e.g. `["T", "U"]`.
    pub type_parameters: Vec<String>,
    /// Parameter identifiers in declaration order.
    pub parameter_names: Vec<String>,
    /// One-based source line of the declaration.
    pub line: u32,
}

/// A type reference in return position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Unqualified single identifier, e.g. `Task`.
    Name(String),
    /// Unqualified generic name, e.g. `Task<int>`. Arguments are kept verbatim.
    Generic { name: String, arguments: Vec<String> },
    /// Any other form (predefined, qualified, array, nullable, tuple, ...),
    /// verbatim.
    Other(String),
}
