//! Method classification.
//!
//! Every method of a candidate interface gets exactly one [`MethodShape`].
//! Generic type parameters and parameter names are captured independently in
//! [`ForwardedArguments`], since both asynchronous shapes forward them the
//! same way.

use proxen_core::syntax::{MethodDecl, TypeRef};

/// How a method is forwarded to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodShape {
    /// Returns the bare deferred type (`Task`): forwarded to `CallVoidMethodAsync`.
    DeferredVoid,
    /// Returns the generic deferred type (`Task<T>`): forwarded to
    /// `CallMethodAsync<T>`. Arguments are kept verbatim, however many there are.
    DeferredValue { result_types: Vec<String> },
    /// Anything else. Emitted as a stub that always throws.
    Synchronous,
}

impl MethodShape {
    #[must_use]
    pub const fn is_asynchronous(&self) -> bool {
        !matches!(self, Self::Synchronous)
    }
}

/// Values passed after the method handle in a forwarding call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedArguments {
    /// The method's own generic parameters, forwarded as `typeof(T)` handles.
    pub type_parameters: Vec<String>,
    /// Parameter identifiers, forwarded as boxed values.
    pub parameter_names: Vec<String>,
}

impl ForwardedArguments {
    /// No type parameters and no parameters: the argument block is omitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.type_parameters.is_empty() && self.parameter_names.is_empty()
    }
}

/// A method of a candidate interface with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMethod<'m> {
    pub method: &'m MethodDecl,
    pub shape: MethodShape,
    pub arguments: ForwardedArguments,
}

/// Classify a method against the deferred type identifier.
#[must_use]
pub fn classify_method<'m>(method: &'m MethodDecl, deferred_type: &str) -> ClassifiedMethod<'m> {
    ClassifiedMethod {
        method,
        shape: shape_of(&method.return_type, deferred_type),
        arguments: ForwardedArguments {
            type_parameters: method.type_parameters.clone(),
            parameter_names: method.parameter_names.clone(),
        },
    }
}

/// Shape implied by a return type. The identifier comparison ignores case;
/// qualified names never match.
#[must_use]
pub fn shape_of(return_type: &TypeRef, deferred_type: &str) -> MethodShape {
    match return_type {
        TypeRef::Name(name) if eq_ignore_case(name, deferred_type) => MethodShape::DeferredVoid,
        TypeRef::Generic { name, arguments } if eq_ignore_case(name, deferred_type) => {
            MethodShape::DeferredValue {
                result_types: arguments.clone(),
            }
        }
        _ => MethodShape::Synchronous,
    }
}

/// Case-insensitive comparison on Unicode lowercase forms.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
