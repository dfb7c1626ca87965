//! Intermediate representation of one generated artifact.
//!
//! Discovery results are lowered into plain data here; `render.rs` is the
//! only place that turns it into text.

use proxen_core::ProxyConventions;
use proxen_core::syntax::ModuleUnit;

use crate::classify::{ClassifiedMethod, MethodShape};
use crate::discovery::{DiscoveredInterface, Discovery, RootScan};

/// Everything written to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyArtifact {
    pub banner: String,
    /// Directive bodies, rendered as `using {import};`. Not deduplicated.
    pub imports: Vec<String>,
    /// One slot per top-level declaration of the source module.
    pub slots: Vec<RootSlot>,
}

impl ProxyArtifact {
    /// Generated classes in output order.
    pub fn classes(&self) -> impl Iterator<Item = &ProxyClassSpec> {
        self.slots.iter().flat_map(|slot| match slot {
            RootSlot::Namespace(block) => block.classes.as_slice(),
            RootSlot::Empty => &[][..],
        })
    }
}

/// Output for one top-level source declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSlot {
    Namespace(NamespaceBlock),
    /// Nothing generated; still separated by a blank line.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBlock {
    pub name: String,
    pub classes: Vec<ProxyClassSpec>,
}

/// One generated proxy class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClassSpec {
    /// `<Interface>Proxy`
    pub class_name: String,
    pub base_type: String,
    /// `global::`-qualified source interface.
    pub interface_type: String,
    pub annotations: Vec<String>,
    pub methods: Vec<MethodEmission>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodEmission {
    pub annotations: Vec<String>,
    /// Source declaration without its trailing `;`, emitted after `public `.
    pub signature: String,
    pub body: MethodBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodBody {
    /// `try { return <dispatch>; } catch (Exception) { throw; }`
    Forward(ForwardCall),
    /// `throw new NotImplementedException(<message>);`
    Unsupported { message: String },
}

/// A call into the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardCall {
    pub dispatcher: String,
    pub target: DispatchTarget,
    pub method_handle: String,
    /// `None` when the method has neither type parameters nor parameters.
    pub arguments: Option<ArgumentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchTarget {
    /// `CallVoidMethodAsync`
    Void,
    /// `CallMethodAsync<...>`
    WithResult(Vec<String>),
}

/// Trailing dispatcher arguments: an optional `Type[]` of generic arguments
/// and an `object[]` of parameter values, always present together with the
/// block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentBlock {
    pub type_arguments: Option<Vec<String>>,
    pub values: Vec<String>,
}

/// Lower a module's discovery result into an artifact.
#[must_use]
pub fn plan_artifact(
    module: &ModuleUnit,
    discovery: &Discovery<'_>,
    conventions: &ProxyConventions,
) -> ProxyArtifact {
    let imports = module
        .imports
        .iter()
        .map(proxen_core::syntax::ImportDecl::directive)
        .chain(discovery.namespaces().map(ToString::to_string))
        .chain(conventions.extra_imports.iter().cloned())
        .collect();

    let slots = discovery
        .roots
        .iter()
        .map(|root| match root {
            RootScan::Namespace { name, interfaces } => RootSlot::Namespace(NamespaceBlock {
                name: conventions.generated_namespace(name),
                classes: interfaces
                    .iter()
                    .map(|found| plan_class(found, conventions))
                    .collect(),
            }),
            RootScan::TopLevel(found) => RootSlot::Namespace(NamespaceBlock {
                name: conventions.fallback_namespace(),
                classes: vec![plan_class(found, conventions)],
            }),
            RootScan::Skipped => RootSlot::Empty,
        })
        .collect();

    ProxyArtifact {
        banner: conventions.banner.clone(),
        imports,
        slots,
    }
}

fn plan_class(found: &DiscoveredInterface<'_>, conventions: &ProxyConventions) -> ProxyClassSpec {
    let name = &found.interface.name;
    let interface_type = match found.namespace {
        Some(namespace) => format!("global::{namespace}.{name}"),
        None => format!("global::{name}"),
    };

    ProxyClassSpec {
        class_name: format!("{name}Proxy"),
        base_type: conventions.forwarding_base.clone(),
        interface_type,
        annotations: conventions.member_annotations.clone(),
        methods: found
            .methods
            .iter()
            .map(|method| plan_method(method, conventions))
            .collect(),
    }
}

fn plan_method(classified: &ClassifiedMethod<'_>, conventions: &ProxyConventions) -> MethodEmission {
    let target = match &classified.shape {
        MethodShape::DeferredVoid => Some(DispatchTarget::Void),
        MethodShape::DeferredValue { result_types } => {
            Some(DispatchTarget::WithResult(result_types.clone()))
        }
        MethodShape::Synchronous => None,
    };

    let body = match target {
        Some(target) => {
            let args = &classified.arguments;
            let arguments = (!args.is_empty()).then(|| ArgumentBlock {
                type_arguments: (!args.type_parameters.is_empty())
                    .then(|| args.type_parameters.clone()),
                values: args.parameter_names.clone(),
            });
            MethodBody::Forward(ForwardCall {
                dispatcher: conventions.dispatcher.clone(),
                target,
                method_handle: conventions.current_method.clone(),
                arguments,
            })
        }
        None => MethodBody::Unsupported {
            message: conventions.unsupported_message.clone(),
        },
    };

    MethodEmission {
        annotations: conventions.member_annotations.clone(),
        signature: classified
            .method
            .declaration
            .trim_end_matches(';')
            .trim_end()
            .to_string(),
        body,
    }
}
