//! Candidate discovery.
//!
//! An interface is a candidate iff it is `public` and one of its attribute
//! sections equals, ignoring case:
//! - the marker's short name, provided the module imports the marker's
//!   namespace, or
//! - the marker's fully qualified name, regardless of imports.
//!
//! Matching is on the whole attribute section text; no symbol resolution is
//! attempted.
//!
//! Only qualified (dotted) namespaces at module scope are scanned, one level
//! deep. Members of a single-segment namespace are never discovered, and
//! nested namespaces are not descended into.

use proxen_core::ProxyConventions;
use proxen_core::syntax::{Declaration, InterfaceDecl, ModuleUnit};

use crate::classify::{ClassifiedMethod, classify_method, eq_ignore_case};

/// Marker attribute matcher bound to one module's imports.
#[derive(Debug, Clone)]
pub struct MarkerMatcher<'c> {
    short_name: &'c str,
    full_name: String,
    has_marker_import: bool,
}

impl<'c> MarkerMatcher<'c> {
    #[must_use]
    pub fn for_module(module: &ModuleUnit, conventions: &'c ProxyConventions) -> Self {
        let has_marker_import = module
            .import_paths()
            .any(|path| path == conventions.marker_namespace);

        Self {
            short_name: &conventions.marker_name,
            full_name: conventions.marker_full_name(),
            has_marker_import,
        }
    }

    #[must_use]
    pub const fn has_marker_import(&self) -> bool {
        self.has_marker_import
    }

    /// Whether `interface` is eligible for proxy generation.
    #[must_use]
    pub fn is_candidate(&self, interface: &InterfaceDecl) -> bool {
        interface.is_public()
            && interface.attribute_lists.iter().any(|section| {
                (self.has_marker_import && eq_ignore_case(section, self.short_name))
                    || eq_ignore_case(section, &self.full_name)
            })
    }

    fn candidate<'m>(&self, declaration: &'m Declaration) -> Option<&'m InterfaceDecl> {
        match declaration {
            Declaration::Interface(interface) if self.is_candidate(interface) => Some(interface),
            _ => None,
        }
    }
}

/// A candidate interface with its classified methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredInterface<'m> {
    /// Enclosing qualified namespace, `None` at module scope.
    pub namespace: Option<&'m str>,
    pub interface: &'m InterfaceDecl,
    pub methods: Vec<ClassifiedMethod<'m>>,
}

/// What discovery found for one top-level declaration of the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootScan<'m> {
    /// A qualified namespace and its candidates, possibly none.
    Namespace {
        name: &'m str,
        interfaces: Vec<DiscoveredInterface<'m>>,
    },
    /// A candidate declared at module scope.
    TopLevel(DiscoveredInterface<'m>),
    /// Anything else, including single-segment namespaces.
    Skipped,
}

/// Discovery result for one module, one [`RootScan`] per top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery<'m> {
    pub roots: Vec<RootScan<'m>>,
}

impl<'m> Discovery<'m> {
    /// Qualified namespace names found at module scope, with or without
    /// candidates.
    pub fn namespaces(&self) -> impl Iterator<Item = &'m str> + '_ {
        self.roots.iter().filter_map(|root| match root {
            RootScan::Namespace { name, .. } => Some(*name),
            _ => None,
        })
    }

    /// Every candidate in source order.
    pub fn interfaces(&self) -> impl Iterator<Item = &DiscoveredInterface<'m>> {
        self.roots.iter().flat_map(|root| match root {
            RootScan::Namespace { interfaces, .. } => interfaces.as_slice(),
            RootScan::TopLevel(interface) => std::slice::from_ref(interface),
            RootScan::Skipped => &[][..],
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interfaces().next().is_none()
    }
}

/// Discover and classify every candidate interface of `module`.
#[must_use]
pub fn discover<'m>(module: &'m ModuleUnit, conventions: &ProxyConventions) -> Discovery<'m> {
    let matcher = MarkerMatcher::for_module(module, conventions);
    let deferred = conventions.deferred_type.as_str();

    let roots = module
        .members
        .iter()
        .map(|member| match member {
            Declaration::Namespace(group) if group.name.is_qualified() => {
                let name = group.name.as_str();
                let interfaces = group
                    .members
                    .iter()
                    .filter_map(|nested| matcher.candidate(nested))
                    .map(|interface| discovered(Some(name), interface, deferred))
                    .collect();
                RootScan::Namespace { name, interfaces }
            }
            other => matcher
                .candidate(other)
                .map_or(RootScan::Skipped, |interface| {
                    RootScan::TopLevel(discovered(None, interface, deferred))
                }),
        })
        .collect();

    let discovery = Discovery { roots };
    tracing::debug!(
        has_marker_import = matcher.has_marker_import(),
        candidates = discovery.interfaces().count(),
        "discovery complete"
    );
    discovery
}

/// Whether `module` holds at least one candidate. Same rules as [`discover`],
/// stopping at the first match.
#[must_use]
pub fn has_proxy_interfaces(module: &ModuleUnit, conventions: &ProxyConventions) -> bool {
    let matcher = MarkerMatcher::for_module(module, conventions);

    module.members.iter().any(|member| match member {
        Declaration::Namespace(group) if group.name.is_qualified() => group
            .members
            .iter()
            .any(|nested| matcher.candidate(nested).is_some()),
        other => matcher.candidate(other).is_some(),
    })
}

fn discovered<'m>(
    namespace: Option<&'m str>,
    interface: &'m InterfaceDecl,
    deferred_type: &str,
) -> DiscoveredInterface<'m> {
    let methods: Vec<ClassifiedMethod<'m>> = interface
        .methods()
        .map(|method| classify_method(method, deferred_type))
        .collect();

    for classified in methods.iter().filter(|m| !m.shape.is_asynchronous()) {
        tracing::debug!(
            interface = %interface.name,
            method = %classified.method.name,
            line = classified.method.line,
            "synchronous method, emitting a throwing stub"
        );
    }
    tracing::debug!(
        interface = %interface.name,
        namespace = namespace.unwrap_or("<module>"),
        line = interface.line,
        methods = methods.len(),
        "candidate interface"
    );

    DiscoveredInterface {
        namespace,
        interface,
        methods,
    }
}
