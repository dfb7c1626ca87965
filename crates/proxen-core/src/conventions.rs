//! Well-known identifiers written into every generated proxy.
//!
//! The defaults must stay identical across generation runs: the generated
//! classes link against the marker attribute, the dispatcher and the
//! forwarding base type by these exact names. They are configurable only so a
//! host project that ships its own runtime can point the generator at it.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

const DEFAULT_BANNER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by proxen
//
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------";

/// Fixed identifiers used by discovery and emission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConventions {
    /// Namespace that defines the marker attribute.
    pub marker_namespace: String,

    /// Short name of the marker attribute, as written inside `[...]`.
    pub marker_name: String,

    /// Identifier of the deferred (asynchronous result) return type.
    pub deferred_type: String,

    /// Root namespace of the proxy runtime. Un-namespaced interfaces are
    /// emitted under `<root>.<suffix>`.
    pub proxy_namespace_root: String,

    /// Suffix appended to a source namespace to form the generated namespace.
    pub generated_namespace_suffix: String,

    /// Base type every generated proxy class inherits from.
    pub forwarding_base: String,

    /// Fully qualified dispatcher type exposing `CallVoidMethodAsync` and
    /// `CallMethodAsync<T>`.
    pub dispatcher: String,

    /// Expression yielding the reflective handle of the executing method.
    pub current_method: String,

    /// Expression passed to the exception thrown by synchronous stubs.
    pub unsupported_message: String,

    /// Annotations placed above every generated class and member.
    pub member_annotations: Vec<String>,

    /// Imports appended after the source and namespace imports.
    pub extra_imports: Vec<String>,

    /// Comment block at the top of every artifact.
    pub banner: String,
}

impl Default for ProxyConventions {
    fn default() -> Self {
        Self {
            marker_namespace: "BlazorMobile.Common.Attributes".to_string(),
            marker_name: "ProxyInterface".to_string(),
            deferred_type: "Task".to_string(),
            proxy_namespace_root: "BlazorMobile.Proxy".to_string(),
            generated_namespace_suffix: "ProxyGenerated".to_string(),
            forwarding_base: "global::BlazorMobile.Proxy.Interop.Abstract.BlazorMobileProxyClass"
                .to_string(),
            dispatcher: "global::BlazorMobile.Common.Services.MethodDispatcher".to_string(),
            current_method: "global::System.Reflection.MethodBase.GetCurrentMethod()".to_string(),
            unsupported_message: "BlazorMobile.Proxy.Resource.NonAsyncMethodNotSupported"
                .to_string(),
            member_annotations: vec![
                "[EditorBrowsable(EditorBrowsableState.Never)]".to_string(),
                "[Obsolete(BlazorMobile.Proxy.Resource.ObsoleteMessage, true)]".to_string(),
            ],
            extra_imports: vec![
                "BlazorMobile.Common.Services".to_string(),
                "System.ComponentModel".to_string(),
            ],
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl ProxyConventions {
    /// Fully qualified marker name, e.g. `BlazorMobile.Common.Attributes.ProxyInterface`.
    #[must_use]
    pub fn marker_full_name(&self) -> String {
        format!("{}.{}", self.marker_namespace, self.marker_name)
    }

    /// Namespace that receives the proxies of a namespaced source interface.
    #[must_use]
    pub fn generated_namespace(&self, source_namespace: &str) -> String {
        format!("{source_namespace}.{}", self.generated_namespace_suffix)
    }

    /// Namespace that receives the proxies of top-level source interfaces.
    #[must_use]
    pub fn fallback_namespace(&self) -> String {
        self.generated_namespace(&self.proxy_namespace_root)
    }

    /// Reject values that would make discovery match nothing or emit
    /// unparseable namespaces.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConvention`] naming the first bad field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let required = [
            ("marker_namespace", &self.marker_namespace),
            ("marker_name", &self.marker_name),
            ("deferred_type", &self.deferred_type),
            ("proxy_namespace_root", &self.proxy_namespace_root),
            ("generated_namespace_suffix", &self.generated_namespace_suffix),
            ("forwarding_base", &self.forwarding_base),
            ("dispatcher", &self.dispatcher),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CoreError::InvalidConvention {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.marker_name.contains('.') {
            return Err(CoreError::InvalidConvention {
                field: "marker_name".to_string(),
                reason: "must be a short name; put the namespace in marker_namespace".to_string(),
            });
        }

        Ok(())
    }
}
