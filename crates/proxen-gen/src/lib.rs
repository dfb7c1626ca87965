//! # proxen-gen
//!
//! Proxy generation for interfaces marked for remote dispatch.
//!
//! The pipeline for one module is:
//! 1. [`discovery`] finds candidate interfaces (public + marker attribute) per
//!    namespace context,
//! 2. [`classify`] assigns every method a [`MethodShape`],
//! 3. [`plan`] lowers the result into a [`ProxyArtifact`],
//! 4. the artifact's `Display` impl renders the C# text.
//!
//! [`Generator`] wires the steps to the parser and the file system.

pub mod classify;
pub mod discovery;
mod error;
mod generator;
pub mod plan;
mod render;
pub mod writer;

pub use classify::{ClassifiedMethod, ForwardedArguments, MethodShape};
pub use discovery::{DiscoveredInterface, Discovery, RootScan, discover, has_proxy_interfaces};
pub use error::GenError;
pub use generator::Generator;
pub use plan::ProxyArtifact;
