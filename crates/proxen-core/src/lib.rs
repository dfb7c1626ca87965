//! # proxen-core
//!
//! Core types shared by every proxen crate:
//! - the syntax model produced by `proxen-parser` and consumed by `proxen-gen`
//!   ([`syntax`]),
//! - the fixed identifiers written into every generated proxy ([`conventions`]),
//! - cross-cutting error types ([`errors`]).
//!
//! Domain-specific errors (`ParserError`, `GenError`, `ConfigError`) live in
//! their respective crates.

pub mod conventions;
pub mod errors;
pub mod syntax;

pub use conventions::ProxyConventions;
pub use errors::CoreError;
