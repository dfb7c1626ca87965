//! Generation entry points: parse, discover, plan, render, write.

use std::path::{Path, PathBuf};

use proxen_core::ProxyConventions;
use proxen_core::syntax::ModuleUnit;

use crate::discovery::{discover, has_proxy_interfaces};
use crate::error::GenError;
use crate::plan::{ProxyArtifact, plan_artifact};
use crate::writer;

/// Proxy generator bound to one set of conventions.
///
/// Holds no per-module state; one instance can serve any number of modules,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    conventions: ProxyConventions,
}

impl Generator {
    /// # Errors
    /// Returns [`GenError::Conventions`] if the conventions fail validation.
    pub fn new(conventions: ProxyConventions) -> Result<Self, GenError> {
        conventions.validate()?;
        Ok(Self { conventions })
    }

    #[must_use]
    pub const fn conventions(&self) -> &ProxyConventions {
        &self.conventions
    }

    #[must_use]
    pub fn plan(&self, module: &ModuleUnit) -> ProxyArtifact {
        let discovery = discover(module, &self.conventions);
        plan_artifact(module, &discovery, &self.conventions)
    }

    /// Artifact text for a parsed module.
    #[must_use]
    pub fn render_module(&self, module: &ModuleUnit) -> String {
        self.plan(module).to_string()
    }

    /// Artifact text for C# source.
    ///
    /// # Errors
    /// Returns [`GenError::Parse`] if the source does not parse.
    pub fn render_source(&self, source: &str, origin: &str) -> Result<String, GenError> {
        let module = proxen_parser::parse_module(source, origin)?;
        Ok(self.render_module(&module))
    }

    /// Artifact text for a C# file.
    ///
    /// # Errors
    /// Returns [`GenError::Parse`] if the file cannot be read or parsed.
    pub fn render_file(&self, path: &Path) -> Result<String, GenError> {
        let module = proxen_parser::parse_file(path)?;
        Ok(self.render_module(&module))
    }

    #[must_use]
    pub fn has_proxy_interfaces(&self, module: &ModuleUnit) -> bool {
        has_proxy_interfaces(module, &self.conventions)
    }

    /// # Errors
    /// Returns [`GenError::Parse`] if the source does not parse.
    pub fn has_proxy_interfaces_in_source(&self, source: &str, origin: &str) -> Result<bool, GenError> {
        let module = proxen_parser::parse_module(source, origin)?;
        Ok(self.has_proxy_interfaces(&module))
    }

    /// Whether the file holds at least one candidate, without emitting anything.
    ///
    /// # Errors
    /// Returns [`GenError::Parse`] if the file cannot be read or parsed.
    pub fn has_proxy_interfaces_in_file(&self, path: &Path) -> Result<bool, GenError> {
        let module = proxen_parser::parse_file(path)?;
        Ok(self.has_proxy_interfaces(&module))
    }

    /// Generate the artifact for `source` into `output_dir` and return its path.
    ///
    /// # Errors
    /// Returns [`GenError::Parse`] for unreadable or malformed sources and
    /// [`GenError::Io`] / [`GenError::InvalidSource`] for output failures.
    pub fn generate_file(&self, source: &Path, output_dir: &Path) -> Result<PathBuf, GenError> {
        let module = proxen_parser::parse_file(source)?;
        let artifact = self.plan(&module);
        let written = writer::write_artifact(output_dir, source, &artifact.to_string())?;

        tracing::info!(
            source = %source.display(),
            output = %written.display(),
            classes = artifact.classes().count(),
            "generated proxy file"
        );
        Ok(written)
    }
}
