//! # proxen-config
//!
//! Layered configuration loading for proxen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROXEN_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.proxen/config.toml`
//! 4. User-level `~/.config/proxen/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `PROXEN_CONVENTIONS__MARKER_NAMESPACE` to
//! `conventions.marker_namespace`, `PROXEN_OUTPUT__DIR` to `output.dir`, etc.
//!
//! ```no_run
//! use proxen_config::ProxenConfig;
//!
//! let config = ProxenConfig::load_with_dotenv(None).expect("config");
//! println!("writing into {}", config.output.dir);
//! ```

mod error;
mod general;
mod output;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use output::OutputConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use proxen_core::ProxyConventions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProxenConfig {
    #[serde(default)]
    pub conventions: ProxyConventions,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ProxenConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`Self::load`], with `extra` merged above the project file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_file(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then [`Self::load_from`].
    ///
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the provider chain without an explicit file.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_file(None)
    }

    /// Build the provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment_with_file(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".proxen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // An explicit file must exist; a missing one is reported on extract.
        if let Some(path) = extra {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("PROXEN_").split("__"))
    }

    /// # Errors
    /// Returns [`ConfigError::Conventions`] or [`ConfigError::InvalidValue`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.conventions.validate()?;

        if self.output.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let extension = self.general.source_extension.trim();
        if extension.is_empty() || extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "general.source_extension".to_string(),
                reason: format!("expected a bare extension such as \"cs\", got {extension:?}"),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("proxen").join("config.toml"))
    }
}
