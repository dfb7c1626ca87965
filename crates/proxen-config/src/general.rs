//! Source selection settings.

use serde::{Deserialize, Serialize};

fn default_source_extension() -> String {
    "cs".to_string()
}

const fn default_respect_gitignore() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Extension of source files picked up when walking directories.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Honor `.gitignore` and `.proxenignore` while walking directories.
    #[serde(default = "default_respect_gitignore")]
    pub respect_gitignore: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            respect_gitignore: default_respect_gitignore(),
        }
    }
}
