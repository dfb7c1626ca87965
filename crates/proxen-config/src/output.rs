//! Output location settings.

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    "ProxyGenerated".to_string()
}

const fn default_skip_empty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory receiving one artifact per source file.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Skip writing artifacts for sources without candidate interfaces.
    #[serde(default = "default_skip_empty")]
    pub skip_empty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            skip_empty: default_skip_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OutputConfig::default();
        assert_eq!(config.dir, "ProxyGenerated");
        assert!(config.skip_empty);
    }
}
