use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::risk::RiskCategory;

/// Top-level configuration from `.extguard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Risk tier at or above which `audit` exits nonzero.
    #[serde(default)]
    pub fail_on: Option<RiskCategory>,
    #[serde(default)]
    pub trust: Trust,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Caller-maintained trusted-publisher registry. The engine itself never
/// fetches or validates trust; it only consumes the resulting flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trust {
    /// Extension names treated as verified publishers.
    #[serde(default = "default_verified_names")]
    pub verified_names: HashSet<String>,
}

impl Default for Trust {
    fn default() -> Self {
        Self {
            verified_names: default_verified_names(),
        }
    }
}

fn default_verified_names() -> HashSet<String> {
    [
        "uBlock Origin",
        "uBlock Origin Lite",
        "Bitwarden",
        "Dark Reader",
        "Privacy Badger",
        "Ghostery",
        "HTTPS Everywhere",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional JSON catalog overriding the built-in weight tables.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn is_verified(&self, extension_name: &str) -> bool {
        self.trust.verified_names.contains(extension_name)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# extguard configuration
# See https://github.com/limaronaldo/extguard for documentation.

# Risk tier at or above which `extguard audit` exits nonzero
# (safe, limited, broad, high, critical).
# fail_on = "critical"

[trust]
# Extension names treated as verified publishers (scores a -10 discount).
# Replaces the built-in list when set.
# verified_names = ["uBlock Origin", "Bitwarden"]

[catalog]
# Custom permission catalog (JSON: weights, descriptions, fallbacks).
# path = "catalog.json"
"#
    }
}
