mod builtin;

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fallback weight for a named permission missing from the catalog.
pub const UNKNOWN_WEIGHT: u32 = 50;
/// Fallback weight for a single, specific host pattern.
pub const HOST_PERMISSION_WEIGHT: u32 = 30;

const UNKNOWN_DESCRIPTION: &str =
    "This permission is not recognized. It may be from an older version of the browser or a typo.";

/// A permission is a host pattern when it carries a URL-scheme shape.
/// This is a shape test, not pattern parsing.
pub fn is_host_pattern(id: &str) -> bool {
    id.contains("://")
}

/// The two spellings of the "every site" grant. Semantically identical.
pub fn is_all_urls(id: &str) -> bool {
    id == "<all_urls>" || id == "*://*/*"
}

/// Immutable reference table mapping permission identifiers to risk
/// weights (0–100) and plain-language descriptions.
///
/// Lookups are total: identifiers missing from the table resolve through
/// the host-pattern or unknown-permission fallback, never to an error.
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    weights: HashMap<String, u32>,
    descriptions: HashMap<String, String>,
    host_permission_weight: u32,
    unknown_weight: u32,
}

/// On-disk catalog format for custom catalogs (see `from_file`).
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    weights: HashMap<String, u32>,
    #[serde(default)]
    descriptions: HashMap<String, String>,
    #[serde(default = "default_host_weight")]
    host_permission_weight: u32,
    #[serde(default = "default_unknown_weight")]
    unknown_weight: u32,
}

fn default_host_weight() -> u32 {
    HOST_PERMISSION_WEIGHT
}

fn default_unknown_weight() -> u32 {
    UNKNOWN_WEIGHT
}

static BUILTIN: Lazy<PermissionCatalog> = Lazy::new(|| PermissionCatalog {
    weights: builtin::WEIGHTS
        .iter()
        .map(|&(id, w)| (id.to_string(), w))
        .collect(),
    descriptions: builtin::DESCRIPTIONS
        .iter()
        .map(|&(id, d)| (id.to_string(), d.to_string()))
        .collect(),
    host_permission_weight: HOST_PERMISSION_WEIGHT,
    unknown_weight: UNKNOWN_WEIGHT,
});

impl PermissionCatalog {
    /// The built-in catalog, loaded once for the process lifetime.
    pub fn builtin() -> &'static PermissionCatalog {
        &BUILTIN
    }

    /// Load a custom catalog from a JSON file.
    ///
    /// Weights outside 0–100 are rejected; descriptions are optional and
    /// fall back exactly like unknown permissions do.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&content)?;

        if let Some((id, &w)) = file.weights.iter().find(|(_, &w)| w > 100) {
            return Err(crate::error::GuardError::Catalog(format!(
                "weight {} for '{}' is out of range (0-100)",
                w, id
            )));
        }

        tracing::debug!(path = %path.display(), entries = file.weights.len(), "loaded custom catalog");

        Ok(Self {
            weights: file.weights,
            descriptions: file.descriptions,
            host_permission_weight: file.host_permission_weight,
            unknown_weight: file.unknown_weight,
        })
    }

    /// Risk weight for a permission. Total: unknown host patterns get the
    /// host weight, anything else unknown gets the unknown weight.
    pub fn weight_of(&self, id: &str) -> u32 {
        match self.weights.get(id) {
            Some(&w) => w,
            None if is_host_pattern(id) => self.host_permission_weight,
            None => self.unknown_weight,
        }
    }

    /// Description for a permission. Total, same fallback shape as
    /// `weight_of`.
    pub fn description_of(&self, id: &str) -> String {
        match self.descriptions.get(id) {
            Some(d) => d.clone(),
            None if is_host_pattern(id) => {
                format!("Allows the extension to read/change data on: {}", id)
            }
            None => UNKNOWN_DESCRIPTION.to_string(),
        }
    }

    /// All explicitly weighted permissions, heaviest first, for the
    /// `list-permissions` command.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<CatalogEntry> = self
            .weights
            .iter()
            .map(|(id, &weight)| CatalogEntry {
                id: id.clone(),
                weight,
                description: self.description_of(id),
            })
            .collect();
        entries.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.id.cmp(&b.id)));
        entries
    }
}

/// One row of the catalog, used for `list-permissions` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub weight: u32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_weights_resolve() {
        let catalog = PermissionCatalog::builtin();
        assert_eq!(catalog.weight_of("nativeMessaging"), 100);
        assert_eq!(catalog.weight_of("scripting"), 85);
        assert_eq!(catalog.weight_of("storage"), 15);
        assert_eq!(catalog.weight_of("activeTab"), 0);
    }

    #[test]
    fn unknown_permission_falls_back_to_unknown_weight() {
        let catalog = PermissionCatalog::builtin();
        assert_eq!(catalog.weight_of("fooBarBaz"), 50);
        assert_eq!(catalog.description_of("fooBarBaz"), UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn host_pattern_falls_back_to_host_weight() {
        let catalog = PermissionCatalog::builtin();
        assert_eq!(catalog.weight_of("*://sub.example.com/*"), 30);
        assert!(catalog
            .description_of("*://sub.example.com/*")
            .contains("*://sub.example.com/*"));
    }

    #[test]
    fn all_urls_spellings_are_identical() {
        let catalog = PermissionCatalog::builtin();
        assert_eq!(catalog.weight_of("<all_urls>"), catalog.weight_of("*://*/*"));
        assert_eq!(catalog.weight_of("<all_urls>"), 70);
        assert_eq!(
            catalog.description_of("<all_urls>"),
            catalog.description_of("*://*/*")
        );
        assert!(is_all_urls("<all_urls>"));
        assert!(is_all_urls("*://*/*"));
        assert!(!is_all_urls("*://*.example.com/*"));
    }

    #[test]
    fn host_pattern_shape_is_a_substring_test() {
        assert!(is_host_pattern("*://*.google.com/*"));
        assert!(is_host_pattern("https://example.com/*"));
        assert!(!is_host_pattern("<all_urls>"));
        assert!(!is_host_pattern("cookies"));
    }

    #[test]
    fn entries_are_sorted_heaviest_first() {
        let entries = PermissionCatalog::builtin().entries();
        assert_eq!(entries[0].id, "nativeMessaging");
        assert!(entries.windows(2).all(|w| w[0].weight >= w[1].weight));
    }

    #[test]
    fn custom_catalog_loads_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{
                "weights": { "cookies": 90 },
                "descriptions": { "cookies": "Session access." },
                "unknown_weight": 10
            }"#,
        )
        .unwrap();

        let catalog = PermissionCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.weight_of("cookies"), 90);
        assert_eq!(catalog.description_of("cookies"), "Session access.");
        assert_eq!(catalog.weight_of("somethingElse"), 10);
        // host fallback keeps its default when the file omits it
        assert_eq!(catalog.weight_of("*://a.example/*"), 30);
    }

    #[test]
    fn custom_catalog_rejects_out_of_range_weight() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{ "weights": { "cookies": 150 } }"#).unwrap();
        assert!(PermissionCatalog::from_file(&path).is_err());
    }
}
