//! WebExtension manifest loading.
//!
//! Reads a `manifest.json` (MV2 or MV3) and flattens its permission
//! declarations into the single de-duplicated list the risk engine
//! consumes. API permissions and host patterns are combined; first
//! occurrence order is preserved because base-weight ties keep the first
//! permission encountered.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GuardError, Result};

/// The manifest fields the auditor cares about. Everything else in the
/// file is ignored.
#[derive(Debug, Default, Deserialize)]
struct RawManifest {
    name: Option<String>,
    short_name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    permissions: Vec<String>,
    #[serde(default)]
    host_permissions: Vec<String>,
    #[serde(default)]
    optional_permissions: Vec<String>,
    #[serde(default)]
    optional_host_permissions: Vec<String>,
}

/// A loaded extension manifest, reduced to audit inputs.
#[derive(Debug, Clone)]
pub struct ExtensionManifest {
    pub name: String,
    pub version: Option<String>,
    /// API permissions and host patterns, combined and de-duplicated,
    /// in declaration order.
    pub permissions: Vec<String>,
}

/// Load a manifest from a `manifest.json` file or a directory containing
/// one. `include_optional` also folds in permissions the extension may
/// request later (worst-case grant).
pub fn load(path: &Path, include_optional: bool) -> Result<ExtensionManifest> {
    let file = if path.is_dir() {
        path.join("manifest.json")
    } else {
        path.to_path_buf()
    };
    if !file.exists() {
        return Err(GuardError::NoManifest(path.display().to_string()));
    }

    let content = std::fs::read_to_string(&file)?;
    let raw: RawManifest =
        serde_json::from_str(&content).map_err(|e| GuardError::Manifest {
            file: file.display().to_string(),
            message: e.to_string(),
        })?;

    let mut permissions = Vec::new();
    let mut seen = HashSet::new();
    let mut extend = |list: &[String]| {
        for p in list {
            if seen.insert(p.clone()) {
                permissions.push(p.clone());
            }
        }
    };
    extend(&raw.permissions);
    extend(&raw.host_permissions);
    if include_optional {
        extend(&raw.optional_permissions);
        extend(&raw.optional_host_permissions);
    }

    Ok(ExtensionManifest {
        name: display_name(&raw, &file),
        version: raw.version,
        permissions,
    })
}

/// Resolve a usable display name: `name`, then `short_name`, then the
/// containing directory. Unexpanded `__MSG_*__` i18n placeholders are
/// treated as absent.
fn display_name(raw: &RawManifest, file: &Path) -> String {
    let usable = |n: &&String| !n.is_empty() && !n.starts_with("__MSG_");
    raw.name
        .as_ref()
        .filter(usable)
        .or(raw.short_name.as_ref().filter(usable))
        .cloned()
        .unwrap_or_else(|| {
            file.parent()
                .and_then(|d| d.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "unknown".into())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_manifest(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn combines_and_dedupes_permission_lists() {
        let (_dir, path) = write_manifest(
            r#"{
                "name": "Example",
                "version": "2.1.0",
                "permissions": ["cookies", "storage", "cookies"],
                "host_permissions": ["*://*.example.com/*", "storage"]
            }"#,
        );
        let m = load(&path, false).unwrap();
        assert_eq!(m.name, "Example");
        assert_eq!(m.version.as_deref(), Some("2.1.0"));
        assert_eq!(
            m.permissions,
            vec!["cookies", "storage", "*://*.example.com/*"]
        );
    }

    #[test]
    fn loads_from_a_directory() {
        let (dir, _path) = write_manifest(r#"{ "name": "Dir Ext", "permissions": ["tabs"] }"#);
        let m = load(dir.path(), false).unwrap();
        assert_eq!(m.name, "Dir Ext");
        assert_eq!(m.permissions, vec!["tabs"]);
    }

    #[test]
    fn optional_permissions_fold_in_when_requested() {
        let (_dir, path) = write_manifest(
            r#"{
                "name": "Opt",
                "permissions": ["storage"],
                "optional_permissions": ["cookies"],
                "optional_host_permissions": ["<all_urls>"]
            }"#,
        );
        let without = load(&path, false).unwrap();
        assert_eq!(without.permissions, vec!["storage"]);

        let with = load(&path, true).unwrap();
        assert_eq!(with.permissions, vec!["storage", "cookies", "<all_urls>"]);
    }

    #[test]
    fn i18n_placeholder_name_falls_back() {
        let (_dir, path) = write_manifest(
            r#"{ "name": "__MSG_appName__", "short_name": "Short", "permissions": [] }"#,
        );
        let m = load(&path, false).unwrap();
        assert_eq!(m.name, "Short");
    }

    #[test]
    fn missing_manifest_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path(), false).unwrap_err();
        assert!(matches!(err, GuardError::NoManifest(_)));
    }

    #[test]
    fn malformed_manifest_reports_the_file() {
        let (_dir, path) = write_manifest("{ not json");
        let err = load(&path, false).unwrap_err();
        assert!(matches!(err, GuardError::Manifest { .. }));
    }
}
