//! extguard — permission risk auditor for browser extensions.
//!
//! Scores the security risk of an extension from its declared
//! permissions: a 0–100 score, a five-tier risk category, and a
//! plain-language summary of why. Offline, heuristic, no code analysis.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use extguard::{audit, AuditOptions};
//!
//! let options = AuditOptions::default();
//! let report = audit(Path::new("./my-extension"), &options).unwrap();
//! println!("{}: {}/100", report.extension_name, report.assessment.score);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod risk;

use std::path::Path;

use serde::{Deserialize, Serialize};

use catalog::PermissionCatalog;
use config::Config;
use error::Result;
use output::OutputFormat;
use risk::{RiskAssessment, RiskCategory, RiskSummary};

/// Options for an audit invocation.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Path to config file (defaults to `.extguard.toml` in the audited
    /// directory).
    pub config_path: Option<std::path::PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Also count optional permissions the extension may request later.
    pub include_optional: bool,
    /// Force the verified-publisher flag instead of consulting the
    /// config registry.
    pub verified_override: Option<bool>,
    /// CLI override for the fail_on threshold.
    pub fail_on_override: Option<RiskCategory>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            include_optional: false,
            verified_override: None,
            fail_on_override: None,
        }
    }
}

/// One permission with its resolved weight and description, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditedPermission {
    pub id: String,
    pub weight: u32,
    pub description: String,
}

/// Complete audit report for one extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub extension_name: String,
    pub version: Option<String>,
    pub verified_publisher: bool,
    pub assessment: RiskAssessment,
    pub summary: RiskSummary,
    /// Audited permissions, heaviest first.
    pub permissions: Vec<AuditedPermission>,
    /// False when the category reaches the configured fail_on threshold.
    pub pass: bool,
}

/// Run a complete audit: load config and manifest, assess, summarize.
pub fn audit(path: &Path, options: &AuditOptions) -> Result<AuditReport> {
    let config_path = options.config_path.clone().unwrap_or_else(|| {
        let dir = if path.is_dir() {
            path
        } else {
            path.parent().unwrap_or_else(|| Path::new("."))
        };
        dir.join(".extguard.toml")
    });
    let config = Config::load(&config_path)?;

    let custom_catalog = match &config.catalog.path {
        Some(p) => Some(PermissionCatalog::from_file(p)?),
        None => None,
    };
    let catalog = custom_catalog
        .as_ref()
        .unwrap_or_else(|| PermissionCatalog::builtin());

    let manifest = manifest::load(path, options.include_optional)?;
    let verified = options
        .verified_override
        .unwrap_or_else(|| config.is_verified(&manifest.name));

    let assessment = risk::assess(catalog, &manifest.permissions, verified);
    let summary = risk::summarize(&manifest.permissions, assessment.score, &assessment.breakdown);

    let mut permissions: Vec<AuditedPermission> = manifest
        .permissions
        .iter()
        .map(|p| AuditedPermission {
            id: p.clone(),
            weight: catalog.weight_of(p),
            description: catalog.description_of(p),
        })
        .collect();
    permissions.sort_by(|a, b| b.weight.cmp(&a.weight));

    let fail_on = options.fail_on_override.or(config.fail_on);
    let pass = fail_on.map_or(true, |threshold| assessment.category < threshold);

    Ok(AuditReport {
        extension_name: manifest.name,
        version: manifest.version,
        verified_publisher: verified,
        assessment,
        summary,
        permissions,
        pass,
    })
}

/// Render audit reports in the specified format.
pub fn render_reports(reports: &[AuditReport], format: OutputFormat) -> Result<String> {
    output::render(reports, format)
}
